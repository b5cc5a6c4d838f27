// AvailCut: Availability Separation for Service Function Chain Placement
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! Counters of the separation engine

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Counters shared by all solver threads invoking the same engine. Every counter is an
/// independent atomic, so unrelated updates never contend on a lock.
#[derive(Debug, Default)]
pub struct SeparationCounters {
    user_cuts: AtomicUsize,
    lazy_constraints: AtomicUsize,
    // bit pattern of an `f64`
    time: AtomicU64,
}

impl SeparationCounters {
    /// Create new counters, all set to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase by one the number of user cuts added through the heuristic procedure.
    #[inline]
    pub fn on_user_cut(&self) {
        self.user_cuts.fetch_add(1, Ordering::Relaxed);
    }

    /// Increase by one the number of lazy constraints added.
    #[inline]
    pub fn on_lazy_constraint(&self) {
        self.lazy_constraints.fetch_add(1, Ordering::Relaxed);
    }

    /// Add `seconds` to the total time spent inside the callback.
    pub fn add_time(&self, seconds: f64) {
        // the closure always returns `Some`, hence the update cannot fail.
        let _ = self.time.fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
            Some((f64::from_bits(bits) + seconds).to_bits())
        });
    }

    /// Number of user cuts added so far
    pub fn user_cuts(&self) -> usize {
        self.user_cuts.load(Ordering::Relaxed)
    }

    /// Number of lazy constraints added so far
    pub fn lazy_constraints(&self) -> usize {
        self.lazy_constraints.load(Ordering::Relaxed)
    }

    /// Total time spent inside the callback so far, in seconds
    pub fn separation_time(&self) -> f64 {
        f64::from_bits(self.time.load(Ordering::Acquire))
    }

    /// Take a snapshot of all counters. Only consistent once no solver thread is running.
    pub fn snapshot(&self) -> SeparationStats {
        SeparationStats {
            user_cuts: self.user_cuts(),
            lazy_constraints: self.lazy_constraints(),
            separation_time: self.separation_time(),
        }
    }
}

/// Statistics collected by the separation engine during one solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeparationStats {
    /// Total number of heuristic availability cuts
    pub user_cuts: usize,
    /// Total number of lazy constraints (rejected candidates)
    pub lazy_constraints: usize,
    /// Total wall time spent inside the callback, in seconds
    pub separation_time: f64,
}
