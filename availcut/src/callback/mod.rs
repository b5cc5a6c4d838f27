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

//! # Callback Interface
//!
//! The branch-and-cut solver pauses its search at several points and hands a
//! [`CallbackContext`] to the [`SeparationEngine`](crate::separation::SeparationEngine). The
//! context tells where the solver paused, gives access to the current point, and accepts the
//! inequalities produced by the engine.

mod replay;
pub use replay::ReplayContext;

use crate::placement::{Placement, PlacementVar};
use crate::{Error, EPS};

use itertools::Itertools;
use std::fmt;

/// Points at which the solver may invoke a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextId {
    /// A fractional solution of the LP relaxation is available
    Relaxation,
    /// An integer feasible candidate (or an unbounded ray) was found
    Candidate,
    /// A solver thread was started
    ThreadUp,
    /// A solver thread is about to terminate
    ThreadDown,
    /// Progress report of a single thread
    LocalProgress,
    /// Progress report of the whole search
    GlobalProgress,
}

/// How the solver should manage a user cut once it is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CutManagement {
    /// The solver may drop the cut if it is not useful
    Filter,
    /// The cut is kept in the pool
    Force,
    /// The cut may be purged later on
    Purge,
}

/// # Cut
/// Covering inequality $\sum_{x \in vars} x \geq lb$ on placement variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    /// Optional name of the cut
    pub name: Option<String>,
    /// Variables on the left hand side, all with coefficient 1
    pub vars: Vec<PlacementVar>,
    /// Right hand side
    pub lower_bound: f64,
}

impl Cut {
    /// Create the cover inequality `sum(vars) >= 1`.
    pub fn cover(vars: Vec<PlacementVar>) -> Self {
        Self { name: None, vars, lower_bound: 1.0 }
    }

    /// Set the name of the cut
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Evaluate the left hand side on a placement. Variables outside the placement count as 0.
    pub fn lhs(&self, placement: &Placement) -> f64 {
        self.vars.iter().filter_map(|var| placement.get(*var)).sum()
    }

    /// Checks if the placement satisfies the inequality, up to `EPS`.
    pub fn is_satisfied(&self, placement: &Placement) -> bool {
        self.lhs(placement) >= self.lower_bound - EPS
    }
}

impl fmt::Display for Cut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.as_ref() {
            write!(f, "{}: ", name)?;
        }
        if self.vars.is_empty() {
            write!(f, "0 >= {}", self.lower_bound)
        } else {
            write!(f, "{} >= {}", self.vars.iter().join(" + "), self.lower_bound)
        }
    }
}

/// Interface through which the solver exposes its state to a callback.
///
/// Implementations must check the protocol: values of the relaxation can only be queried in
/// [`ContextId::Relaxation`], and values of the candidate only in [`ContextId::Candidate`] when
/// [`is_candidate_point`](CallbackContext::is_candidate_point) holds.
pub trait CallbackContext {
    /// Where the solver paused
    fn id(&self) -> ContextId;

    /// In a candidate context, whether a concrete point (rather than an unbounded ray) is
    /// available
    fn is_candidate_point(&self) -> bool;

    /// Value of a variable in the current relaxation solution
    fn relaxation_value(&self, var: PlacementVar) -> Result<f64, Error>;

    /// Value of a variable in the current candidate
    fn candidate_value(&self, var: PlacementVar) -> Result<f64, Error>;

    /// Add a user cut. The solver is free to ignore it.
    fn add_user_cut(&mut self, cut: Cut, management: CutManagement) -> Result<(), Error>;

    /// Reject the current candidate, and add the violated inequality as lazy constraint.
    fn reject_candidate(&mut self, cut: Cut) -> Result<(), Error>;

    /// Monotonic clock sample, in seconds
    fn elapsed_time(&self) -> f64;
}
