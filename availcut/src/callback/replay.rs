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

//! Offline callback context, replaying a fixed point

use super::{CallbackContext, ContextId, Cut, CutManagement};
use crate::placement::{Placement, PlacementVar};
use crate::Error;

use log::*;
use std::time::Instant;

/// # Replay Context
///
/// Callback context that presents a fixed point to the engine, as if the solver had paused at it,
/// and records every inequality it receives. It checks the protocol in the same way as the
/// solver does, which makes it suitable both for inspecting points offline and for testing.
#[derive(Debug, Clone)]
pub struct ReplayContext {
    id: ContextId,
    point: Option<Placement>,
    start: Instant,
    user_cuts: Vec<(Cut, CutManagement)>,
    rejections: Vec<Cut>,
}

impl ReplayContext {
    /// Context of a fractional relaxation solution
    pub fn relaxation(point: Placement) -> Self {
        Self::new(ContextId::Relaxation, Some(point))
    }

    /// Context of an integer candidate
    pub fn candidate(point: Placement) -> Self {
        Self::new(ContextId::Candidate, Some(point))
    }

    /// Candidate context without a concrete point
    pub fn unbounded_candidate() -> Self {
        Self::new(ContextId::Candidate, None)
    }

    /// Create a context with any id. `point` is returned by the value queries valid for that id.
    pub fn new(id: ContextId, point: Option<Placement>) -> Self {
        Self { id, point, start: Instant::now(), user_cuts: Vec::new(), rejections: Vec::new() }
    }

    /// All user cuts added so far
    pub fn user_cuts(&self) -> &[(Cut, CutManagement)] {
        &self.user_cuts
    }

    /// All inequalities with which the candidate was rejected
    pub fn rejections(&self) -> &[Cut] {
        &self.rejections
    }

    /// Returns true if the candidate was rejected at least once
    pub fn is_rejected(&self) -> bool {
        !self.rejections.is_empty()
    }

    fn value(&self, var: PlacementVar) -> Result<f64, Error> {
        self.point
            .as_ref()
            .ok_or(Error::UnboundedCandidate)?
            .get(var)
            .ok_or(Error::UnknownVariable(var))
    }
}

impl CallbackContext for ReplayContext {
    fn id(&self) -> ContextId {
        self.id
    }

    fn is_candidate_point(&self) -> bool {
        self.id == ContextId::Candidate && self.point.is_some()
    }

    fn relaxation_value(&self, var: PlacementVar) -> Result<f64, Error> {
        if self.id != ContextId::Relaxation {
            return Err(Error::Protocol("relaxation value queried outside of relaxation context"));
        }
        self.value(var)
    }

    fn candidate_value(&self, var: PlacementVar) -> Result<f64, Error> {
        if self.id != ContextId::Candidate {
            return Err(Error::Protocol("candidate value queried outside of candidate context"));
        }
        self.value(var)
    }

    fn add_user_cut(&mut self, cut: Cut, management: CutManagement) -> Result<(), Error> {
        if self.id != ContextId::Relaxation {
            return Err(Error::Protocol("user cut added outside of relaxation context"));
        }
        trace!("user cut: {}", cut);
        self.user_cuts.push((cut, management));
        Ok(())
    }

    fn reject_candidate(&mut self, cut: Cut) -> Result<(), Error> {
        if !self.is_candidate_point() {
            return Err(Error::Protocol("candidate rejected outside of candidate context"));
        }
        trace!("reject candidate: {}", cut);
        self.rejections.push(cut);
        Ok(())
    }

    fn elapsed_time(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
