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

//! # Separation Engine
//!
//! The engine is registered with the branch-and-cut solver for two kinds of pauses:
//!
//! - **Relaxation** ([`ContextId::Relaxation`]): the current point is fractional. For every
//!   demand, the [heuristic](heuristic) tries to find a violated availability cut, which is added
//!   as user cut. The solver may drop these cuts.
//! - **Candidate** ([`ContextId::Candidate`]): the current point is integer. For every demand whose
//!   chain availability is below the requirement, the [exact separation](exact) builds a lifted
//!   lazy constraint and the candidate is rejected.
//!
//! Any other pause is a protocol violation and aborts the solve with
//! [`Error::UnexpectedContext`].
//!
//! The solver may invoke the engine from many threads at once. Each invocation works on its own
//! [`Placement`] snapshot, and the only shared state are the [`SeparationCounters`].

pub mod exact;
pub mod heuristic;
mod stats;

pub use stats::{SeparationCounters, SeparationStats};

use crate::callback::{CallbackContext, ContextId, CutManagement};
use crate::instance::{DemandId, Instance};
use crate::placement::Placement;
use crate::Error;

use log::*;

/// # Separation Engine
/// Callback separating the availability constraints of every demand of an instance.
#[derive(Debug)]
pub struct SeparationEngine {
    instance: Instance,
    lifting: bool,
    counters: SeparationCounters,
}

impl SeparationEngine {
    /// Create a new engine for the instance. Lifting of lazy constraints is enabled.
    pub fn new(instance: Instance) -> Self {
        Self { instance, lifting: true, counters: SeparationCounters::new() }
    }

    /// Enable or disable lifting of lazy constraints
    pub fn with_lifting(mut self, lifting: bool) -> Self {
        self.lifting = lifting;
        self
    }

    /// Returns the instance
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Entry point for the solver. Dispatches on the context id, and adds the time spent to the
    /// counters.
    pub fn invoke<C>(&self, context: &mut C) -> Result<(), Error>
    where
        C: CallbackContext + ?Sized,
    {
        let time = context.elapsed_time();
        match context.id() {
            ContextId::Relaxation => self.add_user_cuts(context)?,
            ContextId::Candidate => self.add_lazy_constraints(context)?,
            id => {
                error!("Unexpected context id: {:?}", id);
                return Err(Error::UnexpectedContext(id));
            }
        }
        self.counters.add_time(context.elapsed_time() - time);
        Ok(())
    }

    /// Solve the separation problem of every demand for the current fractional point. Must only
    /// be called within the relaxation context.
    pub fn add_user_cuts<C>(&self, context: &mut C) -> Result<(), Error>
    where
        C: CallbackContext + ?Sized,
    {
        let x = self.fractional_solution(context)?;
        for k in (0..self.instance.num_demands()).map(DemandId) {
            if let Some(cut) = heuristic::heuristic_cut(&self.instance, k, x.chain(k)) {
                debug!("Adding user cut for demand {}: {}", k.0, cut);
                context.add_user_cut(cut, CutManagement::Filter)?;
                self.counters.on_user_cut();
            }
        }
        Ok(())
    }

    /// Solve the separation problem of every demand for the current integer candidate, and
    /// reject the candidate for every violated demand. Must only be called within the candidate
    /// context.
    pub fn add_lazy_constraints<C>(&self, context: &mut C) -> Result<(), Error>
    where
        C: CallbackContext + ?Sized,
    {
        let x = self.integer_solution(context)?;
        for k in (0..self.instance.num_demands()).map(DemandId) {
            if let Some(cut) = exact::lazy_cut(&self.instance, k, x.chain(k), self.lifting) {
                debug!("Adding lazy constraint for demand {}: {}", k.0, cut);
                context.reject_candidate(cut)?;
                self.counters.on_lazy_constraint();
            }
        }
        Ok(())
    }

    /// Returns the current fractional solution.
    pub fn fractional_solution<C>(&self, context: &C) -> Result<Placement, Error>
    where
        C: CallbackContext + ?Sized,
    {
        if context.id() != ContextId::Relaxation {
            error!("Trying to get fractional solution while not in relaxation context!");
            return Err(Error::Protocol("fractional solution requested outside of relaxation"));
        }
        Placement::try_from_fn(&self.instance, |var| context.relaxation_value(var))
    }

    /// Returns the current integer solution.
    pub fn integer_solution<C>(&self, context: &C) -> Result<Placement, Error>
    where
        C: CallbackContext + ?Sized,
    {
        if context.id() != ContextId::Candidate {
            error!("Trying to get integer solution while not in candidate context!");
            return Err(Error::Protocol("integer solution requested outside of candidate"));
        }
        if !context.is_candidate_point() {
            error!("Unbounded solution within callback!");
            return Err(Error::UnboundedCandidate);
        }
        Placement::try_from_fn(&self.instance, |var| context.candidate_value(var))
    }

    /// Returns the number of user cuts added so far.
    pub fn cut_count(&self) -> usize {
        self.counters.user_cuts()
    }

    /// Returns the number of lazy constraints added so far.
    pub fn lazy_constraint_count(&self) -> usize {
        self.counters.lazy_constraints()
    }

    /// Returns the total time spent in the callback so far, in seconds.
    pub fn total_separation_time(&self) -> f64 {
        self.counters.separation_time()
    }

    /// Returns all counters at once
    pub fn stats(&self) -> SeparationStats {
        self.counters.snapshot()
    }
}
