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

#![deny(missing_docs)]

//! # AvailCut: Availability Separation for Service Function Chains
//! This is a library for enforcing end-to-end availability requirements of service function
//! chains inside a branch-and-cut solver for the VNF placement problem.
//!
//! ## Problem Statement
//! Given
//! - a physical network, where every node $v$ is operational with probability $a_v$,
//! - a set of demands, each of which is a chain of sections, and every section requires one VNF,
//! - a required availability $A_k$ for every demand $k$,
//!
//! place the sections on the nodes (possibly replicated on several nodes), such that every chain
//! reaches its required availability, and the placement cost is minimized. The availability
//! requirement is not linear, and is therefore enforced by cutting planes: whenever the solver
//! pauses at a point, the separation engine checks the requirement of every demand, and emits the
//! inequalities that cut off any violating point.
//!
//! ## Structure
//!
//! - **[`Availability`](availability)**: Pure functions computing section and chain availability.
//!
//! - **[`Instance`](instance)**: The nodes, links, VNFs and demands of a problem instance, and
//!   functions to read them from data files.
//!
//! - **[`Placement`](placement)**: Snapshot of the placement variables $x_{k,i,v}$ at the point
//!   where the solver paused.
//!
//! - **[`Callback`](callback)**: The interface between the solver and the separation engine, and
//!   the [`ReplayContext`](callback::ReplayContext) to run the engine on a fixed point.
//!
//! - **[`Separation`](separation)**: The [`SeparationEngine`](separation::SeparationEngine),
//!   with the greedy [heuristic](separation::heuristic) for fractional points and the
//!   [exact separation](separation::exact) with lifting for integer points.
//!
//! - **[`ExampleInstances`](example_instances)**: Collection of small instances for testing.
//!
//! ## Usage
//!
//! ```
//! use availcut::callback::ReplayContext;
//! use availcut::separation::SeparationEngine;
//! use availcut::placement::Placement;
//! use availcut::Error;
//! # use availcut::example_instances::*;
//!
//! fn main() -> Result<(), Error> {
//!     // prepare the instance
//!     // let instance = ...
//! # let instance = TwoNodeChain::instance(0);
//!     let engine = SeparationEngine::new(instance);
//!
//!     // the solver invokes the engine at every candidate
//!     let candidate = Placement::from_values(vec![vec![vec![1.0, 0.0], vec![1.0, 0.0]]]);
//!     let mut context = ReplayContext::candidate(candidate);
//!     engine.invoke(&mut context)?;
//!
//!     assert!(context.is_rejected());
//!     assert_eq!(engine.lazy_constraint_count(), 1);
//!     Ok(())
//! }
//! ```

pub mod availability;
pub mod callback;
mod error;
pub mod example_instances;
pub mod instance;
pub mod placement;
pub mod separation;

mod test;

pub use error::Error;

/// Tolerance for deciding if a variable is integer.
pub const EPS: f64 = 1e-4;
