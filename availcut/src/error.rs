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

//! Module containing all error types

use crate::callback::ContextId;
use crate::instance::InstanceError;
use crate::placement::PlacementVar;
use thiserror::Error;

/// Main error type. Every variant except `Instance` is a breach of the callback protocol, and
/// aborts the solve.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine was invoked at a point where it does not separate anything
    #[error("Unexpected context id: {0:?}")]
    UnexpectedContext(ContextId),
    /// A solver query was issued outside of the context where it is valid
    #[error("Protocol violation: {0}")]
    Protocol(&'static str),
    /// The candidate context has no concrete point (e.g., an unbounded ray)
    #[error("Unbounded solution within callback")]
    UnboundedCandidate,
    /// The variable is not part of the formulation
    #[error("Unknown placement variable: {0}")]
    UnknownVariable(PlacementVar),
    /// Error propagated from reading or building the instance
    #[error("Instance Error: {0}")]
    Instance(#[from] InstanceError),
}
