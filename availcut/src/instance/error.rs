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

//! Module that contains the definitions for the instance error

use thiserror::Error;

/// Error while building or reading an instance
#[derive(Debug, Error)]
pub enum InstanceError {
    /// File could not be read
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// A number in the table could not be parsed
    #[error("Cannot parse a number: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),
    /// A row of a table has too few columns
    #[error("Line {line} of {file} has {found} columns, but at least {expected} are required")]
    MissingColumns {
        /// The file (or table) in which the error occurred
        file: String,
        /// Line number, starting at 1 (including the header)
        line: usize,
        /// Number of columns found
        found: usize,
        /// Number of columns required
        expected: usize,
    },
    /// Availability must be in the range (0, 1]
    #[error("Availability of {0} must be in (0, 1], but it is {1}")]
    InvalidAvailability(String, f64),
    /// Node name was already used
    #[error("Node name is not unique: {0}")]
    DuplicateNode(String),
    /// VNF name was already used
    #[error("VNF name is not unique: {0}")]
    DuplicateVnf(String),
    /// Node name could not be found
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    /// VNF name could not be found
    #[error("VNF not found: {0}")]
    VnfNotFound(String),
    /// Node index is not part of the instance
    #[error("Node index {0} is not part of the instance")]
    InvalidNode(usize),
    /// VNF index is not part of the instance
    #[error("VNF index {0} is not part of the instance")]
    InvalidVnf(usize),
    /// Placement costs of a VNF do not cover every node
    #[error("VNF {name} has {found} placement costs, but the instance has {expected} nodes")]
    PlacementCostMismatch {
        /// Name of the VNF
        name: String,
        /// Number of placement costs given
        found: usize,
        /// Number of nodes in the instance
        expected: usize,
    },
    /// Nodes must be added before any VNF
    #[error("Cannot add node {0} after VNFs were defined")]
    NodeAfterVnf(String),
}
