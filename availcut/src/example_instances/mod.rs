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

//! Instances for testing

use crate::instance::Instance;

mod two_node_chain;
pub use two_node_chain::TwoNodeChain;

mod small_mesh;
pub use small_mesh::SmallMesh;

/// Trait for easier access to example instances.
pub trait ExampleInstance {
    /// Get the instance with the chosen variant.
    fn instance(variant: usize) -> Instance;
}
