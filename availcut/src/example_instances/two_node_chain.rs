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

//! # Two Node Chain

use super::ExampleInstance;
use crate::instance::{Demand, Instance, Link, Node, Vnf};

/// # Two Node Chain
///
/// Two nodes `a` (availability 0.9) and `b` (availability 0.99), connected in both directions,
/// and a single demand from `a` to `b` with two sections (`fw` followed by `nat`).
///
/// # Variant 0
/// The demand requires an availability of 0.95. One section on `a` alone already violates it.
///
/// # Variant 1
/// The demand requires an availability of 0.85. Each section on `a` alone satisfies it, but not
/// both together.
pub struct TwoNodeChain {}

impl ExampleInstance for TwoNodeChain {
    fn instance(variant: usize) -> Instance {
        let required = match variant {
            0 => 0.95,
            1 => 0.85,
            _ => panic!("TwoNodeChain has no variant {}", variant),
        };
        let mut instance = Instance::new();
        let a = instance.add_node(Node::new("a", 0.9).with_capacity(10.0)).unwrap();
        let b = instance.add_node(Node::new("b", 0.99).at(1.0, 0.0).with_capacity(10.0)).unwrap();
        instance.add_link(a, b, link("ab")).unwrap();
        instance.add_link(b, a, link("ba")).unwrap();
        let fw = instance.add_vnf(Vnf::new("fw", 1.0, vec![1.0, 2.0])).unwrap();
        let nat = instance.add_vnf(Vnf::new("nat", 0.5, vec![1.0, 2.0])).unwrap();
        instance
            .add_demand(Demand::new("d0", a, b, required, vec![fw, nat]).with_traffic(10.0, 1.0))
            .unwrap();
        instance
    }
}

fn link(name: &str) -> Link {
    Link { name: name.to_string(), delay: 1.0, bandwidth: 100.0 }
}
