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

//! # Small Mesh

use super::ExampleInstance;
use crate::instance::{Demand, Instance, Link, Node, Vnf};

/// # Small Mesh
///
/// Four nodes in a full mesh, with availabilities 0.9, 0.95, 0.99 and 0.999, and three VNFs.
///
/// # Variant 0
/// Three demands:
/// - `d0`: `fw -> ids -> nat`, availability 0.99
/// - `d1`: `fw`, availability 0.999
/// - `d2`: `ids -> nat`, availability 0.96
///
/// # Variant 1
/// Same as variant 0, but node `r3` is perfectly available (availability 1).
pub struct SmallMesh {}

impl ExampleInstance for SmallMesh {
    fn instance(variant: usize) -> Instance {
        let last = match variant {
            0 => 0.999,
            1 => 1.0,
            _ => panic!("SmallMesh has no variant {}", variant),
        };
        let mut instance = Instance::new();
        let nodes = [("r0", 0.9), ("r1", 0.95), ("r2", 0.99), ("r3", last)]
            .iter()
            .map(|(name, a)| instance.add_node(Node::new(*name, *a).with_capacity(100.0)).unwrap())
            .collect::<Vec<_>>();
        for (i, u) in nodes.iter().enumerate() {
            for (j, v) in nodes.iter().enumerate().filter(|(j, _)| *j != i) {
                let link = Link { name: format!("l{}{}", i, j), delay: 1.0, bandwidth: 1000.0 };
                instance.add_link(*u, *v, link).unwrap();
            }
        }
        let fw = instance.add_vnf(Vnf::new("fw", 1.0, vec![4.0, 3.0, 2.0, 1.0])).unwrap();
        let ids = instance.add_vnf(Vnf::new("ids", 2.0, vec![1.0, 1.0, 1.0, 1.0])).unwrap();
        let nat = instance.add_vnf(Vnf::new("nat", 0.5, vec![1.0, 2.0, 3.0, 4.0])).unwrap();
        let (r0, r3) = (nodes[0], nodes[3]);
        instance.add_demand(Demand::new("d0", r0, r3, 0.99, vec![fw, ids, nat])).unwrap();
        instance.add_demand(Demand::new("d1", r3, r0, 0.999, vec![fw])).unwrap();
        instance.add_demand(Demand::new("d2", nodes[1], nodes[2], 0.96, vec![ids, nat])).unwrap();
        instance
    }
}
