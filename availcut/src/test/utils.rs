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

#![cfg(test)]
//! Helpers to generate small random instances and to enumerate all integer assignments.

use crate::availability::{chain_availability, section_availability};
use crate::instance::{Demand, Instance, Node, NodeId, Vnf};
use crate::placement::{is_placed, ChainPlacement};

use itertools::Itertools;
use rand::prelude::*;

/// Node availabilities used for random instances
pub const AVAILABILITIES: [f64; 5] = [0.5, 0.8, 0.9, 0.95, 0.99];

/// Required availabilities used for random instances. None of them is reachable exactly by any
/// placement built from `AVAILABILITIES` on at most three nodes and two sections.
pub const REQUIREMENTS: [f64; 4] = [0.7, 0.93, 0.965, 0.987];

/// Generate an instance with a single demand.
pub fn random_instance(
    rng: &mut StdRng,
    num_nodes: usize,
    num_sections: usize,
    required: f64,
) -> Instance {
    let mut instance = Instance::new();
    for v in 0..num_nodes {
        let a = *AVAILABILITIES.choose(rng).unwrap();
        instance.add_node(Node::new(format!("n{}", v), a)).unwrap();
    }
    let vnf = instance.add_vnf(Vnf::new("f", 1.0, vec![1.0; num_nodes])).unwrap();
    let (s, t) = (NodeId::new(0), NodeId::new(num_nodes - 1));
    instance.add_demand(Demand::new("d", s, t, required, vec![vnf; num_sections])).unwrap();
    instance
}

/// Random fractional point. About a fifth of the values is exactly 1, and another fifth is 0.
pub fn random_point(rng: &mut StdRng, num_nodes: usize, num_sections: usize) -> ChainPlacement {
    (0..num_sections)
        .map(|_| {
            (0..num_nodes)
                .map(|_| match rng.gen_range(0, 5) {
                    0 => 0.0,
                    1 => 1.0,
                    _ => rng.gen::<f64>(),
                })
                .collect()
        })
        .collect()
}

/// All integer assignments of a chain with the given shape.
pub fn integer_assignments(num_nodes: usize, num_sections: usize) -> Vec<ChainPlacement> {
    assert!(num_nodes * num_sections > 0);
    itertools::repeat_n(vec![0.0, 1.0], num_nodes * num_sections)
        .multi_cartesian_product()
        .map(|values| values.chunks(num_nodes).map(|c| c.to_vec()).collect())
        .collect()
}

/// Chain availability of a placement, computed from scratch in chain order.
pub fn true_availability(instance: &Instance, x: &ChainPlacement) -> f64 {
    let sections = x
        .iter()
        .map(|values| {
            section_availability(
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, x)| is_placed(**x))
                    .map(|(v, _)| instance.node(NodeId::new(v)).availability()),
            )
        })
        .collect::<Vec<f64>>();
    chain_availability(&sections)
}
