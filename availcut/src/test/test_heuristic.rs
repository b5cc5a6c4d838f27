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
use super::utils::*;
use crate::example_instances::*;
use crate::instance::{DemandId, NodeId};
use crate::placement::PlacementVar;
use crate::separation::heuristic::*;

use rand::prelude::*;

const K: DemandId = DemandId(0);

fn var(section: usize, node: usize) -> PlacementVar {
    PlacementVar::new(K, section, NodeId::new(node))
}

#[test]
fn fractional_point_is_cut() {
    let instance = TwoNodeChain::instance(0);
    let x = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
    let cut = heuristic_cut(&instance, K, &x).unwrap();
    // section 0 gets a and b, section 1 only a. Only (1, b) remains free.
    assert_eq!(cut.vars, vec![var(1, 1)]);
    assert_eq!(cut.lower_bound, 1.0);
    assert_eq!(cut.name.as_deref(), Some(CUT_NAME));
}

#[test]
fn cut_with_two_sections() {
    let instance = TwoNodeChain::instance(1);
    let x = vec![vec![0.6, 0.4], vec![0.6, 0.4]];
    let cut = heuristic_cut(&instance, K, &x).unwrap();
    assert_eq!(cut.vars, vec![var(0, 1), var(1, 1)]);
}

#[test]
fn satisfied_cut_is_not_returned() {
    let instance = TwoNodeChain::instance(1);
    // lhs is exactly 1
    let x = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
    assert_eq!(heuristic_cut(&instance, K, &x), None);
}

#[test]
fn seed_meets_requirement() {
    let instance = TwoNodeChain::instance(0);
    let x = vec![vec![0.0, 1.0], vec![0.0, 1.0]];
    assert_eq!(heuristic_cut(&instance, K, &x), None);
}

#[test]
fn seed_picks_best_ratio() {
    let instance = TwoNodeChain::instance(0);
    let x = vec![vec![0.3, 0.6], vec![0.0, 0.0]];
    let cover = GreedyCover::seed(&instance, &x);
    assert_eq!(cover.section_nodes[0], vec![NodeId::new(1)]);
    // tie on a ratio of 0: the first node wins
    assert_eq!(cover.section_nodes[1], vec![NodeId::new(0)]);
    assert!(!cover.free[0][1]);
    assert!(cover.free[0][0]);
}

#[test]
fn absorb_pairs_without_gain() {
    let instance = SmallMesh::instance(1);
    // fw on the perfect node r3, ids and nat on r0
    let x = vec![vec![0.0, 0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0, 0.0]];
    let cut = heuristic_cut(&instance, K, &x).unwrap();
    assert_eq!(cut.vars, vec![var(2, 1), var(2, 2), var(2, 3)]);
}

#[test]
fn never_cuts_off_feasible_assignment() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut num_cuts = 0;
    for num_nodes in 1..=3 {
        for num_sections in 1..=2 {
            for required in REQUIREMENTS.iter() {
                let assignments = integer_assignments(num_nodes, num_sections);
                for _ in 0..20 {
                    let instance = random_instance(&mut rng, num_nodes, num_sections, *required);
                    let feasible = assignments
                        .iter()
                        .filter(|x| true_availability(&instance, x) >= *required)
                        .collect::<Vec<_>>();
                    for _ in 0..10 {
                        let point = random_point(&mut rng, num_nodes, num_sections);
                        let cut = match heuristic_cut(&instance, K, &point) {
                            Some(cut) => cut,
                            None => continue,
                        };
                        num_cuts += 1;
                        for x in feasible.iter() {
                            let lhs: f64 = cut.vars.iter().map(|v| x[v.section][v.node.index()]).sum();
                            assert!(
                                lhs >= 1.0,
                                "cut {} removes feasible assignment {:?} (point {:?})",
                                cut,
                                x,
                                point
                            );
                        }
                    }
                }
            }
        }
    }
    assert!(num_cuts > 0);
}

#[test]
fn returned_cut_is_violated() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let required = *REQUIREMENTS.choose(&mut rng).unwrap();
        let instance = random_instance(&mut rng, 3, 2, required);
        let point = random_point(&mut rng, 3, 2);
        if let Some(cut) = heuristic_cut(&instance, K, &point) {
            let lhs: f64 = cut.vars.iter().map(|v| point[v.section][v.node.index()]).sum();
            assert!(lhs < 1.0);
        }
    }
}
