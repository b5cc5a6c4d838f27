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

//! # Heuristic separation of fractional points
//!
//! Greedily builds a set $S$ of (section, node) pairs whose chain availability is still below the
//! requirement of the demand. Every integer solution meeting the requirement must then use at
//! least one pair outside of $S$, which gives the valid inequality
//!
//! $$\sum_{(i, v) \notin S} x_{k,i,v} \geq 1.$$
//!
//! The set is chosen such that this inequality is violated by the current fractional point if
//! possible: pairs with large fractional value are pulled into $S$ first.

use crate::availability::{chain_availability, extend_section, section_availability};
use crate::callback::Cut;
use crate::instance::{DemandId, Instance, NodeId};
use crate::placement::{is_placed, ChainPlacement, PlacementVar};

use log::*;

/// Name of the cuts produced by the heuristic
pub const CUT_NAME: &str = "availabilityCut";

/// State of the greedy procedure for one demand.
#[derive(Debug, Clone)]
pub(crate) struct GreedyCover {
    /// `free[i][v]` is true if the pair is not (yet) in $S$, i.e., it has coefficient 1.
    pub free: Vec<Vec<bool>>,
    /// Nodes in $S$ for every section
    pub section_nodes: Vec<Vec<NodeId>>,
    /// Availability of every section, only considering the nodes in $S$
    pub section_availability: Vec<f64>,
}

impl GreedyCover {
    /// Initialize $S$ with every pair whose value is at least `1 - EPS`. A section without such a
    /// pair is seeded with the node maximizing `x / availability`.
    pub fn seed(instance: &Instance, x: &ChainPlacement) -> Self {
        let n = instance.num_nodes();
        let mut free = vec![vec![true; n]; x.len()];
        let mut section_nodes: Vec<Vec<NodeId>> = vec![Vec::new(); x.len()];

        for (i, values) in x.iter().enumerate() {
            for v in instance.node_ids() {
                if is_placed(values[v.index()]) {
                    section_nodes[i].push(v);
                    free[i][v.index()] = false;
                }
            }
            if section_nodes[i].is_empty() {
                let mut selected: Option<NodeId> = None;
                let mut best_value = -1.0;
                for v in instance.node_ids() {
                    let value = values[v.index()] / instance.node(v).availability();
                    if value > best_value {
                        best_value = value;
                        selected = Some(v);
                    }
                }
                if let Some(v) = selected {
                    section_nodes[i].push(v);
                    free[i][v.index()] = false;
                }
            }
        }

        let availabilities = section_nodes
            .iter()
            .map(|nodes| {
                section_availability(nodes.iter().map(|v| instance.node(*v).availability()))
            })
            .collect();

        Self { free, section_nodes, section_availability: availabilities }
    }

    /// Chain availability of $S$
    pub fn chain_availability(&self) -> f64 {
        chain_availability(&self.section_availability)
    }

    /// Find the free pair maximizing `x / delta` among those that keep the chain availability
    /// below `required`, where `delta` is the gain in chain availability. Pairs without any gain
    /// are preferred over all others. Returns the pair and the new section availability.
    pub fn best_extension(
        &self,
        instance: &Instance,
        x: &ChainPlacement,
        chain: f64,
        required: f64,
    ) -> Option<(usize, NodeId, f64)> {
        let mut best: Option<(usize, NodeId, f64)> = None;
        let mut best_ratio = -1.0;
        for (i, section) in self.section_availability.iter().enumerate() {
            for v in instance.node_ids().filter(|v| self.free[i][v.index()]) {
                let new_section = extend_section(*section, instance.node(v).availability());
                let new_chain = if *section > 0.0 { chain / section * new_section } else { 0.0 };
                if new_chain >= required {
                    continue;
                }
                let delta = new_chain - chain;
                let ratio = if delta > 0.0 { x[i][v.index()] / delta } else { f64::INFINITY };
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best = Some((i, v, new_section));
                }
            }
        }
        best
    }

    /// Move the pair into $S$
    pub fn add(&mut self, i: usize, v: NodeId, new_section: f64) {
        self.free[i][v.index()] = false;
        self.section_nodes[i].push(v);
        self.section_availability[i] = new_section;
    }

    /// Left hand side of the cut, evaluated on the point
    pub fn lhs(&self, x: &ChainPlacement) -> f64 {
        self.free
            .iter()
            .zip(x.iter())
            .flat_map(|(free, values)| free.iter().zip(values.iter()))
            .filter(|(free, _)| **free)
            .map(|(_, x)| x)
            .sum()
    }

    /// All free pairs, as variables of demand `k`
    pub fn free_vars(&self, k: DemandId) -> Vec<PlacementVar> {
        self.free
            .iter()
            .enumerate()
            .flat_map(|(i, free)| {
                free.iter()
                    .enumerate()
                    .filter(|(_, f)| **f)
                    .map(move |(v, _)| PlacementVar::new(k, i, NodeId::new(v)))
            })
            .collect()
    }
}

/// Run the greedy heuristic on the fractional point `x` of demand `k`. Returns the availability
/// cut if it is violated by `x`, and `None` otherwise.
pub fn heuristic_cut(instance: &Instance, k: DemandId, x: &ChainPlacement) -> Option<Cut> {
    let required = instance.demand(k).required_availability();
    let mut cover = GreedyCover::seed(instance, x);
    let mut chain = cover.chain_availability();

    if chain >= required {
        return None;
    }

    while let Some((i, v, new_section)) = cover.best_extension(instance, x, chain, required) {
        trace!("demand {}: add section {} on node {}", k.0, i, v.index());
        cover.add(i, v, new_section);
        chain = cover.chain_availability();
    }

    let lhs = cover.lhs(x);
    if lhs < 1.0 {
        let vars = cover.free_vars(k);
        if vars.is_empty() {
            warn!("Demand {} cannot reach its required availability {}", k.0, required);
        }
        Some(Cut::cover(vars).named(CUT_NAME))
    } else {
        None
    }
}
