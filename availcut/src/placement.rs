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

//! # Placement
//!
//! Snapshot of the placement variables $x_{k,i,v}$ queried from the solver. Each invocation of the
//! separation engine builds and owns its own snapshot.

use crate::instance::{DemandId, Instance, NodeId};
use crate::EPS;

use std::fmt;

/// Placement variable $x_{k,i,v}$: section `section` of demand `demand` is instantiated on node
/// `node`.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct PlacementVar {
    /// The demand (chain)
    pub demand: DemandId,
    /// Index of the section inside the chain
    pub section: usize,
    /// The hosting node
    pub node: NodeId,
}

impl PlacementVar {
    /// Create a new placement variable
    pub fn new(demand: DemandId, section: usize, node: NodeId) -> Self {
        Self { demand, section, node }
    }
}

impl fmt::Display for PlacementVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x({},{},{})", self.node.index(), self.section, self.demand.0)
    }
}

/// Values of one demand, indexed by `[section][node]`.
pub type ChainPlacement = Vec<Vec<f64>>;

/// Values of all placement variables, indexed by `[demand][section][node]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    values: Vec<ChainPlacement>,
}

impl Placement {
    /// Create a placement where every variable is 0, shaped like the instance.
    pub fn zeros(instance: &Instance) -> Self {
        let n = instance.num_nodes();
        Self {
            values: instance
                .demands()
                .iter()
                .map(|d| vec![vec![0.0; n]; d.num_sections()])
                .collect(),
        }
    }

    /// Create a placement from raw values, indexed by `[demand][section][node]`.
    pub fn from_values(values: Vec<ChainPlacement>) -> Self {
        Self { values }
    }

    /// Fill a placement shaped like the instance by querying every variable. The first error
    /// returned by `value` is propagated.
    pub fn try_from_fn<E, F>(instance: &Instance, mut value: F) -> Result<Self, E>
    where
        F: FnMut(PlacementVar) -> Result<f64, E>,
    {
        let mut placement = Self::zeros(instance);
        for (k, chain) in placement.values.iter_mut().enumerate() {
            for (i, section) in chain.iter_mut().enumerate() {
                for (v, x) in instance.node_ids().zip(section.iter_mut()) {
                    *x = value(PlacementVar::new(DemandId(k), i, v))?;
                }
            }
        }
        Ok(placement)
    }

    /// Returns the value of a variable, or `None` if it is out of shape.
    pub fn get(&self, var: PlacementVar) -> Option<f64> {
        self.values
            .get(var.demand.0)
            .and_then(|chain| chain.get(var.section))
            .and_then(|section| section.get(var.node.index()))
            .copied()
    }

    /// Set the value of a variable. **Panics** if the variable is out of shape.
    pub fn set(&mut self, var: PlacementVar, value: f64) {
        self.values[var.demand.0][var.section][var.node.index()] = value;
    }

    /// Values of a single demand, indexed by `[section][node]`.
    pub fn chain(&self, k: DemandId) -> &ChainPlacement {
        &self.values[k.0]
    }

    /// Number of demands in the snapshot
    pub fn num_demands(&self) -> usize {
        self.values.len()
    }

    /// Nodes whose value is at least `1 - EPS` for section `i` of demand `k`.
    pub fn placed_nodes(&self, k: DemandId, i: usize) -> Vec<NodeId> {
        self.values[k.0][i]
            .iter()
            .enumerate()
            .filter(|(_, x)| is_placed(**x))
            .map(|(v, _)| NodeId::new(v))
            .collect()
    }

    /// Checks if all placement variables of demand `k` are integer (up to `EPS`).
    pub fn is_integer_assignment(&self, k: DemandId) -> bool {
        self.values[k.0].iter().flatten().all(|x| *x < EPS || *x > 1.0 - EPS)
    }
}

/// A value counts as placed if it is at least `1 - EPS`.
pub fn is_placed(x: f64) -> bool {
    x >= 1.0 - EPS
}

#[cfg(test)]
mod test {
    use super::*;

    fn placement() -> Placement {
        Placement::from_values(vec![vec![vec![1.0, 0.0], vec![0.99995, 0.3]]])
    }

    #[test]
    fn placed_within_tolerance() {
        let p = placement();
        assert_eq!(p.placed_nodes(DemandId(0), 0), vec![NodeId::new(0)]);
        assert_eq!(p.placed_nodes(DemandId(0), 1), vec![NodeId::new(0)]);
    }

    #[test]
    fn integer_assignment() {
        let mut p = placement();
        assert!(!p.is_integer_assignment(DemandId(0)));
        p.set(PlacementVar::new(DemandId(0), 1, NodeId::new(1)), 0.00001);
        assert!(p.is_integer_assignment(DemandId(0)));
    }

    #[test]
    fn get_out_of_shape() {
        let p = placement();
        assert_eq!(p.get(PlacementVar::new(DemandId(0), 1, NodeId::new(1))), Some(0.3));
        assert_eq!(p.get(PlacementVar::new(DemandId(0), 2, NodeId::new(0))), None);
        assert_eq!(p.get(PlacementVar::new(DemandId(1), 0, NodeId::new(0))), None);
    }
}
