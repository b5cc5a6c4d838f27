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

//! Module containing all type definitions of an instance

use petgraph::prelude::*;
use petgraph::stable_graph::StableGraph;
use std::fmt;

type IndexType = u32;
/// Node Identification (and index into the topology)
pub type NodeId = NodeIndex<IndexType>;
/// Link Identification (and index into the topology)
pub type LinkId = EdgeIndex<IndexType>;
/// Physical network graph
pub type Topology = StableGraph<(), Link, Directed, IndexType>;

/// VNF Identification (index into the VNF table)
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct VnfId(pub usize);

/// Demand Identification (index into the demand table)
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct DemandId(pub usize);

/// # Node
/// A physical node that may host VNFs. Its availability is the probability that it is
/// operational, and it is never changed once the node is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) capacity: f64,
    pub(crate) availability: f64,
}

impl Node {
    /// Create a new node with zero capacity, located at the origin. The id is assigned once the
    /// node is added to an [`Instance`](super::Instance).
    pub fn new(name: impl Into<String>, availability: f64) -> Self {
        Self {
            id: NodeId::end(),
            name: name.into(),
            x: 0.0,
            y: 0.0,
            capacity: 0.0,
            availability,
        }
    }

    /// Set the coordinates of the node
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the capacity of the node
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the id of the node
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the name of the node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the coordinates `(x, y)`
    pub fn coordinates(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the capacity
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Returns the probability that the node is operational
    pub fn availability(&self) -> f64 {
        self.availability
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node {} ({}): capacity {}, availability {}",
            self.id.index(),
            self.name,
            self.capacity,
            self.availability
        )
    }
}

/// Physical link between two nodes, stored as edge weight of the [`Topology`].
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Name of the link
    pub name: String,
    /// Propagation delay
    pub delay: f64,
    /// Bandwidth
    pub bandwidth: f64,
}

/// # Virtual Network Function
/// A function type that may be placed on any node at a node dependent cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Vnf {
    pub(crate) id: VnfId,
    pub(crate) name: String,
    pub(crate) consumption: f64,
    pub(crate) placement_cost: Vec<f64>,
}

impl Vnf {
    /// Create a new VNF. `placement_cost` must contain one entry per node of the instance.
    pub fn new(name: impl Into<String>, consumption: f64, placement_cost: Vec<f64>) -> Self {
        Self { id: VnfId(usize::MAX), name: name.into(), consumption, placement_cost }
    }

    /// Returns the id of the VNF
    pub fn id(&self) -> VnfId {
        self.id
    }

    /// Returns the name of the VNF
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource consumption per unit of bandwidth
    pub fn consumption(&self) -> f64 {
        self.consumption
    }

    /// Cost of placing the VNF on the given node
    pub fn placement_cost(&self, node: NodeId) -> f64 {
        self.placement_cost[node.index()]
    }
}

impl fmt::Display for Vnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VNF {} ({}): consumption {}", self.id.0, self.name, self.consumption)
    }
}

/// # Demand
/// A service function chain. Each section requires exactly one VNF, and the whole chain must reach
/// the required end-to-end availability.
#[derive(Debug, Clone, PartialEq)]
pub struct Demand {
    pub(crate) id: DemandId,
    pub(crate) name: String,
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) max_latency: f64,
    pub(crate) bandwidth: f64,
    pub(crate) required_availability: f64,
    pub(crate) sections: Vec<VnfId>,
}

impl Demand {
    /// Create a new demand without latency bound and without bandwidth.
    pub fn new(
        name: impl Into<String>,
        source: NodeId,
        target: NodeId,
        required_availability: f64,
        sections: Vec<VnfId>,
    ) -> Self {
        Self {
            id: DemandId(usize::MAX),
            name: name.into(),
            source,
            target,
            max_latency: f64::INFINITY,
            bandwidth: 0.0,
            required_availability,
            sections,
        }
    }

    /// Set the maximum latency and the bandwidth requested by the demand
    pub fn with_traffic(mut self, max_latency: f64, bandwidth: f64) -> Self {
        self.max_latency = max_latency;
        self.bandwidth = bandwidth;
        self
    }

    /// Returns the id of the demand
    pub fn id(&self) -> DemandId {
        self.id
    }

    /// Returns the name of the demand
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source node
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the target node
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the maximum end-to-end latency
    pub fn max_latency(&self) -> f64 {
        self.max_latency
    }

    /// Returns the bandwidth
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Returns the required end-to-end availability
    pub fn required_availability(&self) -> f64 {
        self.required_availability
    }

    /// Returns the VNF of every section, in chain order
    pub fn sections(&self) -> &[VnfId] {
        &self.sections
    }

    /// Returns the number of sections
    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Demand {} ({}): {} -> {}, {} sections, availability {}",
            self.id.0,
            self.name,
            self.source.index(),
            self.target.index(),
            self.sections.len(),
            self.required_availability
        )
    }
}
