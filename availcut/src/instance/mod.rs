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

//! # Instance
//!
//! The data describing one instance of the chain placement problem: the physical nodes and links,
//! the VNF catalogue, and the demands (service function chains). An instance is built once, and
//! then only read by the separation engine.

mod error;
mod loading;
mod types;

pub use error::InstanceError;
pub use loading::parse_table;
pub use types::{Demand, DemandId, Link, LinkId, Node, NodeId, Topology, Vnf, VnfId};

use crate::availability;

use log::*;
use std::collections::HashMap;

/// # Instance
/// Owns all nodes, links, VNFs and demands. Nodes are enumerated in ascending [`NodeId`] order,
/// which is the order in which they were added.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    nodes: Vec<Node>,
    vnfs: Vec<Vnf>,
    demands: Vec<Demand>,
    topology: Topology,
    node_names: HashMap<String, NodeId>,
    vnf_names: HashMap<String, VnfId>,
}

impl Instance {
    /// Create an empty instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the instance and return its id. All nodes must be added before the first
    /// VNF, since every VNF carries one placement cost per node.
    pub fn add_node(&mut self, mut node: Node) -> Result<NodeId, InstanceError> {
        if !self.vnfs.is_empty() {
            return Err(InstanceError::NodeAfterVnf(node.name));
        }
        check_availability(&node.name, node.availability)?;
        if self.node_names.contains_key(&node.name) {
            return Err(InstanceError::DuplicateNode(node.name));
        }
        let id = self.topology.add_node(());
        node.id = id;
        self.node_names.insert(node.name.clone(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Add a directed link from `source` to `target`.
    pub fn add_link(
        &mut self,
        source: NodeId,
        target: NodeId,
        link: Link,
    ) -> Result<LinkId, InstanceError> {
        self.check_node(source)?;
        self.check_node(target)?;
        Ok(self.topology.add_edge(source, target, link))
    }

    /// Add a VNF to the catalogue and return its id.
    pub fn add_vnf(&mut self, mut vnf: Vnf) -> Result<VnfId, InstanceError> {
        if self.vnf_names.contains_key(&vnf.name) {
            return Err(InstanceError::DuplicateVnf(vnf.name));
        }
        if vnf.placement_cost.len() != self.nodes.len() {
            return Err(InstanceError::PlacementCostMismatch {
                name: vnf.name,
                found: vnf.placement_cost.len(),
                expected: self.nodes.len(),
            });
        }
        let id = VnfId(self.vnfs.len());
        vnf.id = id;
        self.vnf_names.insert(vnf.name.clone(), id);
        self.vnfs.push(vnf);
        Ok(id)
    }

    /// Add a demand and return its id.
    pub fn add_demand(&mut self, mut demand: Demand) -> Result<DemandId, InstanceError> {
        check_availability(&demand.name, demand.required_availability)?;
        self.check_node(demand.source)?;
        self.check_node(demand.target)?;
        if let Some(f) = demand.sections.iter().find(|f| f.0 >= self.vnfs.len()) {
            return Err(InstanceError::InvalidVnf(f.0));
        }
        let id = DemandId(self.demands.len());
        demand.id = id;
        self.demands.push(demand);
        Ok(id)
    }

    /// Returns the node with the given id. **Panics** if the node does not exist.
    pub fn node(&self, v: NodeId) -> &Node {
        &self.nodes[v.index()]
    }

    /// Returns all nodes, in enumeration order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterator over all node ids, in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    /// Returns the number of nodes
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the VNF with the given id. **Panics** if the VNF does not exist.
    pub fn vnf(&self, f: VnfId) -> &Vnf {
        &self.vnfs[f.0]
    }

    /// Returns the VNF catalogue
    pub fn vnfs(&self) -> &[Vnf] {
        &self.vnfs
    }

    /// Returns the demand with the given id. **Panics** if the demand does not exist.
    pub fn demand(&self, k: DemandId) -> &Demand {
        &self.demands[k.0]
    }

    /// Returns all demands
    pub fn demands(&self) -> &[Demand] {
        &self.demands
    }

    /// Returns the number of demands
    pub fn num_demands(&self) -> usize {
        self.demands.len()
    }

    /// Returns the physical topology
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Lookup a node by its name
    pub fn node_id_by_name(&self, name: &str) -> Result<NodeId, InstanceError> {
        self.node_names.get(name).copied().ok_or_else(|| InstanceError::NodeNotFound(name.into()))
    }

    /// Lookup a VNF by its name
    pub fn vnf_id_by_name(&self, name: &str) -> Result<VnfId, InstanceError> {
        self.vnf_names.get(name).copied().ok_or_else(|| InstanceError::VnfNotFound(name.into()))
    }

    /// Probability that all given nodes fail simultaneously.
    pub fn failure_probability(&self, nodes: &[NodeId]) -> f64 {
        availability::failure_probability(nodes.iter().map(|v| self.node(*v).availability))
    }

    /// Chain availability based on the availability of each section.
    pub fn chain_availability(&self, section_availabilities: &[f64]) -> f64 {
        availability::chain_availability(section_availabilities)
    }

    /// Write the content of the instance to the log (level `info`).
    pub fn log_summary(&self) {
        info!(
            "Instance with {} nodes, {} links, {} VNFs and {} demands",
            self.nodes.len(),
            self.topology.edge_count(),
            self.vnfs.len(),
            self.demands.len()
        );
        self.nodes.iter().for_each(|n| debug!("{}", n));
        self.vnfs.iter().for_each(|f| debug!("{}", f));
        self.demands.iter().for_each(|d| debug!("{}", d));
    }

    fn check_node(&self, v: NodeId) -> Result<(), InstanceError> {
        if v.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(InstanceError::InvalidNode(v.index()))
        }
    }
}

fn check_availability(name: &str, availability: f64) -> Result<(), InstanceError> {
    if availability > 0.0 && availability <= 1.0 {
        Ok(())
    } else {
        Err(InstanceError::InvalidAvailability(name.to_string(), availability))
    }
}
