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

//! Reads an instance from whitespace separated tables.
//!
//! Every table starts with a header line, which is skipped. Empty lines and lines starting with
//! `#` are ignored. The following tables are required:
//!
//! - **nodes**: `name x y capacity availability`
//! - **links**: `name source target delay bandwidth`
//! - **vnfs**: `name consumption cost_0 ... cost_{n-1}` (one cost for every node, in node order)
//! - **demands**: `name source target latency bandwidth availability vnf_1,vnf_2,...`

use super::{Demand, Instance, InstanceError, Link, Node, Vnf, VnfId};

use log::*;
use std::fs::read_to_string;

/// A parsed table row: the line number (starting at 1) and its columns.
pub type Row = (usize, Vec<String>);

/// Split the content of a table into rows, skipping the header and all comments.
pub fn parse_table(content: &str) -> Vec<Row> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(i, line)| (i, line.split_whitespace().map(String::from).collect()))
        .collect()
}

fn columns<'a>(
    file: &str,
    row: &'a Row,
    expected: usize,
) -> Result<&'a [String], InstanceError> {
    if row.1.len() < expected {
        Err(InstanceError::MissingColumns {
            file: file.to_string(),
            line: row.0,
            found: row.1.len(),
            expected,
        })
    } else {
        Ok(&row.1)
    }
}

impl Instance {
    /// Read an instance from the four table files.
    pub fn from_files(
        node_file: impl AsRef<str>,
        link_file: impl AsRef<str>,
        vnf_file: impl AsRef<str>,
        demand_file: impl AsRef<str>,
    ) -> Result<Self, InstanceError> {
        info!("Reading {}", node_file.as_ref());
        let nodes = read_to_string(node_file.as_ref())?;
        info!("Reading {}", link_file.as_ref());
        let links = read_to_string(link_file.as_ref())?;
        info!("Reading {}", vnf_file.as_ref());
        let vnfs = read_to_string(vnf_file.as_ref())?;
        info!("Reading {}", demand_file.as_ref());
        let demands = read_to_string(demand_file.as_ref())?;
        Self::from_tables(&nodes, &links, &vnfs, &demands)
    }

    /// Build an instance from the content of the four tables.
    pub fn from_tables(
        nodes: &str,
        links: &str,
        vnfs: &str,
        demands: &str,
    ) -> Result<Self, InstanceError> {
        let mut instance = Self::new();

        for row in parse_table(nodes).iter() {
            let c = columns("nodes", row, 5)?;
            let node = Node::new(c[0].as_str(), c[4].parse()?)
                .at(c[1].parse()?, c[2].parse()?)
                .with_capacity(c[3].parse()?);
            instance.add_node(node)?;
        }

        for row in parse_table(links).iter() {
            let c = columns("links", row, 5)?;
            let source = instance.node_id_by_name(&c[1])?;
            let target = instance.node_id_by_name(&c[2])?;
            let link =
                Link { name: c[0].clone(), delay: c[3].parse()?, bandwidth: c[4].parse()? };
            instance.add_link(source, target, link)?;
        }

        for row in parse_table(vnfs).iter() {
            let c = columns("vnfs", row, 2)?;
            let cost = c[2..].iter().map(|x| x.parse()).collect::<Result<Vec<f64>, _>>()?;
            instance.add_vnf(Vnf::new(c[0].as_str(), c[1].parse()?, cost))?;
        }

        for row in parse_table(demands).iter() {
            let c = columns("demands", row, 7)?;
            let source = instance.node_id_by_name(&c[1])?;
            let target = instance.node_id_by_name(&c[2])?;
            let sections = c[6]
                .split(',')
                .filter(|name| !name.is_empty())
                .map(|name| instance.vnf_id_by_name(name))
                .collect::<Result<Vec<VnfId>, _>>()?;
            let demand = Demand::new(c[0].as_str(), source, target, c[5].parse()?, sections)
                .with_traffic(c[3].parse()?, c[4].parse()?);
            instance.add_demand(demand)?;
        }

        Ok(instance)
    }
}
