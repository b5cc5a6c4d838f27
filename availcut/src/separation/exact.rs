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

//! # Exact separation of integer points
//!
//! On an integer candidate, the availability of every chain can be computed directly. If a chain
//! violates its requirement, we search for the smallest set of sections that already violates it
//! on its own (by taking the sections with the lowest availability first), and require that at
//! least one new node is placed for one of these sections.

use crate::availability::{extend_section, section_availability};
use crate::callback::Cut;
use crate::instance::{DemandId, Instance};
use crate::placement::{is_placed, ChainPlacement, PlacementVar};

use log::*;
use std::cmp::Ordering;

/// Availability of a single section of a chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionAvailability {
    /// Index of the section in the chain
    pub section: usize,
    /// Availability of the section with the current placement
    pub availability: f64,
}

/// Availability of every section of an integer point, in chain order.
pub fn section_availabilities(
    instance: &Instance,
    x: &ChainPlacement,
) -> Vec<SectionAvailability> {
    x.iter()
        .enumerate()
        .map(|(section, values)| SectionAvailability {
            section,
            availability: section_availability(
                instance
                    .node_ids()
                    .filter(|v| is_placed(values[v.index()]))
                    .map(|v| instance.node(v).availability()),
            ),
        })
        .collect()
}

/// Sort sections by increasing availability. The sort is stable, so ties keep the chain order.
pub fn sort_by_availability(sections: &mut [SectionAvailability]) {
    sections.sort_by(|a, b| a.availability.partial_cmp(&b.availability).unwrap_or(Ordering::Equal));
}

/// Given the sections sorted by increasing availability, return the length of the shortest
/// prefix whose availability is below `required`, or `None` if the whole chain satisfies it.
pub fn violating_prefix(sorted: &[SectionAvailability], required: f64) -> Option<usize> {
    let mut chain = 1.0;
    let mut num_selected = 0;
    while chain >= required && num_selected < sorted.len() {
        chain *= sorted[num_selected].availability;
        num_selected += 1;
    }
    if chain < required {
        Some(num_selected)
    } else {
        None
    }
}

/// Add placements to the first `num_selected` sections of `sections`, as long as the selected
/// sections keep violating the requirement. This is a single greedy pass: every check uses the
/// availabilities lifted so far. `x` and `sections` are updated in place. Returns the number of
/// lifted placements.
pub fn lift(
    instance: &Instance,
    x: &mut ChainPlacement,
    required: f64,
    sections: &mut [SectionAvailability],
    num_selected: usize,
) -> usize {
    let mut num_lifted = 0;
    for s in 0..num_selected {
        let i = sections[s].section;
        for v in instance.node_ids() {
            if is_placed(x[i][v.index()]) {
                continue;
            }
            let lifted_section =
                extend_section(sections[s].availability, instance.node(v).availability());
            let future: f64 = sections[..num_selected]
                .iter()
                .enumerate()
                .map(|(j, sec)| if j == s { lifted_section } else { sec.availability })
                .product();
            if future < required {
                trace!("lift section {} on node {}: {} < {}", i, v.index(), future, required);
                x[i][v.index()] = 1.0;
                sections[s].availability = lifted_section;
                num_lifted += 1;
            }
        }
    }
    num_lifted
}

/// Build the lazy constraint: at least one of the missing placements of the selected sections
/// must be used.
pub fn build_cut(
    instance: &Instance,
    k: DemandId,
    x: &ChainPlacement,
    selected: &[SectionAvailability],
) -> Cut {
    let vars = selected
        .iter()
        .flat_map(move |sec| {
            instance
                .node_ids()
                .filter(move |v| !is_placed(x[sec.section][v.index()]))
                .map(move |v| PlacementVar::new(k, sec.section, v))
        })
        .collect();
    Cut::cover(vars)
}

/// Separate the integer point `x` of demand `k`. Returns the lazy constraint cutting off `x`, or
/// `None` if the chain meets its required availability. If `lifting` is set, the constraint is
/// strengthened with [`lift`] before it is built.
pub fn lazy_cut(
    instance: &Instance,
    k: DemandId,
    x: &ChainPlacement,
    lifting: bool,
) -> Option<Cut> {
    let required = instance.demand(k).required_availability();
    let mut sections = section_availabilities(instance, x);
    sort_by_availability(&mut sections);

    let num_selected = violating_prefix(&sections, required)?;
    debug!(
        "Reject candidate, demand {} with {} sections selected out of {}",
        k.0,
        num_selected,
        sections.len()
    );

    if lifting {
        let mut x = x.clone();
        let num_lifted = lift(instance, &mut x, required, &mut sections, num_selected);
        trace!("lifted {} placements of demand {}", num_lifted, k.0);
        Some(build_cut(instance, k, &x, &sections[..num_selected]))
    } else {
        Some(build_cut(instance, k, x, &sections[..num_selected]))
    }
}
