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

//! # Availability Model
//!
//! Pure functions computing the availability of sections and chains. A section hosted on a set
//! of nodes $S$ survives if at least one of its nodes is up, and a chain only survives if all of
//! its sections survive. Nodes fail independently:
//!
//! $$A_{sec}(S) = 1 - \prod_{v \in S} (1 - a_v) \qquad A_{chain} = \prod_i A_{sec}(S_i)$$

/// Probability that every node in the iterator fails at the same time. An empty set of nodes
/// fails with probability 1.
pub fn failure_probability<I>(availabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    availabilities.into_iter().fold(1.0, |prob, a| prob * (1.0 - a))
}

/// Availability of a section hosted on nodes with the given availabilities. A section without any
/// node has availability 0.
pub fn section_availability<I>(availabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    1.0 - failure_probability(availabilities)
}

/// Availability of a section after adding one more hosting node with availability `node`.
pub fn extend_section(section: f64, node: f64) -> f64 {
    1.0 - (1.0 - section) * (1.0 - node)
}

/// Chain availability as the product of all section availabilities. A chain without sections has
/// availability 1.
pub fn chain_availability(section_availabilities: &[f64]) -> f64 {
    section_availabilities.iter().product()
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn empty_inputs() {
        assert_approx_eq!(chain_availability(&[]), 1.0);
        assert_approx_eq!(failure_probability(Vec::new()), 1.0);
        assert_approx_eq!(section_availability(Vec::new()), 0.0);
    }

    #[test]
    fn perfect_node_never_fails() {
        assert_approx_eq!(failure_probability(vec![1.0, 0.3]), 0.0);
        assert_approx_eq!(section_availability(vec![0.2, 1.0]), 1.0);
    }

    #[test]
    fn extend_matches_recompute() {
        let a = section_availability(vec![0.9, 0.8]);
        assert_approx_eq!(extend_section(a, 0.7), section_availability(vec![0.9, 0.8, 0.7]));
        assert_approx_eq!(extend_section(0.0, 0.7), 0.7);
    }
}
