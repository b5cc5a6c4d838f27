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
use crate::callback::*;
use crate::example_instances::*;
use crate::instance::{DemandId, NodeId};
use crate::placement::{Placement, PlacementVar};
use crate::separation::SeparationEngine;
use crate::Error;

fn uniform(value: f64) -> Placement {
    Placement::from_values(vec![vec![vec![value; 2]; 2]])
}

#[test]
fn relaxation_adds_user_cut() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    let mut context = ReplayContext::relaxation(uniform(0.5));
    engine.invoke(&mut context).unwrap();
    assert_eq!(context.user_cuts().len(), 1);
    let (cut, management) = &context.user_cuts()[0];
    assert_eq!(*management, CutManagement::Filter);
    assert_eq!(cut.vars, vec![PlacementVar::new(DemandId(0), 1, NodeId::new(1))]);
    assert!(!context.is_rejected());
    assert_eq!(engine.cut_count(), 1);
    assert_eq!(engine.lazy_constraint_count(), 0);
}

#[test]
fn candidate_is_rejected() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    let mut context =
        ReplayContext::candidate(Placement::from_values(vec![vec![vec![1.0, 0.0]; 2]]));
    engine.invoke(&mut context).unwrap();
    assert!(context.is_rejected());
    assert_eq!(context.rejections().len(), 1);
    assert!(context.user_cuts().is_empty());
    assert_eq!(engine.lazy_constraint_count(), 1);
    assert_eq!(engine.cut_count(), 0);
    assert!(engine.total_separation_time() >= 0.0);
}

#[test]
fn candidate_is_accepted() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    let mut context =
        ReplayContext::candidate(Placement::from_values(vec![vec![vec![0.0, 1.0]; 2]]));
    engine.invoke(&mut context).unwrap();
    assert!(!context.is_rejected());
    assert_eq!(engine.stats().lazy_constraints, 0);
}

#[test]
fn reject_only_violated_demands() {
    let engine = SeparationEngine::new(SmallMesh::instance(0));
    let r0 = vec![1.0, 0.0, 0.0, 0.0];
    let r2 = vec![0.0, 0.0, 1.0, 0.0];
    let r3 = vec![0.0, 0.0, 0.0, 1.0];
    let point = Placement::from_values(vec![
        vec![r3.clone(), r3.clone(), r3],
        vec![r0],
        vec![r2.clone(), r2],
    ]);
    let mut context = ReplayContext::candidate(point);
    engine.invoke(&mut context).unwrap();
    assert_eq!(context.rejections().len(), 1);
    let cut = &context.rejections()[0];
    assert!(!cut.vars.is_empty());
    assert!(cut.vars.iter().all(|v| v.demand == DemandId(1)));
    assert_eq!(engine.lazy_constraint_count(), 1);
}

#[test]
fn counters_accumulate() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    for _ in 0..3 {
        engine.invoke(&mut ReplayContext::relaxation(uniform(0.5))).unwrap();
        engine.invoke(&mut ReplayContext::relaxation(uniform(1.0))).unwrap();
        engine
            .invoke(&mut ReplayContext::candidate(Placement::from_values(vec![vec![
                vec![1.0, 0.0];
                2
            ]])))
            .unwrap();
    }
    let stats = engine.stats();
    assert_eq!(stats.user_cuts, 3);
    assert_eq!(stats.lazy_constraints, 3);
    assert!(stats.separation_time >= 0.0);
}

#[test]
fn unexpected_context() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    for id in [ContextId::ThreadUp, ContextId::ThreadDown, ContextId::GlobalProgress].iter() {
        let mut context = ReplayContext::new(*id, None);
        match engine.invoke(&mut context) {
            Err(Error::UnexpectedContext(x)) => assert_eq!(x, *id),
            r => panic!("unexpected result: {:?}", r),
        }
    }
    assert_eq!(engine.stats().user_cuts, 0);
}

#[test]
fn unbounded_candidate() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    let mut context = ReplayContext::unbounded_candidate();
    assert!(!context.is_candidate_point());
    match engine.invoke(&mut context) {
        Err(Error::UnboundedCandidate) => {}
        r => panic!("unexpected result: {:?}", r),
    }
    assert_eq!(engine.lazy_constraint_count(), 0);
}

#[test]
fn solution_outside_of_context() {
    let engine = SeparationEngine::new(TwoNodeChain::instance(0));
    let candidate = ReplayContext::candidate(uniform(1.0));
    assert!(matches!(engine.fractional_solution(&candidate), Err(Error::Protocol(_))));
    assert!(engine.integer_solution(&candidate).is_ok());

    let relaxation = ReplayContext::relaxation(uniform(0.5));
    assert!(matches!(engine.integer_solution(&relaxation), Err(Error::Protocol(_))));
    assert_eq!(engine.fractional_solution(&relaxation).unwrap(), uniform(0.5));

    let mut relaxation = relaxation;
    assert!(matches!(engine.add_lazy_constraints(&mut relaxation), Err(Error::Protocol(_))));
}

#[test]
fn replay_context_protocol() {
    let var = PlacementVar::new(DemandId(0), 0, NodeId::new(0));
    let mut candidate = ReplayContext::candidate(uniform(1.0));
    assert!(matches!(candidate.relaxation_value(var), Err(Error::Protocol(_))));
    assert_eq!(candidate.candidate_value(var).unwrap(), 1.0);
    let cut = Cut::cover(vec![var]);
    assert!(matches!(
        candidate.add_user_cut(cut.clone(), CutManagement::Force),
        Err(Error::Protocol(_))
    ));

    let mut relaxation = ReplayContext::relaxation(uniform(0.5));
    assert!(matches!(relaxation.candidate_value(var), Err(Error::Protocol(_))));
    assert!(matches!(relaxation.reject_candidate(cut), Err(Error::Protocol(_))));
}

#[test]
fn point_with_wrong_shape() {
    let engine = SeparationEngine::new(SmallMesh::instance(0));
    let mut context = ReplayContext::candidate(uniform(1.0));
    match engine.invoke(&mut context) {
        Err(Error::UnknownVariable(var)) => assert_eq!(var.node, NodeId::new(2)),
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn cut_evaluation() {
    let a = PlacementVar::new(DemandId(0), 0, NodeId::new(0));
    let b = PlacementVar::new(DemandId(0), 1, NodeId::new(1));
    let cut = Cut::cover(vec![a, b]).named("availabilityCut");
    assert_eq!(cut.lhs(&uniform(0.5)), 1.0);
    assert!(cut.is_satisfied(&uniform(0.5)));
    assert!(!cut.is_satisfied(&uniform(0.2)));
    assert_eq!(cut.to_string(), "availabilityCut: x(0,0,0) + x(1,1,0) >= 1");
    assert_eq!(Cut::cover(vec![]).to_string(), "0 >= 1");
}
