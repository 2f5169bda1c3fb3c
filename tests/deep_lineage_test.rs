//! Long single-line lineages: every query walks without recursion.
//! No tracing subscriber is installed here, spans stay disabled.

use std::rc::Rc;

use vampire_lineage::{Lineage, Vampire, VampireRef};

const GENERATIONS: usize = 100_000;

fn chain(generations: usize) -> (VampireRef, VampireRef) {
    let original = Vampire::new("original", 1000);
    let mut last = Rc::clone(&original);
    for i in 1..=generations {
        let child = Vampire::new(format!("g{i}"), 1000 + (i % 1000) as i32);
        last.add_offspring(&child);
        last = child;
    }
    (original, last)
}

#[test]
fn given_deep_chain_when_measuring_depth_then_counts_every_generation() {
    let (original, youngest) = chain(GENERATIONS);
    assert_eq!(youngest.number_of_vampires_from_original(), GENERATIONS);
    assert_eq!(original.total_descendents(), GENERATIONS);
    assert!(Rc::ptr_eq(&youngest.original(), &original));
}

#[test]
fn given_deep_chain_when_searching_youngest_then_finds_it() {
    let (original, youngest) = chain(GENERATIONS);
    let found = original
        .vampire_with_name(&format!("g{GENERATIONS}"))
        .unwrap();
    assert!(Rc::ptr_eq(&found, &youngest));
}

#[test]
fn given_deep_chain_when_finding_closest_common_ancestor_then_returns_senior() {
    let (original, youngest) = chain(GENERATIONS);
    let ancestor = youngest.closest_common_ancestor(&original).unwrap();
    assert!(Rc::ptr_eq(&ancestor, &original));
}

#[test]
fn given_deep_chain_when_dropped_then_does_not_overflow() {
    let (original, youngest) = chain(GENERATIONS);
    drop(youngest);
    drop(original);
}
