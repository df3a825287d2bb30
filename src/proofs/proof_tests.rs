//! Tests for proof extraction and renumbering

use super::*;
use crate::core::{Literal, Term};

fn fact(id: ClauseId, name: &str) -> Clause {
    let mut clause = Clause::new(vec![Literal::positive(name, vec![Term::constant("A")])]);
    clause.id = id;
    clause
}

fn derived(id: ClauseId, parents: (ClauseId, ClauseId), name: &str) -> Clause {
    let mut clause = fact(id, name);
    clause.parents = Some(parents);
    clause
}

fn contradiction(id: ClauseId, parents: (ClauseId, ClauseId)) -> Clause {
    let mut clause = Clause::new(vec![Literal::Boolean(false)]);
    clause.id = id;
    clause.parents = Some(parents);
    clause
}

#[test]
fn test_minimal_ancestor_set() {
    // 1, 2 base; 3 negated goal; 4 from (1, 3); 5 from (2, 4)
    let arena = vec![
        fact(1, "p"),
        fact(2, "q"),
        fact(3, "g"),
        derived(4, (1, 3), "r"),
        contradiction(5, (2, 4)),
    ];

    let proof = extract(&arena, 3);
    let ids: Vec<_> = proof.clauses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 4, 5]);
    assert_eq!(proof.clauses[1].parents, Some((1, 3)));
    assert_eq!(proof.clauses[2].parents, Some((2, 4)));
}

#[test]
fn test_renumbering_closes_gaps() {
    // ancestors of the contradiction are 3 (negated goal), 5, 7, 9; the
    // admitted clauses 4, 6 and 8 played no part
    let arena = vec![
        fact(1, "p"),
        fact(2, "q"),
        fact(3, "g"),
        derived(4, (1, 2), "noise"),
        derived(5, (1, 3), "r"),
        derived(6, (1, 2), "noisetwo"),
        derived(7, (5, 3), "s"),
        derived(8, (1, 2), "noisethree"),
        contradiction(9, (2, 7)),
    ];

    let proof = extract(&arena, 3);
    let ids: Vec<_> = proof.clauses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6]);

    // parent references follow the renumbering; base references stay
    assert_eq!(proof.clauses[1].parents, Some((1, 3)));
    assert_eq!(proof.clauses[2].parents, Some((4, 3)));
    assert_eq!(proof.clauses[3].parents, Some((2, 5)));
}

#[test]
fn test_shared_ancestor_collected_once() {
    // both parents of the contradiction descend from clause 4
    let arena = vec![
        fact(1, "p"),
        fact(2, "q"),
        fact(3, "g"),
        derived(4, (1, 3), "r"),
        derived(5, (2, 4), "s"),
        derived(6, (1, 4), "t"),
        contradiction(7, (5, 6)),
    ];

    let proof = extract(&arena, 3);
    let ids: Vec<_> = proof.clauses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_contradiction_without_goal_ancestry() {
    // the knowledge base is itself contradictory; the walk stops at base
    // clauses and lists the empty clause alone
    let arena = vec![
        fact(1, "p"),
        fact(2, "q"),
        fact(3, "g"),
        contradiction(4, (1, 2)),
    ];

    let proof = extract(&arena, 3);
    let ids: Vec<_> = proof.clauses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![4]);
    assert_eq!(proof.clauses[0].parents, Some((1, 2)));
}

#[test]
fn test_listing_output() {
    let arena = vec![
        fact(1, "p"),
        fact(2, "q"),
        fact(3, "g"),
        contradiction(4, (2, 3)),
    ];

    let proof = extract(&arena, 3);
    let listing = proof.to_string();
    assert_eq!(listing, "    2 + 3 = 4. FALSE.\n");
}
