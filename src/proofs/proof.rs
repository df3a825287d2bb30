//! Minimal-derivation extraction and presentation renumbering

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::core::{Clause, ClauseId};

/// The minimal derivation of a contradiction, renumbered for presentation.
///
/// Contains the negated goal and every derived ancestor of the empty
/// clause, ordered by identifier. Base clauses are referenced by id in
/// parent links but are not listed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proof {
    pub clauses: Vec<Clause>,
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.listing())?;
        }
        Ok(())
    }
}

/// Walk derivation links backward from the contradiction (the last clause
/// of the arena) and build its renumbered minimal derivation.
///
/// Only clauses of the derivation record are collected: the negated goal
/// (id = `base_count`) and everything admitted after it. The walk stops at
/// base clauses. The collected set is sorted by original id,
/// derived clauses are renumbered contiguously starting after
/// `base_count`, and every parent reference is rewritten through the same
/// map, so renumbered ids never collide with base-clause ids.
pub fn extract(arena: &[Clause], base_count: ClauseId) -> Proof {
    let contradiction = arena.len() as ClauseId;
    let mut collected: Vec<ClauseId> = Vec::new();
    collect_ancestors(arena, base_count, contradiction, &mut collected);
    collected.sort_unstable();

    let mut renumbered: HashMap<ClauseId, ClauseId> = HashMap::new();
    let mut next = base_count;
    for &id in &collected {
        if id > base_count {
            next += 1;
            renumbered.insert(id, next);
        }
    }
    let renumber = |id: ClauseId| renumbered.get(&id).copied().unwrap_or(id);

    let clauses = collected
        .iter()
        .map(|&id| {
            let mut clause = arena[(id - 1) as usize].clone();
            clause.id = renumber(id);
            if let Some((parent_a, parent_b)) = clause.parents {
                clause.parents = Some((renumber(parent_a), renumber(parent_b)));
            }
            clause
        })
        .collect();
    Proof { clauses }
}

fn collect_ancestors(
    arena: &[Clause],
    base_count: ClauseId,
    id: ClauseId,
    collected: &mut Vec<ClauseId>,
) {
    if collected.contains(&id) {
        return;
    }
    collected.push(id);
    if let Some((parent_a, parent_b)) = arena[(id - 1) as usize].parents {
        if parent_b >= base_count {
            collect_ancestors(arena, base_count, parent_b, collected);
        }
        if parent_a >= base_count {
            collect_ancestors(arena, base_count, parent_a, collected);
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "proof_tests.rs"]
mod tests;
