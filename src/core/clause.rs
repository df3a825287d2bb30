//! Clauses: disjunctions of literals with derivation metadata

use serde::{Deserialize, Serialize};
use std::fmt;

use super::literal::Literal;
use super::substitution::Substitution;

/// Sequential 1-based identifier assigned when a clause is admitted to the
/// knowledge base; 0 until then
pub type ClauseId = u32;

/// Scoring weight of a clause with no goal ancestry
const UNBOUNDED_WEIGHT: i64 = 10_000;

/// Heuristic distance from the negated goal along derivation ancestry.
///
/// `Bounded(0)` marks the negated query itself; combining propagates the
/// smaller parent distance plus one. Clauses with no goal ancestry are
/// `Unbounded`, which orders after every bounded distance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum GoalDistance {
    Bounded(u32),
    Unbounded,
}

impl GoalDistance {
    /// Distance of a clause combined from parents at `a` and `b`
    pub fn combined(a: GoalDistance, b: GoalDistance) -> GoalDistance {
        match a.min(b) {
            GoalDistance::Bounded(n) => GoalDistance::Bounded(n + 1),
            GoalDistance::Unbounded => GoalDistance::Unbounded,
        }
    }

    /// Contribution to the priority score
    pub fn weight(&self) -> i64 {
        match self {
            GoalDistance::Bounded(n) => i64::from(*n),
            GoalDistance::Unbounded => UNBOUNDED_WEIGHT,
        }
    }
}

/// A clause: an ordered, non-empty disjunction of literals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub literals: Vec<Literal>,
    /// Admission identifier; 0 until admitted
    pub id: ClauseId,
    /// Identifiers of the two clauses this one was combined from, or None
    /// for a base clause
    pub parents: Option<(ClauseId, ClauseId)>,
    pub from_goal: GoalDistance,
    /// Priority score; lower is expanded first
    pub score: i64,
}

impl Clause {
    /// Create a base clause from literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause {
            literals,
            id: 0,
            parents: None,
            from_goal: GoalDistance::Unbounded,
            score: 0,
        }
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    /// True when this clause is the derived empty clause: a sole boolean
    /// FALSE literal
    pub fn is_contradiction(&self) -> bool {
        self.literals.first().is_some_and(Literal::is_false)
    }

    /// Apply a substitution to every literal, keeping derivation metadata
    pub fn apply(&self, subst: &Substitution) -> Clause {
        Clause {
            literals: self.literals.iter().map(|lit| lit.apply(subst)).collect(),
            ..self.clone()
        }
    }

    /// Order-insensitive literal-set equality, used for duplicate
    /// suppression: every literal of each clause occurs in the other
    pub fn same_literals(&self, other: &Clause) -> bool {
        other
            .literals
            .iter()
            .all(|lit| self.literals.contains(lit))
            && self
                .literals
                .iter()
                .all(|lit| other.literals.contains(lit))
    }

    /// Canonical rendering for duplicate detection. Two clauses share a key
    /// iff they are `same_literals`-equal.
    pub fn canonical_key(&self) -> String {
        let mut rendered: Vec<String> = self.literals.iter().map(Literal::to_string).collect();
        rendered.sort_unstable();
        rendered.dedup();
        rendered.join(" | ")
    }

    /// One line of a clause listing: a right-aligned derivation prefix
    /// (`parentA + parentB = id.`), the literals, and a closing period
    pub fn listing(&self) -> String {
        let mut prefix = String::new();
        if let Some((parent_a, parent_b)) = self.parents {
            prefix.push_str(&format!("{} + {} = ", parent_a, parent_b));
        }
        prefix.push_str(&format!("{}. ", self.id));
        format!("{:>15}{}.", prefix, self)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}
