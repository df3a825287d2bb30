//! A parsed problem: the clause set plus the query literal

use serde::{Deserialize, Serialize};
use std::fmt;

use super::clause::{Clause, ClauseId};
use super::literal::Literal;

/// The input to a proof attempt: base clauses and exactly one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub clauses: Vec<Clause>,
    pub goal: Literal,
}

impl Problem {
    /// Create a problem, assigning sequential 1-based clause identifiers
    pub fn new(mut clauses: Vec<Clause>, goal: Literal) -> Self {
        for (i, clause) in clauses.iter_mut().enumerate() {
            clause.id = (i + 1) as ClauseId;
        }
        Problem { clauses, goal }
    }

    /// Serialize the problem to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a problem from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for clause in &self.clauses {
            writeln!(f, "{}", clause.listing())?;
        }
        writeln!(f, "\nQuery:\n     {}?", self.goal)
    }
}
