//! Search state: the clause arena, the frontier, and the main loop

use indexmap::IndexSet;
use serde::Serialize;

use crate::core::{Clause, ClauseId, GoalDistance, Problem, RefuteError};
use crate::proofs::{extract, Proof};
use crate::rules::{combine, Combination};

/// Resource limits for the search loop
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Admissions before the search gives up
    pub max_iterations: usize,
    /// Knowledge-base size before the search gives up
    pub max_clauses: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_iterations: 10_000,
            max_clauses: 10_000,
        }
    }
}

/// Terminal outcome of a proof attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The empty clause was derived; the query holds
    Proved(Proof),
    /// The frontier emptied without deriving a contradiction
    Disproved,
    /// A configured resource cap was reached before either outcome
    ResourceLimit,
}

/// One proof attempt: an append-only clause arena plus the frontier of
/// generated-but-unadmitted candidate resolvents
pub struct SearchState {
    /// Knowledge base; a clause's id is its position plus one
    clauses: Vec<Clause>,
    /// Candidates awaiting admission, in generation order
    frontier: Vec<Clause>,
    /// Canonical keys of every clause in the arena or frontier
    seen: IndexSet<String>,
    /// Arena size after seeding: base clauses plus the negated goal
    base_count: ClauseId,
}

impl SearchState {
    /// Seed a search: admit the base clauses, negate and admit the goal,
    /// and fill the frontier from every unordered pair
    pub fn seed(problem: &Problem) -> Result<Self, RefuteError> {
        let mut state = SearchState {
            clauses: Vec::with_capacity(problem.clauses.len() + 1),
            frontier: Vec::new(),
            seen: IndexSet::new(),
            base_count: 0,
        };

        for clause in &problem.clauses {
            state.admit(clause.clone());
        }
        let mut negated_goal = Clause::new(vec![problem.goal.negated()]);
        negated_goal.from_goal = GoalDistance::Bounded(0);
        state.admit(negated_goal);
        state.base_count = state.clauses.len() as ClauseId;

        for i in 0..state.clauses.len() {
            for j in (i + 1)..state.clauses.len() {
                if let Combination::Resolvent(candidate) =
                    combine(&state.clauses[i], &state.clauses[j])?
                {
                    state.enqueue(candidate);
                }
            }
        }
        Ok(state)
    }

    /// Drain the frontier best-first until a contradiction is admitted,
    /// the frontier empties, or a resource cap is hit
    pub fn run(mut self, config: &SearchConfig) -> Result<Verdict, RefuteError> {
        let mut iterations = 0;
        loop {
            let Some(next) = self.take_best() else {
                return Ok(Verdict::Disproved);
            };
            if iterations >= config.max_iterations || self.clauses.len() >= config.max_clauses {
                return Ok(Verdict::ResourceLimit);
            }
            iterations += 1;

            let id = self.admit(next);
            let newest = &self.clauses[(id - 1) as usize];
            if newest.is_contradiction() {
                return Ok(Verdict::Proved(extract(&self.clauses, self.base_count)));
            }
            self.expand(id)?;
        }
    }

    /// Remove the lowest-score frontier member; ties fall to the earliest
    /// inserted
    fn take_best(&mut self) -> Option<Clause> {
        let (index, _) = self
            .frontier
            .iter()
            .enumerate()
            .min_by_key(|&(_, clause)| clause.score)?;
        Some(self.frontier.remove(index))
    }

    /// Append a clause to the arena, assigning the next identifier
    fn admit(&mut self, mut clause: Clause) -> ClauseId {
        let id = (self.clauses.len() + 1) as ClauseId;
        clause.id = id;
        self.seen.insert(clause.canonical_key());
        self.clauses.push(clause);
        id
    }

    /// Combine the newest admitted clause against every other clause in
    /// the arena, merging non-duplicate resolvents into the frontier
    fn expand(&mut self, newest: ClauseId) -> Result<(), RefuteError> {
        let newest_index = (newest - 1) as usize;
        for i in 0..self.clauses.len() - 1 {
            if let Combination::Resolvent(candidate) =
                combine(&self.clauses[i], &self.clauses[newest_index])?
            {
                self.enqueue(candidate);
            }
        }
        Ok(())
    }

    /// Add a candidate unless a literal-set-equal clause already exists in
    /// the knowledge base or the frontier
    fn enqueue(&mut self, candidate: Clause) {
        if self.seen.insert(candidate.canonical_key()) {
            self.frontier.push(candidate);
        }
    }
}
