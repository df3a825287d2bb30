//! refute: a resolution-refutation theorem prover for clause-form
//! first-order logic
//!
//! Given a set of clauses and a query, the prover negates the query and
//! searches best-first for the empty clause. On success it reconstructs
//! the minimal derivation from the recorded parent links.

// Module declarations
pub mod core;
pub mod parser;
pub mod proofs;
pub mod rules;
pub mod search;
pub mod unification;

// Re-exports for convenient access
pub use crate::core::{
    Clause, ClauseId, GoalDistance, Literal, Problem, RefuteError, Result, Substitution, Term,
};
pub use crate::parser::{parse_file, parse_problem};
pub use crate::proofs::Proof;
pub use crate::rules::{combine, Combination};
pub use crate::search::{prove, SearchConfig, Verdict};
pub use crate::unification::{unify, Unification, UnifyError};
