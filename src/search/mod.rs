//! Best-first resolution search over a knowledge base of clauses

mod state;

pub use state::{SearchConfig, SearchState, Verdict};

use crate::core::{Problem, RefuteError};

/// Run a proof attempt on a problem
pub fn prove(problem: &Problem, config: &SearchConfig) -> Result<Verdict, RefuteError> {
    let state = SearchState::seed(problem)?;
    state.run(config)
}
