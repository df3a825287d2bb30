//! Unification of literals via accumulated substitution

mod unify;

pub use unify::{unify, Unification, UnifyError};
