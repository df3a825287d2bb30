//! Error types for refute

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefuteError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Internal contract violation: a substitution may never bind a
    /// constant. A correct unifier checks binding legality first.
    #[error("cannot bind constant '{0}'")]
    ConstantBinding(String),
}

pub type Result<T> = std::result::Result<T, RefuteError>;
