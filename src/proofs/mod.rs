//! Proof reconstruction from derivation links

mod proof;

pub use proof::{extract, Proof};
