//! Inference rules

mod combination;

pub use combination::{combine, Combination};
