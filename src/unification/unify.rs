//! Literal unification with restart-on-extension

use thiserror::Error;

use crate::core::{Literal, RefuteError, Substitution};

/// Outcome of a successful unification
#[derive(Debug, Clone, PartialEq)]
pub enum Unification {
    /// The literals already agree under the caller's substitution,
    /// marking a resolvable pair
    Direct,
    /// Agreement required new bindings; the enlarged substitution
    Extended(Substitution),
}

/// Why two literals failed to unify
#[derive(Error, Debug)]
pub enum UnifyError {
    /// Different names, arities, or boolean-ness
    #[error("literal shapes differ")]
    ShapeMismatch,

    /// Arguments disagree at a position where neither side may bind
    #[error("arguments disagree at position {0}")]
    Disagreement(usize),

    /// Internal contract violation surfaced from the substitution store
    #[error(transparent)]
    Fatal(#[from] RefuteError),
}

/// Unify two literals' arguments under a base substitution.
///
/// Applies the substitution to both literals and scans argument positions
/// left to right for the first disagreement. The side that `can_bind_to`
/// the other is bound (the first literal's side preferred) and the scan
/// restarts under the enlarged substitution; earlier positions may now
/// agree or newly disagree. Each restart strictly grows the substitution,
/// so the loop terminates. A scan with no disagreement succeeds: `Direct`
/// when the substitution never grew, `Extended` otherwise.
pub fn unify(
    a: &Literal,
    b: &Literal,
    base: &Substitution,
) -> Result<Unification, UnifyError> {
    let (
        Literal::Predicate {
            name: name_a,
            args: args_a,
            ..
        },
        Literal::Predicate {
            name: name_b,
            args: args_b,
            ..
        },
    ) = (a, b)
    else {
        return Err(UnifyError::ShapeMismatch);
    };
    if name_a != name_b || args_a.len() != args_b.len() {
        return Err(UnifyError::ShapeMismatch);
    }

    let mut subst = base.clone();
    let mut extended = false;
    'restart: loop {
        for (pos, (arg_a, arg_b)) in args_a.iter().zip(args_b).enumerate() {
            let left = arg_a.apply(&subst);
            let right = arg_b.apply(&subst);
            if left == right {
                continue;
            }
            let grew = if left.can_bind_to(&right) {
                subst.extend(&left, &right)?
            } else if right.can_bind_to(&left) {
                subst.extend(&right, &left)?
            } else {
                return Err(UnifyError::Disagreement(pos));
            };
            if !grew {
                // the binding already exists yet the disagreement persists
                return Err(UnifyError::Disagreement(pos));
            }
            extended = true;
            continue 'restart;
        }
        return Ok(if extended {
            Unification::Extended(subst)
        } else {
            Unification::Direct
        });
    }
}
