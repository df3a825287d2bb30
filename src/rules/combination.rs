//! The resolution step: combining two clauses into a candidate resolvent

use crate::core::{Clause, GoalDistance, Literal, RefuteError, Substitution};
use crate::unification::{unify, Unification, UnifyError};

/// Score bonus ensuring a derived contradiction is always selected next
const CONTRADICTION_BONUS: i64 = 1_000_000;

/// Outcome of combining two clauses
#[derive(Debug, Clone, PartialEq)]
pub enum Combination {
    /// A candidate resolvent carrying parent links, goal distance and score
    Resolvent(Clause),
    /// A same-sign literal pair matched directly; the combination is
    /// discarded to avoid deriving a tautology
    Tautology,
    /// No literal pair unified; the clauses do not interact
    NoInteraction,
}

/// Combine two clauses by resolution.
///
/// Each literal is paired with the first literal of the other clause it
/// unifies with; alternative pairings are not explored. When a pairing
/// requires new bindings, the whole combination restarts on fresh copies
/// of both clauses under the enlarged substitution. A direct match with
/// opposite signs eliminates both literals; with equal signs the result
/// would be a tautology and the combination is discarded. Literals with no
/// partner survive, substituted. Zero survivors yield the empty clause as
/// a single boolean FALSE literal.
pub fn combine(a: &Clause, b: &Clause) -> Result<Combination, RefuteError> {
    let mut subst = Substitution::new();
    'restart: loop {
        let left = a.apply(&subst);
        let right = b.apply(&subst);
        let mut survivors: Vec<Literal> = Vec::new();
        let mut interacted = false;

        for (own, other) in [(&left, &right), (&right, &left)] {
            for lit in &own.literals {
                let mut kept = Some(lit.clone());
                for partner in &other.literals {
                    match unify(lit, partner, &subst) {
                        Ok(Unification::Direct) => {
                            interacted = true;
                            if lit.is_positive() == partner.is_positive() {
                                return Ok(Combination::Tautology);
                            }
                            // complementary pair: both occurrences drop
                            kept = None;
                            break;
                        }
                        Ok(Unification::Extended(enlarged)) => {
                            subst = enlarged;
                            continue 'restart;
                        }
                        Err(UnifyError::Fatal(fault)) => return Err(fault),
                        Err(_) => {}
                    }
                }
                if let Some(survivor) = kept {
                    survivors.push(survivor);
                }
            }
        }

        if !interacted {
            return Ok(Combination::NoInteraction);
        }
        if survivors.is_empty() {
            survivors.push(Literal::Boolean(false));
        }

        let mut resolvent = Clause::new(survivors);
        resolvent.parents = Some((a.id, b.id));
        resolvent.from_goal = GoalDistance::combined(a.from_goal, b.from_goal);
        resolvent.score = score(&resolvent);
        return Ok(Combination::Resolvent(resolvent));
    }
}

/// Priority score: goal distance plus literal count, with a large bonus
/// for the empty clause. Lower scores are expanded first.
fn score(clause: &Clause) -> i64 {
    let mut score = clause.from_goal.weight() + clause.literals.len() as i64;
    if clause.is_contradiction() {
        score -= CONTRADICTION_BONUS;
    }
    score
}
