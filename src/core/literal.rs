//! Literals: signed predicate applications and boolean control markers
//!
//! The boolean literals stand in for eliminated complementary pairs inside
//! clause combination and for the derived empty clause. They never appear
//! in authored input.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::substitution::Substitution;
use super::term::Term;

/// A literal in a clause
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    /// A signed predicate application
    Predicate {
        positive: bool,
        name: String,
        args: Vec<Term>,
    },
    /// Internal control marker: `TRUE` or `FALSE`
    Boolean(bool),
}

impl Literal {
    pub fn predicate(name: &str, args: Vec<Term>, positive: bool) -> Self {
        Literal::Predicate {
            positive,
            name: name.to_string(),
            args,
        }
    }

    pub fn positive(name: &str, args: Vec<Term>) -> Self {
        Literal::predicate(name, args, true)
    }

    pub fn negative(name: &str, args: Vec<Term>) -> Self {
        Literal::predicate(name, args, false)
    }

    /// Flip the sign
    pub fn negated(&self) -> Literal {
        match self {
            Literal::Predicate {
                positive,
                name,
                args,
            } => Literal::Predicate {
                positive: !positive,
                name: name.clone(),
                args: args.clone(),
            },
            Literal::Boolean(value) => Literal::Boolean(!value),
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Predicate { positive, .. } => *positive,
            Literal::Boolean(value) => *value,
        }
    }

    /// True when this is the boolean FALSE marker (a derived contradiction)
    pub fn is_false(&self) -> bool {
        matches!(self, Literal::Boolean(false))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Literal::Boolean(true))
    }

    /// Apply a substitution to every argument
    pub fn apply(&self, subst: &Substitution) -> Literal {
        match self {
            Literal::Predicate {
                positive,
                name,
                args,
            } => Literal::Predicate {
                positive: *positive,
                name: name.clone(),
                args: args.iter().map(|arg| arg.apply(subst)).collect(),
            },
            Literal::Boolean(_) => self.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            Literal::Predicate {
                positive,
                name,
                args,
            } => {
                if !positive {
                    write!(f, "~")?;
                }
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_sign() {
        let pos = Literal::positive("p", vec![Term::constant("A")]);
        let neg = Literal::negative("p", vec![Term::constant("A")]);
        assert_ne!(pos, neg);
        assert_eq!(pos, neg.negated());
    }

    #[test]
    fn test_boolean_markers() {
        assert!(Literal::Boolean(false).is_false());
        assert!(!Literal::Boolean(true).is_false());
        assert_ne!(Literal::Boolean(true), Literal::Boolean(false));
    }

    #[test]
    fn test_apply() {
        let mut subst = Substitution::new();
        subst
            .extend(&Term::variable("x"), &Term::constant("A"))
            .unwrap();

        let lit = Literal::negative("p", vec![Term::variable("x"), Term::variable("y")]);
        let expected = Literal::negative("p", vec![Term::constant("A"), Term::variable("y")]);
        assert_eq!(lit.apply(&subst), expected);
    }

    #[test]
    fn test_display() {
        let lit = Literal::negative(
            "knows",
            vec![
                Term::constant("Plato"),
                Term::function("mentor", vec![Term::variable("x")]),
            ],
        );
        assert_eq!(lit.to_string(), "~knows(Plato, mentor(x))");
        assert_eq!(Literal::Boolean(false).to_string(), "FALSE");
    }
}
