//! Terms: the recursive argument model
//!
//! A term is a constant, a variable, or a function application over further
//! terms. In the clause language a name beginning with an uppercase letter
//! denotes a constant; any other name denotes a variable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::substitution::Substitution;

/// A term in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Constant(String),
    Variable(String),
    Function { name: String, args: Vec<Term> },
}

impl Term {
    pub fn constant(name: &str) -> Self {
        Term::Constant(name.to_string())
    }

    pub fn variable(name: &str) -> Self {
        Term::Variable(name.to_string())
    }

    pub fn function(name: &str, args: Vec<Term>) -> Self {
        Term::Function {
            name: name.to_string(),
            args,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Term::Constant(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Term::Function { .. })
    }

    /// Whether binding `self` to `other` is legal.
    ///
    /// Constants are never bindable. A variable may not bind to a compound
    /// term containing an occurrence of itself (occurs-check). A function
    /// pattern may only bind to a function of the same name and arity whose
    /// argument positions are pairwise equal or themselves bindable.
    pub fn can_bind_to(&self, other: &Term) -> bool {
        match self {
            Term::Constant(_) => false,
            Term::Variable(_) => !occurs_in(self, other),
            Term::Function { name, args } => match other {
                Term::Function {
                    name: other_name,
                    args: other_args,
                } => {
                    name == other_name
                        && args.len() == other_args.len()
                        && args
                            .iter()
                            .zip(other_args)
                            .all(|(a, b)| a == b || a.can_bind_to(b))
                }
                _ => false,
            },
        }
    }

    /// Apply a substitution, rebuilding the term.
    ///
    /// A bound key (variable- or function-shaped) is replaced by a copy of
    /// its image; an unbound function recurses into its arguments;
    /// constants are inert. Images are kept normalized by the store, so a
    /// single replacement suffices.
    pub fn apply(&self, subst: &Substitution) -> Term {
        match self {
            Term::Constant(_) => self.clone(),
            Term::Variable(_) => subst.get(self).cloned().unwrap_or_else(|| self.clone()),
            Term::Function { name, args } => match subst.get(self) {
                Some(image) => image.clone(),
                None => Term::Function {
                    name: name.clone(),
                    args: args.iter().map(|arg| arg.apply(subst)).collect(),
                },
            },
        }
    }
}

/// Whether `needle` occurs inside the compound term `haystack`
fn occurs_in(needle: &Term, haystack: &Term) -> bool {
    match haystack {
        Term::Function { args, .. } => {
            args.iter().any(|arg| arg == needle || occurs_in(needle, arg))
        }
        _ => false,
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(name) | Term::Variable(name) => write!(f, "{}", name),
            Term::Function { name, args } => {
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
    fn test_term_kinds() {
        assert!(Term::constant("A").is_constant());
        assert!(Term::variable("x").is_variable());
        assert!(Term::function("f", vec![Term::variable("x")]).is_function());
    }

    #[test]
    fn test_structural_equality() {
        let f1 = Term::function("f", vec![Term::variable("x"), Term::constant("A")]);
        let f2 = Term::function("f", vec![Term::variable("x"), Term::constant("A")]);
        assert_eq!(f1, f2);

        // argument order matters
        let f3 = Term::function("f", vec![Term::constant("A"), Term::variable("x")]);
        assert_ne!(f1, f3);

        // arity matters
        let f4 = Term::function("f", vec![Term::variable("x")]);
        assert_ne!(f1, f4);
    }

    #[test]
    fn test_constant_never_binds() {
        let a = Term::constant("A");
        assert!(!a.can_bind_to(&Term::variable("x")));
        assert!(!a.can_bind_to(&Term::constant("B")));
    }

    #[test]
    fn test_occurs_check() {
        let x = Term::variable("x");
        let fx = Term::function("f", vec![x.clone()]);
        assert!(!x.can_bind_to(&fx));

        // nested occurrence
        let fgx = Term::function("f", vec![Term::function("g", vec![x.clone()])]);
        assert!(!x.can_bind_to(&fgx));

        let fy = Term::function("f", vec![Term::variable("y")]);
        assert!(x.can_bind_to(&fy));
    }

    #[test]
    fn test_function_binding_compatibility() {
        let fx = Term::function("f", vec![Term::variable("x")]);
        let fa = Term::function("f", vec![Term::constant("A")]);
        assert!(fx.can_bind_to(&fa));

        // different functor
        let ga = Term::function("g", vec![Term::constant("A")]);
        assert!(!fx.can_bind_to(&ga));

        // incompatible argument position
        let fb = Term::function("f", vec![Term::constant("B")]);
        assert!(!fa.can_bind_to(&fb));
    }

    #[test]
    fn test_apply_recurses_into_functions() {
        let mut subst = Substitution::new();
        subst
            .extend(&Term::variable("x"), &Term::constant("A"))
            .unwrap();

        let term = Term::function("f", vec![Term::function("g", vec![Term::variable("x")])]);
        let expected = Term::function("f", vec![Term::function("g", vec![Term::constant("A")])]);
        assert_eq!(term.apply(&subst), expected);
    }

    #[test]
    fn test_display() {
        let term = Term::function(
            "f",
            vec![
                Term::variable("x"),
                Term::function("g", vec![Term::constant("A")]),
            ],
        );
        assert_eq!(term.to_string(), "f(x, g(A))");
    }
}
