//! Variable substitutions
//!
//! A substitution accumulates bindings during one combination attempt and
//! is then discarded. Bindings only grow; rebinding an existing key is a
//! no-op, and binding a constant is a contract violation.

use super::error::RefuteError;
use super::term::Term;

/// An accumulating mapping from variable- or function-shaped keys to terms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitution {
    bindings: Vec<(Term, Term)>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution::default()
    }

    /// Look up the image of a key by structural equality
    pub fn get(&self, key: &Term) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == key)
            .map(|(_, image)| image)
    }

    pub fn contains(&self, key: &Term) -> bool {
        self.get(key).is_some()
    }

    /// Record a binding, reporting whether the substitution grew.
    ///
    /// Rebinding an existing key is a no-op. A constant key is rejected;
    /// callers check `Term::can_bind_to` first, so this is unreachable in a
    /// correct unifier. The incoming image is normalized against the
    /// existing bindings and the new binding is folded into every stored
    /// image, so no image ever contains a bound key.
    pub fn extend(&mut self, key: &Term, value: &Term) -> Result<bool, RefuteError> {
        if let Term::Constant(name) = key {
            return Err(RefuteError::ConstantBinding(name.clone()));
        }
        if self.contains(key) {
            return Ok(false);
        }
        let image = value.apply(self);
        let binding = Substitution {
            bindings: vec![(key.clone(), image.clone())],
        };
        for (_, existing) in &mut self.bindings {
            *existing = existing.apply(&binding);
        }
        self.bindings.push((key.clone(), image));
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_lookup() {
        let mut subst = Substitution::new();
        let x = Term::variable("x");
        let a = Term::constant("A");

        assert!(subst.extend(&x, &a).unwrap());
        assert_eq!(subst.get(&x), Some(&a));
        assert_eq!(subst.len(), 1);
    }

    #[test]
    fn test_rebinding_is_a_noop() {
        let mut subst = Substitution::new();
        let x = Term::variable("x");

        assert!(subst.extend(&x, &Term::constant("A")).unwrap());
        assert!(!subst.extend(&x, &Term::constant("B")).unwrap());
        assert_eq!(subst.get(&x), Some(&Term::constant("A")));
        assert_eq!(subst.len(), 1);
    }

    #[test]
    fn test_constant_key_rejected() {
        let mut subst = Substitution::new();
        let result = subst.extend(&Term::constant("A"), &Term::variable("x"));
        assert!(matches!(result, Err(RefuteError::ConstantBinding(name)) if name == "A"));
    }

    #[test]
    fn test_function_shaped_key() {
        let mut subst = Substitution::new();
        let fx = Term::function("f", vec![Term::variable("x")]);
        let fa = Term::function("f", vec![Term::constant("A")]);

        assert!(subst.extend(&fx, &fa).unwrap());
        assert_eq!(subst.get(&fx), Some(&fa));
        // a different function term is not this key
        assert!(subst.get(&Term::function("f", vec![Term::variable("y")])).is_none());
    }

    #[test]
    fn test_images_stay_normalized() {
        let mut subst = Substitution::new();
        let x = Term::variable("x");
        let y = Term::variable("y");
        let fy = Term::function("f", vec![y.clone()]);

        subst.extend(&x, &fy).unwrap();
        subst.extend(&y, &Term::constant("A")).unwrap();

        let fa = Term::function("f", vec![Term::constant("A")]);
        assert_eq!(subst.get(&x), Some(&fa));
        assert_eq!(x.apply(&subst), fa);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut subst = Substitution::new();
        subst
            .extend(&Term::variable("x"), &Term::constant("A"))
            .unwrap();

        let mut copy = subst.clone();
        copy.extend(&Term::variable("y"), &Term::constant("B"))
            .unwrap();

        assert_eq!(subst.len(), 1);
        assert_eq!(copy.len(), 2);
    }
}
