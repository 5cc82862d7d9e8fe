//! Formulas relating a fixed set of variables.
//!
//! A formula is an algebraic relation between N variables that can compute
//! any single one of them once the N-1 others are known. Formulas are the
//! rules of the forward-chaining [`FormulaSystem`](crate::FormulaSystem):
//! whenever at most one of a formula's variables is unknown, the system asks
//! the formula to [`Formula::solve`] for it.
//!
//! The [`Formula`] trait is the capability the system relies on. The
//! provided implementation is [`TabulatedFormula`], which stores one solver
//! callback per variable.

mod tabulated;

pub use tabulated::{SolveFn, TabulatedFormula};

use std::{fmt::Debug, hash::Hash};

use thiserror::Error;

use crate::Bindings;

/// A shortcut for types that can be used as variable names.
///
/// This is implemented for all `'static` types that implement [`Eq`],
/// [`Hash`], [`Clone`] and [`Debug`].
pub trait VariableName: Eq + Hash + Clone + Debug + 'static {}

impl<T: Eq + Hash + Clone + Debug + 'static> VariableName for T {}

/// An algebraic relation over a fixed, ordered list of variables.
///
/// ## Generic Parameters
/// - `K`: The variable name type
/// - `V`: The value type
pub trait Formula<K: VariableName, V> {
    /// The variables related by the formula, in declaration order.
    fn variables(&self) -> &[K];

    /// Whether at most one of the formula's variables is missing from `known`.
    ///
    /// This is also true if no variable is missing at all.
    fn can_solve(&self, known: &Bindings<K, V>) -> bool {
        let n_known = self
            .variables()
            .iter()
            .filter(|var| known.contains_key(*var))
            .count();
        n_known + 1 >= self.variables().len()
    }

    /// The last variable, in declaration order, that is missing from `known`.
    fn unknown_variable<'a>(&'a self, known: &Bindings<K, V>) -> Option<&'a K> {
        self.variables()
            .iter()
            .filter(|var| !known.contains_key(*var))
            .last()
    }

    /// Compute the value of the unknown variable from the `known` bindings.
    ///
    /// Returns `None` if the formula cannot be solved (see
    /// [`Formula::can_solve`]), if every variable is already known, or if
    /// the formula has no way of computing the missing value.
    fn solve(&self, known: &Bindings<K, V>) -> Option<(K, V)>;
}

/// Errors that occur when constructing formulas.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidFormula {
    /// The variable is not one of the formula's variables
    #[error("Variable {0} is not registered within the formula")]
    UndeclaredVariable(String),

    /// A formula must relate at least one variable
    #[error("Cannot create a formula without variables")]
    NoVariables,
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    pub(crate) type TestKey = &'static str;

    /// A formula that only reports its variables.
    pub(crate) struct VarsOnly(pub(crate) Vec<TestKey>);

    impl Formula<TestKey, i64> for VarsOnly {
        fn variables(&self) -> &[TestKey] {
            &self.0
        }

        fn solve(&self, _: &Bindings<TestKey, i64>) -> Option<(TestKey, i64)> {
            None
        }
    }

    pub(crate) fn bindings<K: VariableName, V>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Bindings<K, V> {
        pairs.into_iter().collect()
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&["x"], false)]
    #[case(&["x", "y"], true)]
    #[case(&["x", "y", "z"], true)]
    #[case(&["x", "y", "z", "w"], true)]
    #[case(&["w", "u"], false)]
    fn can_solve_with_one_missing(#[case] known: &[TestKey], #[case] expected: bool) {
        let formula = VarsOnly(vec!["x", "y", "z"]);
        let known = bindings(known.iter().map(|&k| (k, 0)));
        assert_eq!(formula.can_solve(&known), expected);
    }

    #[test]
    fn unknown_variable_is_last_missing() {
        let formula = VarsOnly(vec!["x", "y", "z"]);
        assert_eq!(formula.unknown_variable(&bindings([])), Some(&"z"));
        assert_eq!(formula.unknown_variable(&bindings([("z", 1)])), Some(&"y"));
        assert_eq!(
            formula.unknown_variable(&bindings([("y", 1), ("z", 1)])),
            Some(&"x")
        );
        assert_eq!(
            formula.unknown_variable(&bindings([("x", 1), ("y", 1), ("z", 1)])),
            None
        );
    }

    proptest! {
        #[test]
        fn can_solve_iff_at_most_one_missing(
            vars in prop::collection::btree_set(0u8..16, 1..8),
            known in prop::collection::btree_set(0u8..16, 0..16),
        ) {
            struct Numbered(Vec<u8>);
            impl Formula<u8, ()> for Numbered {
                fn variables(&self) -> &[u8] {
                    &self.0
                }
                fn solve(&self, _: &Bindings<u8, ()>) -> Option<(u8, ())> {
                    None
                }
            }

            let formula = Numbered(vars.iter().copied().collect());
            let overlap = vars.intersection(&known).count();
            let known = bindings(known.into_iter().map(|k| (k, ())));
            prop_assert_eq!(formula.can_solve(&known), overlap + 1 >= vars.len());
        }
    }
}
