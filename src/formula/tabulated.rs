use std::fmt::{self, Debug};

use itertools::Itertools;

use super::{Formula, InvalidFormula, VariableName};
use crate::{Bindings, HashMap};

/// A solver callback: computes one variable from the known bindings.
///
/// Returning `None` signals that no value can be computed.
pub type SolveFn<K, V> = Box<dyn Fn(&Bindings<K, V>) -> Option<V>>;

/// A formula given by a table of solver callbacks, one per variable.
///
/// The variables are fixed at construction. Every variable starts out with a
/// callback that never produces a value; [`TabulatedFormula::add_solve`]
/// registers how a variable is computed from the others.
pub struct TabulatedFormula<K, V> {
    variables: Vec<K>,
    solves: HashMap<K, SolveFn<K, V>>,
}

fn no_solve<K: 'static, V: 'static>() -> SolveFn<K, V> {
    Box::new(|_: &Bindings<K, V>| None)
}

impl<K: VariableName, V: 'static> TabulatedFormula<K, V> {
    /// Construct a formula relating `variables`.
    ///
    /// Return an error if there are no variables.
    pub fn try_new(variables: impl IntoIterator<Item = K>) -> Result<Self, InvalidFormula> {
        let variables = variables.into_iter().collect_vec();
        if variables.is_empty() {
            return Err(InvalidFormula::NoVariables);
        }
        let solves = variables
            .iter()
            .map(|var| (var.clone(), no_solve()))
            .collect();
        Ok(Self { variables, solves })
    }

    /// Register `func` as the way to compute `variable` from the others.
    ///
    /// Return an error, leaving the formula unchanged, if `variable` is not
    /// one of the formula's variables.
    pub fn add_solve(
        &mut self,
        variable: K,
        func: impl Fn(&Bindings<K, V>) -> Option<V> + 'static,
    ) -> Result<(), InvalidFormula> {
        let slot = self
            .solves
            .get_mut(&variable)
            .ok_or_else(|| InvalidFormula::UndeclaredVariable(format!("{variable:?}")))?;
        *slot = Box::new(func);
        Ok(())
    }

    /// Builder version of [`TabulatedFormula::add_solve`].
    pub fn with_solve(
        mut self,
        variable: K,
        func: impl Fn(&Bindings<K, V>) -> Option<V> + 'static,
    ) -> Result<Self, InvalidFormula> {
        self.add_solve(variable, func)?;
        Ok(self)
    }

    /// Forget how to compute `variable`.
    ///
    /// The variable remains part of the formula, it just can no longer be
    /// solved for.
    pub fn remove_solve(&mut self, variable: &K) -> Result<(), InvalidFormula> {
        let slot = self
            .solves
            .get_mut(variable)
            .ok_or_else(|| InvalidFormula::UndeclaredVariable(format!("{variable:?}")))?;
        *slot = no_solve();
        Ok(())
    }

    /// The solver callbacks, by variable.
    pub fn solves(&self) -> &HashMap<K, SolveFn<K, V>> {
        &self.solves
    }
}

impl<K: VariableName, V: 'static> Formula<K, V> for TabulatedFormula<K, V> {
    fn variables(&self) -> &[K] {
        &self.variables
    }

    fn solve(&self, known: &Bindings<K, V>) -> Option<(K, V)> {
        if !self.can_solve(known) {
            return None;
        }
        let unknown = self.unknown_variable(known)?;
        let value = (self.solves[unknown])(known)?;
        Some((unknown.clone(), value))
    }
}

impl<K: Debug, V> Debug for TabulatedFormula<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vars_str = self.variables.iter().map(|var| format!("{var:?}")).join(", ");
        write!(f, "formula({vars_str})")
    }
}
