//! The forward-chaining formula system.
//!
//! A [`FormulaSystem`] owns a set of known bindings and the formulas that
//! have not fired yet. Adding bindings saturates the system: pending formulas
//! are scanned in order, and any formula with at most one unknown variable is
//! solved and retired. Values derived during a scan are visible to the
//! formulas later in the same scan, so a chain of formulas given in
//! dependency order resolves in a single pass. Further passes only happen if
//! the previous one derived something.
//!
//! Each formula fires at most once over the lifetime of the system, whether
//! or not it produced a value.

use std::fmt::{self, Debug};

use tracing::{debug, trace};

use crate::{
    formula::{Formula, VariableName},
    Bindings,
};

/// Derive as many variable bindings as possible from a set of formulas.
///
/// ## Generic Parameters
/// - `K`: The variable name type
/// - `V`: The value type
pub struct FormulaSystem<K: VariableName, V> {
    formulas: Vec<Box<dyn Formula<K, V>>>,
    known: Bindings<K, V>,
}

impl<K: VariableName, V: Debug> FormulaSystem<K, V> {
    /// Create a system from its formulas, with no known bindings.
    pub fn new(formulas: impl IntoIterator<Item = Box<dyn Formula<K, V>>>) -> Self {
        Self {
            formulas: formulas.into_iter().collect(),
            known: Bindings::default(),
        }
    }

    /// Add new bindings and derive as many unknowns as possible.
    ///
    /// Bindings for variables that are already known overwrite the previous
    /// value.
    ///
    /// Returns true if at least one pending formula was solvable, i.e. was
    /// retired by this call. This does not imply that a new variable was
    /// derived: the formula may have been fully known already, or unable to
    /// compute its unknown.
    pub fn add(&mut self, new_bindings: impl IntoIterator<Item = (K, V)>) -> bool {
        self.known.extend(new_bindings);

        let mut found_solvable = false;
        let mut pass = 0usize;
        loop {
            trace!(pass, pending = self.formulas.len(), "saturation pass");
            let mut added_new_var = false;
            let mut retired = Vec::with_capacity(self.formulas.len());
            for formula in &self.formulas {
                let solvable = formula.can_solve(&self.known);
                if solvable {
                    found_solvable = true;
                    match formula.solve(&self.known) {
                        Some((var, value)) => {
                            debug!(variable = ?var, value = ?value, "derived binding");
                            self.known.insert(var, value);
                            added_new_var = true;
                        }
                        None => {
                            debug!(variables = ?formula.variables(), "retired formula without value");
                        }
                    }
                }
                retired.push(solvable);
            }
            let mut retired = retired.into_iter();
            self.formulas.retain(|_| !retired.next().unwrap_or(false));

            if !added_new_var {
                break;
            }
            pass += 1;
        }
        found_solvable
    }

    /// Add a single binding, see [`FormulaSystem::add`].
    pub fn set(&mut self, name: K, value: V) -> bool {
        self.add([(name, value)])
    }

    /// The bindings known so far.
    pub fn known_variables(&self) -> &Bindings<K, V> {
        &self.known
    }

    /// The number of formulas that have not fired yet.
    pub fn n_pending(&self) -> usize {
        self.formulas.len()
    }
}

impl<K: VariableName, V: Debug> Debug for FormulaSystem<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormulaSystem")
            .field("known", &self.known)
            .field("pending", &self.formulas.len())
            .finish()
    }
}
