#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod formula;
pub mod orbit;
pub mod system;

pub use formula::{Formula, InvalidFormula, TabulatedFormula};
pub use system::FormulaSystem;

pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// The known variable bindings, from variable name to value.
pub type Bindings<K, V> = rustc_hash::FxHashMap<K, V>;
