//! Two-body orbit formulas.
//!
//! Binds the formula system to the variables of an elliptical orbit around a
//! central body: the gravitational parameter `GM`, the orbital `period`, the
//! apsis radii `Rp` and `Ra`, the apsis velocities `Vp` and `Va`, the
//! eccentricity `e` and the semi-major axis `a`. Any sufficient subset of
//! them determines the others, e.g.
//!
//! ```
//! use orbit_formulas::orbit::{orbit_system, OrbitVariable, GM_KERBIN};
//!
//! let mut system = orbit_system().unwrap();
//! system.add([
//!     (OrbitVariable::Gm, GM_KERBIN),
//!     (OrbitVariable::PeriRadius, 700_000.),
//!     (OrbitVariable::Eccentricity, 0.),
//! ]);
//! let period = system.known_variables()[&OrbitVariable::Period];
//! assert!((period - 1958.).abs() < 1.);
//! ```
//!
//! Input in the textual formats of the `orbit` command line is handled by
//! [`parse_binding`], [`parse_insertion_args`] and [`run_prompt`].

mod constants;
mod formulas;
mod parse;
mod prompt;
mod variable;

pub use constants::{GEOSTATIONARY, GEOSYNC_KERBIN, GM_EARTH, GM_KERBIN, GM_MUN};
pub use formulas::{orbit_formulas, orbit_system, OrbitFormula};
pub use parse::{
    eval_ratio, insertion_bindings, parse_binding, parse_gm, parse_height, parse_insertion_args,
    parse_value, ParseError, DEFAULT_GM,
};
pub use prompt::{ensure_gm, format_bindings, run_prompt, EXIT};
pub use variable::OrbitVariable;

use thiserror::Error;

use crate::{FormulaSystem, InvalidFormula};

/// A formula system over orbit variables.
pub type OrbitSystem = FormulaSystem<OrbitVariable, f64>;

/// Errors of the orbit command line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OrbitError {
    /// Malformed user input
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The orbit formulas could not be constructed
    #[error("Invalid orbit formula: {0}")]
    Formula(#[from] InvalidFormula),

    /// Reading the prompt input or writing its output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
