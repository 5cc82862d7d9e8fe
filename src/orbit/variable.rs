use std::str::FromStr;

use derive_more::Display;

use super::ParseError;

/// A variable of a two-body orbit.
///
/// Variables are named by the short names used on the command line, see
/// [`OrbitVariable::name`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrbitVariable {
    /// Standard gravitational parameter of the central body (m³/s²)
    #[display(fmt = "GM")]
    #[cfg_attr(feature = "serde", serde(rename = "GM"))]
    Gm,
    /// Orbital period (s)
    #[display(fmt = "period")]
    #[cfg_attr(feature = "serde", serde(rename = "period"))]
    Period,
    /// Periapsis radius (m)
    #[display(fmt = "Rp")]
    #[cfg_attr(feature = "serde", serde(rename = "Rp"))]
    PeriRadius,
    /// Velocity at periapsis (m/s)
    #[display(fmt = "Vp")]
    #[cfg_attr(feature = "serde", serde(rename = "Vp"))]
    PeriVelocity,
    /// Apoapsis radius (m)
    #[display(fmt = "Ra")]
    #[cfg_attr(feature = "serde", serde(rename = "Ra"))]
    ApoRadius,
    /// Velocity at apoapsis (m/s)
    #[display(fmt = "Va")]
    #[cfg_attr(feature = "serde", serde(rename = "Va"))]
    ApoVelocity,
    /// Eccentricity
    #[display(fmt = "e")]
    #[cfg_attr(feature = "serde", serde(rename = "e"))]
    Eccentricity,
    /// Semi-major axis (m)
    #[display(fmt = "a")]
    #[cfg_attr(feature = "serde", serde(rename = "a"))]
    SemiMajorAxis,
}

impl OrbitVariable {
    /// All orbit variables, in display order.
    pub const ALL: [OrbitVariable; 8] = [
        OrbitVariable::Gm,
        OrbitVariable::Period,
        OrbitVariable::PeriRadius,
        OrbitVariable::PeriVelocity,
        OrbitVariable::ApoRadius,
        OrbitVariable::ApoVelocity,
        OrbitVariable::Eccentricity,
        OrbitVariable::SemiMajorAxis,
    ];

    /// The short name of the variable.
    pub fn name(&self) -> &'static str {
        match self {
            OrbitVariable::Gm => "GM",
            OrbitVariable::Period => "period",
            OrbitVariable::PeriRadius => "Rp",
            OrbitVariable::PeriVelocity => "Vp",
            OrbitVariable::ApoRadius => "Ra",
            OrbitVariable::ApoVelocity => "Va",
            OrbitVariable::Eccentricity => "e",
            OrbitVariable::SemiMajorAxis => "a",
        }
    }
}

impl FromStr for OrbitVariable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrbitVariable::ALL
            .into_iter()
            .find(|var| var.name() == s)
            .ok_or_else(|| ParseError::UnknownVariable(s.to_string()))
    }
}
