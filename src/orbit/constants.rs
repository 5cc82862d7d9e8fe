//! Gravitational parameters and reference orbit heights.

/// Earth gravitational parameter (m³/s²)
pub const GM_EARTH: f64 = 3.986004418e14;

/// Kerbin gravitational parameter (m³/s²)
pub const GM_KERBIN: f64 = 3.5316e12;

/// Mun gravitational parameter (m³/s²)
pub const GM_MUN: f64 = 6.5138398e10;

/// Altitude of a synchronous orbit around Kerbin (m)
pub const GEOSYNC_KERBIN: f64 = 3_463_330.0;

/// Altitude of a geostationary orbit around Earth (m)
pub const GEOSTATIONARY: f64 = 35_786_000.0;
