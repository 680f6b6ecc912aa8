//! Default Environment
//!
//! Values substituted when the caller leaves a setting unset.

/// Default air temperature (°F). Room temperature, 20°C.
pub const DEFAULT_TEMPERATURE_F: f64 = 68.0;

/// Default relative humidity (%).
pub const DEFAULT_HUMIDITY_PCT: f64 = 50.0;
