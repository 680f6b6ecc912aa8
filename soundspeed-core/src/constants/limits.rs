//! Input Limits
//!
//! Accepted ranges for the two user-supplied environment values. Both bounds
//! are inclusive.

// ===== TEMPERATURE =====

/// Lowest accepted air temperature (°F).
///
/// 0°C, the cold edge of the Cramer model.
pub const TEMPERATURE_MIN_F: f64 = 32.0;

/// Highest accepted air temperature (°F).
///
/// 30°C, the warm edge of the Cramer model.
pub const TEMPERATURE_MAX_F: f64 = 86.0;

// ===== HUMIDITY =====

/// Lowest accepted relative humidity (%).
///
/// Completely dry air.
pub const HUMIDITY_MIN_PCT: f64 = 0.0;

/// Highest accepted relative humidity (%).
///
/// Saturated air. Supersaturation is not modelled.
pub const HUMIDITY_MAX_PCT: f64 = 100.0;
