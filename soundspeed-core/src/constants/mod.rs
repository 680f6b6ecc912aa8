//! Constants for the speed-of-sound model
//!
//! Every numeric value the calculation depends on is defined here, with its
//! unit in the name and its source in the documentation.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Atmospheric pressure, Kelvin offset, gas composition and the
//!   validity envelope of the Cramer model
//! - **Limits**: Accepted input ranges for temperature and humidity
//! - **Defaults**: The environment used when the caller supplies nothing
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. The Cramer polynomial coefficients live next to the formula in
//!    [`crate::cramer`], not here

/// Physical constants and the validity envelope of the acoustic model.
pub mod physics;

/// Accepted input ranges for environment validation.
pub mod limits;

/// Default environment values.
pub mod defaults;

// Re-export commonly used constants for convenience
pub use physics::{
    PRESSURE_KPA, PRESSURE_PA, KELVIN_OFFSET, CO2_MOLE_FRACTION,
};

pub use limits::{
    TEMPERATURE_MIN_F, TEMPERATURE_MAX_F,
    HUMIDITY_MIN_PCT, HUMIDITY_MAX_PCT,
};

pub use defaults::{DEFAULT_TEMPERATURE_F, DEFAULT_HUMIDITY_PCT};
