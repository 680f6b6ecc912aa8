//! Environment Validators
//!
//! ## Overview
//!
//! The Cramer model is an empirical fit. Outside the conditions it was fitted
//! on, its polynomial terms still produce numbers, but those numbers are not
//! speeds of sound. Each validator here guards one input against that:
//!
//! - Temperature: 32°F to 86°F (0°C to 30°C)
//! - Humidity: 0% to 100% relative humidity
//!
//! Pressure is fixed at 101.325 kPa and needs no validator.
//!
//! ## Validation Layers
//!
//! ### 1. Numeric Check
//! NaN and infinities are rejected before anything else.
//!
//! ### 2. Range Check
//! Inclusive bounds, so the edges of the model are usable:
//! ```rust
//! use soundspeed_core::validators::TemperatureValidator;
//! use soundspeed_core::traits::Validator;
//!
//! let validator = TemperatureValidator::default();
//! assert!(validator.validate(32.0).is_ok());
//! assert!(validator.validate(86.0).is_ok());
//! assert!(validator.validate(86.5).is_err());
//! ```
//!
//! ## Collecting Failures
//!
//! The calculator runs every validator and keeps every failure, so a caller
//! sees both problems at once when both inputs are wrong:
//!
//! ```rust
//! use soundspeed_core::{Environment, validators::validate_environment};
//!
//! let errors = validate_environment(&Environment::new(100.0, 120.0));
//! assert_eq!(errors.len(), 2);
//! ```

mod temperature;
mod humidity;
mod utils;

pub use temperature::TemperatureValidator;
pub use humidity::HumidityValidator;

use crate::{
    environment::Environment,
    errors::ValidationErrors,
    traits::Validator,
};

/// Run the default validators over an environment, collecting every failure.
///
/// Temperature is checked first, then humidity; the returned list keeps that
/// order.
pub fn validate_environment(environment: &Environment) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let checks = [
        TemperatureValidator::default().validate(environment.temperature()),
        HumidityValidator::default().validate(environment.humidity()),
    ];

    for error in checks.into_iter().filter_map(Result::err) {
        // Capacity matches the number of checks above
        let _ = errors.push(error);
    }

    errors
}
