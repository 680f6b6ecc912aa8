//! Temperature validator
//!
//! Validates air temperature in Fahrenheit against the range over which the
//! Cramer model was fitted:
//! - 32°F (0°C) to 86°F (30°C), both inclusive
//! - NaN and infinities are rejected like any other out-of-range value

use crate::{
    constants::limits::{TEMPERATURE_MAX_F, TEMPERATURE_MIN_F},
    errors::{ValidationError, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Fahrenheit readings
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    /// Minimum valid temperature in Fahrenheit
    min_fahrenheit: f64,

    /// Maximum valid temperature in Fahrenheit
    max_fahrenheit: f64,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            min_fahrenheit: TEMPERATURE_MIN_F,
            max_fahrenheit: TEMPERATURE_MAX_F,
        }
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_fahrenheit: min,
            max_fahrenheit: max,
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(value, &self.constraints(), |value| {
            ValidationError::TemperatureOutOfRange { value }
        })
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_fahrenheit,
            max_value: self.max_fahrenheit,
        }
    }
}
