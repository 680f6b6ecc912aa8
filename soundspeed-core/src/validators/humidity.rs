//! Humidity Validation
//!
//! ## Physics Background
//!
//! Relative humidity (RH) is the ratio of water vapour present to the maximum
//! possible at a given temperature:
//!
//! ```text
//! RH = (Actual Vapour Pressure / Saturation Vapour Pressure) × 100%
//! ```
//!
//! The Cramer model turns RH into a water-vapour mole fraction using the
//! saturation vapour pressure and enhancement factor (see [`crate::cramer`]).
//! Values outside 0-100% have no meaning there: supersaturation (fog, mist)
//! is not modelled, and negative readings from drifting sensors are rejected
//! rather than clamped.
//!
//! ## Usage Examples
//!
//! ```rust
//! use soundspeed_core::validators::HumidityValidator;
//! use soundspeed_core::traits::Validator;
//!
//! let validator = HumidityValidator::default();
//! assert!(validator.validate(45.0).is_ok());
//! assert!(validator.validate(101.0).is_err());
//!
//! // Controlled room - tighter band
//! let museum = HumidityValidator::new_with_limits(40.0, 60.0);
//! assert!(museum.validate(70.0).is_err());
//! ```

use crate::{
    constants::limits::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT},
    errors::{ValidationError, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Humidity validator for relative humidity percentage
#[derive(Debug, Clone)]
pub struct HumidityValidator {
    /// Minimum valid RH%
    min_percent: f64,

    /// Maximum valid RH%
    max_percent: f64,
}

impl Default for HumidityValidator {
    fn default() -> Self {
        Self {
            min_percent: HUMIDITY_MIN_PCT,
            max_percent: HUMIDITY_MAX_PCT,
        }
    }
}

impl HumidityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_percent: min,
            max_percent: max,
        }
    }
}

impl Validator for HumidityValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_range(value, &self.constraints(), |value| {
            ValidationError::HumidityOutOfRange { value }
        })
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_percent,
            max_value: self.max_percent,
        }
    }
}
