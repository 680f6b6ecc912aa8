//! Core traits for validators
//!
//! These traits define the interface the environment validators implement.
//! Keep them simple - a validator looks at one number and nothing else.

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each environment input
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single value
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the accepted range for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Accepted range for a validator, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value
    pub min_value: f64,

    /// Maximum valid value
    pub max_value: f64,
}

impl ValidatorConstraints {
    /// Whether `value` lies inside the range
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
