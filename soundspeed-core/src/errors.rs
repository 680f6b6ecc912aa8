//! Error Types for Environment Validation
//!
//! ## Design Philosophy
//!
//! Out-of-range input is an expected condition for this calculator, not a
//! programming error. Validation failures are therefore reported as data inside
//! a [`SpeedReport`](crate::SpeedReport) and never abort the calculation.
//!
//! 1. **Small Size**: Each variant holds a single `f64`, the rejected value.
//!
//! 2. **No Heap Allocation**: Messages are static. Failures are collected into
//!    a fixed-capacity [`ValidationErrors`] list.
//!
//! 3. **Copy Semantics**: Errors implement Copy so reports can be copied freely.
//!
//! 4. **Stable Messages**: The `Display` text of each variant is fixed and is
//!    what callers show to users.
//!
//! ## Error Categories
//!
//! - `TemperatureOutOfRange`: Temperature outside 32-86°F, or not a number
//! - `HumidityOutOfRange`: Relative humidity outside 0-100%, or not a number
//!
//! There is no "missing input" error: unset settings fall back to defaults.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use soundspeed_core::{SpeedCalculator, ValidationError};
//!
//! let report = SpeedCalculator::create(Some(120.0), None).compute_speed();
//! for error in report.errors() {
//!     match error {
//!         ValidationError::TemperatureOutOfRange { value } => {
//!             // ask the user for a temperature between 32 and 86°F
//!             let _ = value;
//!         }
//!         ValidationError::HumidityOutOfRange { .. } => {
//!             // ask for a humidity between 0 and 100%
//!         }
//!     }
//! }
//! assert_eq!(report.speed_of_sound, 0);
//! ```

use thiserror_no_std::Error;

/// Result type for single-value validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Every validation failure found in one environment, in check order.
///
/// Capacity 2: at most one temperature and one humidity failure.
pub type ValidationErrors = heapless::Vec<ValidationError, 2>;

/// Validation errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Temperature outside the model range or not a finite number
    #[error("Temperature must be between 32-86°F (0-30°C)")]
    TemperatureOutOfRange {
        /// The rejected temperature (°F)
        value: f64,
    },

    /// Relative humidity outside 0-100% or not a finite number
    #[error("Relative humidity must be between 0 and 100%")]
    HumidityOutOfRange {
        /// The rejected relative humidity (%)
        value: f64,
    },
}

impl ValidationError {
    /// Human-readable message, identical to the `Display` output
    pub fn message(&self) -> &'static str {
        match self {
            Self::TemperatureOutOfRange { .. } => "Temperature must be between 32-86°F (0-30°C)",
            Self::HumidityOutOfRange { .. } => "Relative humidity must be between 0 and 100%",
        }
    }

    /// The value that failed validation
    pub fn value(&self) -> f64 {
        match self {
            Self::TemperatureOutOfRange { value } | Self::HumidityOutOfRange { value } => *value,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ValidationError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::TemperatureOutOfRange { value } =>
                defmt::write!(fmt, "Temperature {} outside [32, 86]F", value),
            Self::HumidityOutOfRange { value } =>
                defmt::write!(fmt, "Humidity {} outside [0, 100]%", value),
        }
    }
}
