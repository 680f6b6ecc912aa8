//! Speed of sound in humid air
//!
//! Computes the zero-frequency speed of sound from air temperature, relative
//! humidity and atmospheric pressure using the Cramer (1993) model, with
//! saturation vapour pressure from Davis (1992).
//!
//! Key constraints:
//! - Valid for 0-30°C (32-86°F) and 0-100% relative humidity
//! - Pressure fixed at 101.325 kPa
//! - Out-of-range input is reported in the result, never panics
//! - No heap allocation, `no_std` without the `std` feature
//!
//! ```no_run
//! use soundspeed_core::SpeedCalculator;
//!
//! let calculator = SpeedCalculator::create(Some(72.0), Some(40.0));
//! let report = calculator.compute_speed();
//!
//! if report.is_valid() {
//!     // hundredths of a metre per second
//!     let _speed = report.speed_of_sound;
//! } else {
//!     for _message in report.messages() {}
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calculator;
pub mod constants;
pub mod cramer;
pub mod environment;
pub mod errors;
pub mod traits;
pub mod units;
pub mod validators;

// Public API
pub use calculator::{SpeedCalculator, SpeedReport};
pub use environment::Environment;
pub use errors::{ValidationError, ValidationErrors, ValidationResult};
pub use traits::{Validator, ValidatorConstraints};
pub use units::to_fahrenheit;
pub use validators::{TemperatureValidator, HumidityValidator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
