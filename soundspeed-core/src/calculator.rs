//! Speed-of-sound calculator
//!
//! [`SpeedCalculator`] owns an [`Environment`], validates it and evaluates the
//! Cramer model. Each call to [`SpeedCalculator::compute_speed`] produces one
//! [`SpeedReport`]; nothing is cached between calls.
//!
//! ```rust
//! use soundspeed_core::SpeedCalculator;
//!
//! let mut calculator = SpeedCalculator::create(None, None);
//! assert_eq!(calculator.compute_speed().speed_of_sound, 34399);
//!
//! calculator.set_environment(Some(50.0), Some(80.0));
//! let report = calculator.compute_speed();
//! assert!(report.is_valid());
//! ```

use crate::{
    cramer::{self, MoistAir},
    environment::Environment,
    errors::{ValidationError, ValidationErrors},
    units,
    validators::validate_environment,
};

/// Outcome of one calculation
///
/// Either `errors` is empty and `speed_of_sound` holds the scaled speed, or
/// `errors` lists every failed check and `speed_of_sound` is 0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SpeedReport {
    /// Temperature the calculation ran with (°F)
    pub temperature: f64,

    /// Relative humidity the calculation ran with (%)
    pub humidity: f64,

    /// Speed of sound in hundredths of a metre per second, 0 when rejected
    pub speed_of_sound: u32,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "no_errors"))]
    errors: ValidationErrors,
}

#[cfg(feature = "serde")]
fn no_errors(errors: &ValidationErrors) -> bool {
    errors.is_empty()
}

impl SpeedReport {
    /// Whether the environment passed validation
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validation failures, in check order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Validation failures as user-facing messages
    pub fn messages(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(ValidationError::message)
    }
}

/// Calculator holding the environment to evaluate
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpeedCalculator {
    environment: Environment,
}

impl SpeedCalculator {
    /// Calculator at standard pressure with the given settings.
    ///
    /// Unset settings fall back to 68°F and 50%. So does an explicit zero:
    /// `create(Some(0.0), None)` runs at 68°F, not 0°F. Use
    /// [`SpeedCalculator::from_environment`] to pass zero through.
    pub fn create(temperature: Option<f64>, humidity: Option<f64>) -> Self {
        let mut calculator = Self::default();
        calculator.set_environment(temperature, humidity);
        calculator
    }

    /// Calculator for an environment built directly
    pub fn from_environment(environment: Environment) -> Self {
        Self { environment }
    }

    /// Update the settings.
    ///
    /// Unset and zero settings keep their current value. Pressure is reset to
    /// standard pressure.
    pub fn set_environment(&mut self, temperature: Option<f64>, humidity: Option<f64>) {
        self.environment.apply(temperature, humidity);
    }

    /// Current environment
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Check the environment without computing anything
    pub fn validate(&self) -> ValidationErrors {
        validate_environment(&self.environment)
    }

    /// Validate the environment and, if it passes, compute the speed of sound
    pub fn compute_speed(&self) -> SpeedReport {
        compute_speed(&self.environment)
    }

    /// Convert Celsius to Fahrenheit, e.g. to feed a Celsius reading to
    /// [`SpeedCalculator::create`]
    pub fn to_fahrenheit(celsius: f64) -> f64 {
        units::to_fahrenheit(celsius)
    }
}

/// Validate `environment` and compute the speed of sound in it
pub fn compute_speed(environment: &Environment) -> SpeedReport {
    let temperature = environment.temperature();
    let humidity = environment.humidity();
    let errors = validate_environment(environment);

    if !errors.is_empty() {
        log_warn!(
            "rejected environment T={}F RH={}%: {} validation error(s)",
            temperature, humidity, errors.len()
        );
        return SpeedReport {
            temperature,
            humidity,
            speed_of_sound: 0,
            errors,
        };
    }

    let air = MoistAir::at(units::to_celsius(temperature), humidity, environment.pressure());
    let speed = air.speed_of_sound();

    log_debug!("speed of sound at T={}F RH={}%: {} m/s", temperature, humidity, speed);

    SpeedReport {
        temperature,
        humidity,
        speed_of_sound: cramer::display_speed(speed),
        errors,
    }
}
