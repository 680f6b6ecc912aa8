//! Ambient conditions fed to the calculator
//!
//! An [`Environment`] holds temperature (°F), relative humidity (%) and
//! pressure (Pa). Pressure is always [`PRESSURE_PA`].
//!
//! ## Unset settings
//!
//! The calculator's constructor and `set_environment` take `Option<f64>`.
//! `None` means "not supplied". An explicit `Some(0.0)` is treated the same
//! way: zero is never stored through those entry points, and the previous (or
//! default) value is kept instead. That means 0% humidity cannot be requested
//! through [`SpeedCalculator::create`](crate::SpeedCalculator::create); build
//! the environment with [`Environment::new`], which stores values as given.

use crate::constants::{
    defaults::{DEFAULT_HUMIDITY_PCT, DEFAULT_TEMPERATURE_F},
    physics::PRESSURE_PA,
};

/// Temperature, humidity and pressure for one calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    temperature: f64,
    humidity: f64,
    pressure: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPERATURE_F, DEFAULT_HUMIDITY_PCT)
    }
}

impl Environment {
    /// Environment with exactly these values, at standard pressure.
    ///
    /// No substitution happens here: `Environment::new(68.0, 0.0)` is bone
    /// dry air.
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure: PRESSURE_PA,
        }
    }

    /// Apply optional settings on top of this environment.
    ///
    /// Unset and zero settings keep the current value. Pressure is reset to
    /// [`PRESSURE_PA`] either way.
    pub fn apply(&mut self, temperature: Option<f64>, humidity: Option<f64>) {
        self.pressure = PRESSURE_PA;
        self.temperature = resolve("temperature", temperature, self.temperature);
        self.humidity = resolve("humidity", humidity, self.humidity);
    }

    /// Air temperature (°F)
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Relative humidity (%)
    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    /// Atmospheric pressure as used by the model (Pa)
    pub fn pressure(&self) -> f64 {
        self.pressure
    }
}

/// Pick the stored value for one setting.
///
/// `None` and `Some(0.0)` both fall back to `current`.
fn resolve(name: &str, value: Option<f64>, current: f64) -> f64 {
    match value {
        Some(value) if value != 0.0 => value,
        Some(_) => {
            log_debug!("explicit zero {} treated as unset, keeping {}", name, current);
            current
        }
        None => current,
    }
}
