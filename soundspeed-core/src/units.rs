//! Temperature unit conversions
//!
//! The calculator accepts Fahrenheit and evaluates the Cramer model in
//! Celsius (and Kelvin for the vapour-pressure term). These helpers are pure
//! and independent of any calculator state.

use crate::constants::physics::KELVIN_OFFSET;

/// Convert Celsius to Fahrenheit: `C × 9/5 + 32`
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * (9.0 / 5.0) + 32.0
}

/// Convert Fahrenheit to Celsius: `(F − 32) × 5/9`
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

/// Convert Celsius to absolute temperature in Kelvin
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_fixed_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn celsius_fixed_points() {
        assert_eq!(to_celsius(32.0), 0.0);
        assert!((to_celsius(212.0) - 100.0).abs() < 1e-12);
        assert!((to_celsius(68.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn conversions_invert() {
        for c in [-10.0, 0.0, 12.5, 20.0, 30.0] {
            assert!((to_celsius(to_fahrenheit(c)) - c).abs() < 1e-9);
        }
    }

    #[test]
    fn kelvin_offset() {
        assert_eq!(celsius_to_kelvin(0.0), 273.15);
        assert!((celsius_to_kelvin(-273.15)).abs() < 1e-12);
    }
}
