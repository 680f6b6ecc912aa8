//! Speed of Sound in Humid Air (Cramer 1993)
//!
//! ## Physics Background
//!
//! Sound travels faster in warm air and, slightly, in moist air: water vapour
//! (18 g/mol) is lighter than the nitrogen/oxygen mix it displaces (≈29 g/mol).
//! Cramer fitted the zero-frequency speed of sound as a polynomial in
//! temperature, pressure and the mole fractions of water vapour and CO₂:
//!
//! ```text
//! c = C1 + C2 − C3
//!
//! C1 = a0 + a1·T + a2·T² + (a9 + a10·T + a11·T²)·Xw
//! C2 = (a3 + a4·T + a5·T²)·P + (a6 + a7·T + a8·T²)·Xc
//! C3 = a12·Xw² + a13·P² + a14·Xc² + a15·Xw·P·Xc
//!
//! Where:
//! - T  = temperature (°C)
//! - P  = pressure (Pa)
//! - Xw = water vapour mole fraction
//! - Xc = carbon dioxide mole fraction (fixed at 0.0004)
//! ```
//!
//! Source: O. Cramer, J. Acoust. Soc. Am. 93, p2510 (1993)
//!
//! ### From Relative Humidity to Mole Fraction
//!
//! The mole fraction of water vapour follows from relative humidity, the
//! saturation vapour pressure and the enhancement factor:
//!
//! ```text
//! f   = 1.00062 + 3.14e-8·P + 5.6e-7·T²                       (enhancement)
//! psv = exp(1.2378847e-5·K² − 1.9121316e-2·K
//!           + 33.93711047 − 6.3431645e3 / K)                   (Davis 1992)
//! Xw  = Rh · f · psv / P / 100
//!
//! Where K = T + 273.15
//! ```
//!
//! Source: R. S. Davis, Metrologia 29, p67 (1992)
//!
//! ## Validity
//!
//! 0-30°C and 75-102 kPa. The functions here do not check their inputs; the
//! calculator validates the environment before calling in.
//!
//! ## Why libm?
//!
//! `libm::exp` and `libm::round` give the same bits on every target, with or
//! without `std`, so a reported speed is reproducible across hosts.
//!
//! ## Display Scaling
//!
//! The calculator does not report `c` directly. It rounds to centimetres per
//! second and reports that as an integer (see [`display_speed`]).

use crate::{constants::physics::CO2_MOLE_FRACTION, units::celsius_to_kelvin};

/// Moist-air state derived from temperature, humidity and pressure
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    /// Temperature (°C)
    pub temperature_c: f64,

    /// Pressure (Pa)
    pub pressure: f64,

    /// Enhancement factor (dimensionless)
    pub enhancement_factor: f64,

    /// Saturation vapour pressure (Pa)
    pub saturation_vapor_pressure: f64,

    /// Water vapour mole fraction (dimensionless)
    pub water_mole_fraction: f64,

    /// Carbon dioxide mole fraction (dimensionless)
    pub co2_mole_fraction: f64,
}

impl MoistAir {
    /// Derive the moist-air state at `temperature_c` (°C), `humidity` (% RH)
    /// and `pressure` (Pa)
    pub fn at(temperature_c: f64, humidity: f64, pressure: f64) -> Self {
        let enhancement_factor = enhancement_factor(temperature_c, pressure);
        let saturation_vapor_pressure = saturation_vapor_pressure(temperature_c);
        let water_mole_fraction = water_mole_fraction(
            humidity,
            enhancement_factor,
            saturation_vapor_pressure,
            pressure,
        );

        Self {
            temperature_c,
            pressure,
            enhancement_factor,
            saturation_vapor_pressure,
            water_mole_fraction,
            co2_mole_fraction: CO2_MOLE_FRACTION,
        }
    }

    /// Zero-frequency speed of sound for this state (m/s)
    pub fn speed_of_sound(&self) -> f64 {
        let t = self.temperature_c;
        let p = self.pressure;
        let xw = self.water_mole_fraction;
        let xc = self.co2_mole_fraction;
        let t2 = t * t;

        let c1 = 0.603055 * t + 331.5024 - t2 * 5.28e-4
            + (0.1495874 * t + 51.471935 - t2 * 7.82e-4) * xw;

        let c2 = (-1.82e-7 + 3.73e-8 * t - t2 * 2.93e-10) * p
            + (-85.20931 - 0.228525 * t + t2 * 5.91e-5) * xc;

        let c3 = xw * xw * 2.835149 + p * p * 2.15e-13
            - xc * xc * 29.179762
            - 4.86e-4 * xw * p * xc;

        log_debug!("cramer terms: c1={} c2={} c3={}", c1, c2, c3);

        c1 + c2 - c3
    }
}

/// Enhancement factor of moist air at `temperature_c` (°C) and `pressure` (Pa)
pub fn enhancement_factor(temperature_c: f64, pressure: f64) -> f64 {
    3.14e-8 * pressure + 1.00062 + temperature_c * temperature_c * 5.6e-7
}

/// Saturation vapour pressure of water over a flat surface (Pa)
///
/// Evaluated as the product of two exponentials, one per group of terms.
pub fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    let kelvin = celsius_to_kelvin(temperature_c);

    let psv1 = kelvin * kelvin * 1.2378847e-5 - 1.9121316e-2 * kelvin;
    let psv2 = 33.93711047 - 6.3431645e3 / kelvin;

    libm::exp(psv1) * libm::exp(psv2)
}

/// Water vapour mole fraction from relative humidity (%)
pub fn water_mole_fraction(
    humidity: f64,
    enhancement_factor: f64,
    saturation_vapor_pressure: f64,
    pressure: f64,
) -> f64 {
    let h = humidity * enhancement_factor * saturation_vapor_pressure / pressure;
    h / 100.0
}

/// Unrounded speed of sound (m/s) at `temperature_c` (°C), `humidity` (% RH)
/// and `pressure` (Pa)
pub fn speed_of_sound(temperature_c: f64, humidity: f64, pressure: f64) -> f64 {
    MoistAir::at(temperature_c, humidity, pressure).speed_of_sound()
}

/// Scale a speed in m/s to the reported integer.
///
/// Rounds to two decimals, then scales by 100 and rounds again:
/// `round(round(c × 100) / 100 × 100)`. Halves round away from zero.
/// 343.9869 m/s reports as 34399.
pub fn display_speed(speed: f64) -> u32 {
    let hundredths = libm::round(speed * 100.0) / 100.0;
    libm::round(hundredths * 100.0) as u32
}
