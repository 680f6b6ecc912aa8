//! Physical Constants for the Speed-of-Sound Model
//!
//! This module defines the atmospheric and thermodynamic constants used by the
//! Cramer (1993) humid-air model, plus the envelope inside which that model was
//! fitted.

// ===== ATMOSPHERE =====

/// Standard atmospheric pressure (kPa).
///
/// The calculator always runs at this pressure; it is not user-configurable.
///
/// Source: International Standard Atmosphere (ISA)
pub const PRESSURE_KPA: f64 = 101.325;

/// Pressure as it enters the Cramer formulas (Pa).
///
/// Equal to `PRESSURE_KPA * 1000.0`. The enhancement factor, mole fraction
/// and correction terms are all evaluated with this value.
pub const PRESSURE_PA: f64 = PRESSURE_KPA * 1000.0;

// ===== THERMODYNAMICS =====

/// Offset from Celsius to absolute temperature (K).
///
/// `T(K) = T(°C) + 273.15`
///
/// Source: NIST Special Publication 330 (2019)
pub const KELVIN_OFFSET: f64 = 273.15;

// ===== GAS COMPOSITION =====

/// Mole fraction of carbon dioxide in air (dimensionless).
///
/// 400 ppm, held fixed. Cramer's correction terms need a CO₂ fraction even
/// though the calculator never measures one.
///
/// Source: NPL speed-of-sound calculator, R. Lord
pub const CO2_MOLE_FRACTION: f64 = 400.0e-6;

// ===== MODEL VALIDITY ENVELOPE =====

/// Lowest temperature the Cramer fit covers (°C).
///
/// Source: Cramer, J. Acoust. Soc. Am. 93, p2510 (1993)
pub const MODEL_TEMP_MIN_C: f64 = 0.0;

/// Highest temperature the Cramer fit covers (°C).
///
/// Source: Cramer, J. Acoust. Soc. Am. 93, p2510 (1993)
pub const MODEL_TEMP_MAX_C: f64 = 30.0;

/// Lowest pressure the Cramer fit covers (kPa).
///
/// Informational. The calculator runs at [`PRESSURE_KPA`], which sits inside.
pub const MODEL_PRESSURE_MIN_KPA: f64 = 75.0;

/// Highest pressure the Cramer fit covers (kPa).
pub const MODEL_PRESSURE_MAX_KPA: f64 = 102.0;
