//! Error Handling Example
//!
//! Out-of-range input never aborts the calculation. The report carries every
//! validation failure and a zero speed instead.
//!
//! ## What You'll Learn
//!
//! - Reading validation failures from a report
//! - Matching on error variants
//! - The zero-means-unset behaviour of `create`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_error_handling
//! ```

use soundspeed_core::{SpeedCalculator, ValidationError};

fn main() {
    println!("Speed of Sound - Error Handling");
    println!("==============================\n");

    let inputs = [
        (Some(68.0), Some(50.0)),
        (Some(95.0), Some(50.0)),
        (Some(68.0), Some(120.0)),
        (Some(-4.0), Some(-10.0)),
        (Some(0.0), Some(0.0)),
    ];

    for (temperature, humidity) in inputs {
        let report = SpeedCalculator::create(temperature, humidity).compute_speed();
        println!(
            "create({:?}, {:?}) -> ran at {}°F / {}%",
            temperature, humidity, report.temperature, report.humidity
        );

        if report.is_valid() {
            println!("  ✓ speed {}", report.speed_of_sound);
            continue;
        }

        println!("  ✗ speed {}", report.speed_of_sound);
        for error in report.errors() {
            match error {
                ValidationError::TemperatureOutOfRange { value } => {
                    println!("    {} (got {}°F)", error, value);
                }
                ValidationError::HumidityOutOfRange { value } => {
                    println!("    {} (got {}%)", error, value);
                }
            }
        }
    }
}
