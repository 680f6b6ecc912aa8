//! Environment Sweep Example
//!
//! Tabulates the reported speed across the whole accepted envelope, reusing
//! one calculator and updating it with `set_environment`.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_environment_sweep
//! ```

use soundspeed_core::{Environment, SpeedCalculator};

const TEMPERATURES_C: [f64; 7] = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0];
const HUMIDITIES: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

fn main() {
    println!("Speed of Sound Table (cm/s)");
    println!("===========================\n");

    print!("{:>8}", "T \\ RH");
    for humidity in HUMIDITIES {
        print!("{:>8}", format!("{}%", humidity));
    }
    println!();

    for celsius in TEMPERATURES_C {
        let fahrenheit = SpeedCalculator::to_fahrenheit(celsius);
        print!("{:>7}C", celsius);

        for humidity in HUMIDITIES {
            // Build the environment directly so 0°C and 0% are not replaced
            // by defaults
            let report = SpeedCalculator::from_environment(Environment::new(fahrenheit, humidity))
                .compute_speed();
            print!("{:>8}", report.speed_of_sound);
        }
        println!();
    }

    println!("\nUpdating one calculator in place:");
    let mut calculator = SpeedCalculator::create(None, None);
    for fahrenheit in [40.0, 60.0, 80.0] {
        calculator.set_environment(Some(fahrenheit), None);
        let report = calculator.compute_speed();
        println!("  {}°F, {}% -> {}", report.temperature, report.humidity, report.speed_of_sound);
    }
}
