//! Default Environment Example
//!
//! The simplest use: compute the speed of sound at room conditions.
//!
//! ## What You'll Learn
//!
//! - Creating a calculator with default settings
//! - Reading the scaled integer speed
//! - Inspecting the moist-air state behind it
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_default_environment
//! ```

use soundspeed_core::{cramer::MoistAir, units, SpeedCalculator};

fn main() {
    println!("Speed of Sound - Default Environment");
    println!("====================================\n");

    let calculator = SpeedCalculator::create(None, None);
    let env = calculator.environment();

    println!("Environment:");
    println!("  Temperature: {}°F ({:.2}°C)", env.temperature(), units::to_celsius(env.temperature()));
    println!("  Humidity:    {}%", env.humidity());
    println!("  Pressure:    {} Pa", env.pressure());
    println!();

    let report = calculator.compute_speed();
    println!("Reported speed: {} (cm/s)", report.speed_of_sound);
    println!("              = {:.2} m/s", report.speed_of_sound as f64 / 100.0);
    println!();

    let air = MoistAir::at(units::to_celsius(env.temperature()), env.humidity(), env.pressure());
    println!("Moist-air state:");
    println!("  Enhancement factor:        {:.6}", air.enhancement_factor);
    println!("  Saturation vapour pressure: {:.1} Pa", air.saturation_vapor_pressure);
    println!("  Water vapour mole fraction: {:.6}", air.water_mole_fraction);
    println!("  Unrounded speed:            {:.4} m/s", air.speed_of_sound());
}
