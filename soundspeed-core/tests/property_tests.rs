//! Property tests over the accepted envelope and outside it

use proptest::prelude::*;

use soundspeed_core::{
    constants::limits::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, TEMPERATURE_MAX_F, TEMPERATURE_MIN_F},
    cramer, units, Environment, SpeedCalculator, ValidationError,
};

fn report_for(temperature: f64, humidity: f64) -> soundspeed_core::SpeedReport {
    SpeedCalculator::from_environment(Environment::new(temperature, humidity)).compute_speed()
}

proptest! {
    #[test]
    fn valid_inputs_give_positive_reproducible_speed(
        temperature in TEMPERATURE_MIN_F..=TEMPERATURE_MAX_F,
        humidity in HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT,
    ) {
        let first = report_for(temperature, humidity);
        let second = report_for(temperature, humidity);

        prop_assert!(first.is_valid());
        prop_assert!(first.speed_of_sound > 0);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn speeds_stay_near_physical_values(
        temperature in TEMPERATURE_MIN_F..=TEMPERATURE_MAX_F,
        humidity in HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT,
    ) {
        let speed = report_for(temperature, humidity).speed_of_sound;

        // 331-352 m/s across 0-30°C, reported in hundredths
        prop_assert!((33100..=35200).contains(&speed), "speed = {}", speed);
    }

    #[test]
    fn cold_temperatures_rejected(temperature in -100.0f64..TEMPERATURE_MIN_F) {
        let report = report_for(temperature, 50.0);

        prop_assert_eq!(report.speed_of_sound, 0);
        prop_assert_eq!(
            report.errors(),
            &[ValidationError::TemperatureOutOfRange { value: temperature }]
        );
    }

    #[test]
    fn hot_temperatures_rejected(temperature in (TEMPERATURE_MAX_F + 1e-9)..200.0f64) {
        let report = report_for(temperature, 50.0);

        prop_assert_eq!(report.speed_of_sound, 0);
        prop_assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn humidity_outside_range_rejected(
        humidity in prop_oneof![-100.0f64..HUMIDITY_MIN_PCT, (HUMIDITY_MAX_PCT + 1e-9)..300.0f64],
    ) {
        let report = report_for(68.0, humidity);

        prop_assert_eq!(report.speed_of_sound, 0);
        prop_assert_eq!(
            report.errors(),
            &[ValidationError::HumidityOutOfRange { value: humidity }]
        );
    }

    #[test]
    fn both_out_of_range_gives_two_errors(
        temperature in 90.0f64..200.0,
        humidity in 101.0f64..300.0,
    ) {
        let report = report_for(temperature, humidity);

        prop_assert_eq!(report.speed_of_sound, 0);
        prop_assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn speed_increases_with_temperature(
        temperature in TEMPERATURE_MIN_F..(TEMPERATURE_MAX_F - 1.0),
        humidity in HUMIDITY_MIN_PCT..=HUMIDITY_MAX_PCT,
    ) {
        let t = units::to_celsius(temperature);
        let p = soundspeed_core::constants::PRESSURE_PA;

        prop_assert!(
            cramer::speed_of_sound(t + 0.5, humidity, p) > cramer::speed_of_sound(t, humidity, p)
        );
    }

    #[test]
    fn fahrenheit_round_trip(celsius in -50.0f64..50.0) {
        let back = units::to_celsius(units::to_fahrenheit(celsius));
        prop_assert!((back - celsius).abs() < 1e-9);
    }
}
