//! Serialized report shape

#![cfg(feature = "serde")]

mod common;

use serde_json::json;
use soundspeed_core::SpeedCalculator;

use common::{DEFAULT_SPEED, HUMIDITY_MESSAGE, TEMPERATURE_MESSAGE};

#[test]
fn test_valid_report_omits_errors() {
    let report = SpeedCalculator::create(None, None).compute_speed();
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(
        value,
        json!({
            "temperature": 68.0,
            "humidity": 50.0,
            "speedOfSound": DEFAULT_SPEED,
        })
    );
}

#[test]
fn test_rejected_report_lists_messages() {
    let report = SpeedCalculator::create(Some(100.0), Some(-1.0)).compute_speed();
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(
        value,
        json!({
            "temperature": 100.0,
            "humidity": -1.0,
            "speedOfSound": 0,
            "errors": [TEMPERATURE_MESSAGE, HUMIDITY_MESSAGE],
        })
    );
}
