//! Shared validation helpers
//!
//! Pure functions used by every validator so range checks behave the same for
//! temperature and humidity.
//!
//! ### Range Validation
//! ```text
//! min <= value <= max   -> Ok
//! otherwise             -> caller-supplied error
//! NaN / ±inf            -> caller-supplied error
//! ```

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidatorConstraints},
};

/// Check that `value` is a finite number inside `constraints`.
///
/// `reject` builds the error for the offending value, so each validator keeps
/// its own error variant.
pub fn check_range(
    value: f64,
    constraints: &ValidatorConstraints,
    reject: fn(f64) -> ValidationError,
) -> ValidationResult<()> {
    if !value.is_valid() || !constraints.contains(value) {
        Err(reject(value))
    } else {
        Ok(())
    }
}
