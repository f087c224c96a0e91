//! # Field Validation
//!
//! Two checks exist: required fields must not be empty, and numeric fields
//! that hold a value must parse into `[0, 100]`. Each failure writes one
//! inline message into the field's error slot; passing (or re-validating)
//! clears it. A non-required numeric field with an empty or unparseable
//! value passes, absence of a value skips the range check.

use crate::form::field::{FieldKind, FieldSpec, FieldState};
use crate::form::score::MAX_SCORE;

/// Message shown under an empty required field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown under a numeric field whose value is out of range.
pub const RANGE_MESSAGE: &str = "Score must be between 0 and 100";

/// Validate every field of the form. Returns true only if all pass.
///
/// Side effect: each field's error slot is rewritten, so earlier errors
/// never linger past the pass that would have cleared them.
pub fn validate_form(specs: &[FieldSpec], states: &mut [FieldState]) -> bool {
    let mut valid = true;
    for (spec, state) in specs.iter().zip(states.iter_mut()) {
        if !validate_field(spec, state) {
            valid = false;
        }
    }
    valid
}

/// Validate a single field, writing or clearing its inline error.
pub fn validate_field(spec: &FieldSpec, state: &mut FieldState) -> bool {
    clear_error(state);

    if spec.required && state.is_empty() {
        state.error = Some(REQUIRED_MESSAGE.to_string());
        return false;
    }

    if spec.kind == FieldKind::Number {
        if let Ok(value) = state.value.trim().parse::<i64>() {
            if !(0..=MAX_SCORE).contains(&value) {
                state.error = Some(RANGE_MESSAGE.to_string());
                return false;
            }
        }
    }

    true
}

/// Remove a field's inline error. Safe to call when none is present.
pub fn clear_error(state: &mut FieldState) {
    state.error = None;
}
