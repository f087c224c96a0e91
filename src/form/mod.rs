//! # Form Module
//!
//! The form model: what fields exist, what the user has typed into them,
//! and whether those values are acceptable.
//!
//! ## Components
//!
//! - [`field`] - field definitions ([`FormSpec`], [`FieldSpec`]) and the
//!   per-field transient state ([`FieldState`])
//! - [`validate`] - required/range validation with inline error messages
//! - [`score`] - the 0-100 input clamp and the qualitative score bands
//!
//! Everything here is pure state manipulation; rendering and event wiring
//! live in [`crate::ui`].

pub mod field;
pub mod score;
pub mod validate;

pub use field::{FieldKind, FieldSpec, FieldState, FormSpec};
pub use score::{clamp_input, ScoreBand, MAX_SCORE};
pub use validate::{
    clear_error, validate_field, validate_form, RANGE_MESSAGE, REQUIRED_MESSAGE,
};
