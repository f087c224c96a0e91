//! # Field Definitions
//!
//! A form is described by a [`FormSpec`]: an ordered list of [`FieldSpec`]s,
//! each either a numeric score input or a select with a fixed option list.
//!
//! The built-in form mirrors the prediction page this tool fronts; a custom
//! form can be loaded from a JSON file:
//!
//! ```json
//! {
//!   "title": "Exam Score Prediction",
//!   "fields": [
//!     { "id": "subject", "label": "Subject", "kind": "select",
//!       "required": true, "options": ["Math", "Science"] },
//!     { "id": "attendance", "label": "Attendance (%)", "kind": "number",
//!       "required": true }
//!   ]
//! }
//! ```
//!
//! What the user has entered lives separately in [`FieldState`], one per
//! field, so the spec stays immutable while the session runs.

use crate::form::score::ScoreBand;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A numeric score input, clamped to 0-100 while typing.
    Number,
    /// A select cycling through a fixed list of options.
    Select,
}

/// Definition of a single form control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    /// Stable identifier, used as the key in the submission payload.
    pub id: String,
    /// Label shown above the control.
    pub label: String,
    pub kind: FieldKind,
    /// Required fields fail validation when left empty.
    #[serde(default)]
    pub required: bool,
    /// Choices for select fields. Ignored for number fields.
    #[serde(default)]
    pub options: Vec<String>,
}

/// An ordered form definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSpec {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    /// The built-in score-entry form.
    pub fn built_in() -> Self {
        Self {
            title: "Exam Score Prediction".to_string(),
            fields: vec![
                FieldSpec {
                    id: "subject".to_string(),
                    label: "Subject".to_string(),
                    kind: FieldKind::Select,
                    required: true,
                    options: vec![
                        "Mathematics".to_string(),
                        "Science".to_string(),
                        "English".to_string(),
                        "History".to_string(),
                    ],
                },
                FieldSpec {
                    id: "attendance".to_string(),
                    label: "Attendance Rate (%)".to_string(),
                    kind: FieldKind::Number,
                    required: true,
                    options: Vec::new(),
                },
                FieldSpec {
                    id: "midterm".to_string(),
                    label: "Midterm Score".to_string(),
                    kind: FieldKind::Number,
                    required: true,
                    options: Vec::new(),
                },
                FieldSpec {
                    id: "quiz_avg".to_string(),
                    label: "Quiz Average (optional)".to_string(),
                    kind: FieldKind::Number,
                    required: false,
                    options: Vec::new(),
                },
            ],
        }
    }

    /// Load a form definition from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file: {}", path.display()))?;
        let spec: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse form file: {}", path.display()))?;
        Ok(spec)
    }
}

/// Transient, session-scoped state of one form control.
///
/// The two `Option`s carry the invariant that at most one error message and
/// at most one band indicator exist per field: setting either replaces the
/// previous one wholesale.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    /// The raw text buffer (for selects, the chosen option or empty).
    pub value: String,
    /// Inline validation error shown under the control.
    pub error: Option<String>,
    /// Band badge shown next to a numeric value, recomputed on every edit.
    pub band: Option<ScoreBand>,
}

impl FieldState {
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }
}
