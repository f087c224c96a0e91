use crate::form::{
    clamp_input, clear_error, validate_field, validate_form, FieldKind, FieldState, FormSpec,
    ScoreBand,
};
use crate::ui::reveal::Reveal;
use crate::ui::theme::Theme;
use serde_json::{Map, Value};
use std::time::Instant;

/// Which control currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(usize),
    Submit,
}

/// Application state: the form definition, what has been typed into it,
/// focus, the one-way loading flag, and the optional result reveal.
pub struct App {
    pub spec: FormSpec,
    pub fields: Vec<FieldState>,
    pub focus: Focus,
    /// Set once on a valid submission, never cleared; the app exits while
    /// it is set and the payload is handed to the caller.
    pub loading: bool,
    pub loading_since: Option<Instant>,
    pub reveal: Option<Reveal>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(spec: FormSpec, reveal: Option<Reveal>, theme: Theme) -> Self {
        let fields = vec![FieldState::default(); spec.fields.len()];
        let focus = if spec.fields.is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };
        Self {
            spec,
            fields,
            focus,
            loading: false,
            loading_since: None,
            reveal,
            theme,
            should_quit: false,
        }
    }

    /// Index of the focused field, if a field (not the submit control) has
    /// focus.
    pub fn focused_field(&self) -> Option<usize> {
        match self.focus {
            Focus::Field(i) => Some(i),
            Focus::Submit => None,
        }
    }

    /// Move focus to the next control, validating the field being left.
    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focus = match self.focus {
            Focus::Field(i) if i + 1 < self.fields.len() => Focus::Field(i + 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit => {
                if self.fields.is_empty() {
                    Focus::Submit
                } else {
                    Focus::Field(0)
                }
            }
        };
    }

    /// Move focus to the previous control, validating the field being left.
    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focus = match self.focus {
            Focus::Field(i) if i > 0 => Focus::Field(i - 1),
            Focus::Field(_) => Focus::Submit,
            Focus::Submit if self.fields.is_empty() => Focus::Submit,
            Focus::Submit => Focus::Field(self.fields.len() - 1),
        };
    }

    // Blur handler: the field loses its highlight (focus is a single index,
    // so a stale highlight cannot survive a refocus) and gets validated.
    fn blur_current(&mut self) {
        if let Focus::Field(i) = self.focus {
            validate_field(&self.spec.fields[i], &mut self.fields[i]);
        }
    }

    /// Route a typed character to the focused control. Returns true when the
    /// character was consumed as input.
    pub fn handle_input(&mut self, c: char) -> bool {
        let Some(i) = self.focused_field() else {
            return false;
        };
        match self.spec.fields[i].kind {
            FieldKind::Number => {
                let accepts = c.is_ascii_digit() || (c == '-' && self.fields[i].value.is_empty());
                if accepts {
                    self.fields[i].value.push(c);
                    self.on_edit(i);
                }
                accepts
            }
            FieldKind::Select => {
                if c == ' ' {
                    self.cycle_option(1);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(i) = self.focused_field() {
            if self.spec.fields[i].kind == FieldKind::Number {
                self.fields[i].value.pop();
                self.on_edit(i);
            }
        }
    }

    /// Step the focused select through its options.
    pub fn cycle_option(&mut self, step: i64) {
        let Some(i) = self.focused_field() else {
            return;
        };
        let spec = &self.spec.fields[i];
        if spec.kind != FieldKind::Select || spec.options.is_empty() {
            return;
        }
        let len = spec.options.len() as i64;
        let current = spec
            .options
            .iter()
            .position(|o| *o == self.fields[i].value);
        let next = match current {
            Some(pos) => (pos as i64 + step).rem_euclid(len) as usize,
            None if step >= 0 => 0,
            None => (len - 1) as usize,
        };
        self.fields[i].value = spec.options[next].clone();
        clear_error(&mut self.fields[i]);
    }

    // Input handler: clear the inline error, clamp numeric buffers into
    // range, then recompute the band badge from the clamped value.
    fn on_edit(&mut self, i: usize) {
        clear_error(&mut self.fields[i]);
        if self.spec.fields[i].kind == FieldKind::Number {
            clamp_input(&mut self.fields[i].value);
            self.fields[i].band = ScoreBand::from_input(&self.fields[i].value);
        }
    }

    /// Gatekeep submission: validate everything, and only on success flip
    /// the loading flag. Returns whether the submission was accepted.
    pub fn submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        if !validate_form(&self.spec.fields, &mut self.fields) {
            return false;
        }
        self.loading = true;
        self.loading_since = Some(Instant::now());
        true
    }

    /// The submitted values, keyed by field id.
    pub fn submission_payload(&self) -> Map<String, Value> {
        self.spec
            .fields
            .iter()
            .zip(self.fields.iter())
            .map(|(spec, state)| (spec.id.clone(), Value::String(state.value.clone())))
            .collect()
    }

    /// True while the result reveal still has frames to show.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.reveal.as_ref().is_some_and(|r| !r.is_settled(now))
    }
}
