//! Scorecard TUI - a terminal form for prediction-model inputs
//!
//! This library provides the form model (field definitions, validation,
//! input clamping, score banding) and the terminal user interface
//! (application state, result reveal animation, rendering, themes).

pub mod form;
pub mod ui;
