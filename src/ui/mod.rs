//! # UI Module
//!
//! Terminal user interface for the scorecard form.
//!
//! ## Components
//!
//! - [`App`] - application state (field buffers, focus, loading, reveal)
//! - [`mod@render`] - rendering functions for drawing the TUI
//! - [`reveal`] - the one-shot result reveal animation
//! - [`theme`] - built-in color themes
//! - [`config`] - persisted theme selection
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                    Header                        │
//! ├─────────────────────────────────────────────────┤
//! │                 Form Panel                       │
//! │   (labels, inputs, band badges, inline errors,   │
//! │    submit control)                               │
//! ├─────────────────────────────────────────────────┤
//! │               Result Card (optional)             │
//! │   (animated counter and progress bar)            │
//! ├─────────────────────────────────────────────────┤
//! │                    Footer                        │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Features
//!
//! - Focus-driven navigation between controls with Tab / arrows
//! - Live clamping and band badges on numeric inputs
//! - Inline validation errors that block submission
//! - One-shot reveal animation when a result is supplied

pub mod app;
pub mod config;
pub mod render;
pub mod reveal;
pub mod theme;

pub use app::App;
pub use render::render;
