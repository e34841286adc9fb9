//! Caret rendering policy for modal text editing.
//!
//! This crate decides which of two mutually exclusive caret treatments a
//! render pass should draw: a filled block over the whole glyph cell, or an
//! underline beneath it. One resolver is keyed by the user's explicit style
//! preference ([`CaretStyle`]), one by the current edit mode ([`EditMode`]).
//! When both answers are false the caller falls back to its default
//! thin-line caret. It contains no drawing, cursor-position, or
//! mode-transition code.

#![deny(unsafe_code)]

pub mod config;
pub mod decision;
pub mod error;
pub mod mode;
pub mod style;

pub use config::{CaretConfig, Config, parse_caret_style};
pub use decision::CaretRenderDecision;
pub use error::InvalidRawValue;
pub use mode::EditMode;
pub use style::CaretStyle;
