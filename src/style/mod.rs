//! Explicit caret style preference and its render policy.
//!
//! The preference system stores the caret style as an integer and hands it
//! to the render path through a change callback, so the integer-keyed
//! predicates here are the entry points that path calls. [`CaretStyle`] is
//! the typed form; [`CaretStyle::from_raw`] is the only place the untyped
//! integer crosses into it.

use log::error;

use crate::error::InvalidRawValue;

/// User-chosen caret appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaretStyle {
    /// Filled rectangle covering the whole glyph cell ("fat caret").
    #[default]
    Block,
    /// Line beneath the glyph.
    Underline,
    /// Thin vertical line between glyphs.
    Line,
}

impl CaretStyle {
    /// Convert the integer-backed preference value to a typed style.
    pub fn from_raw(raw: u32) -> Result<Self, InvalidRawValue> {
        match raw {
            0 => Ok(Self::Block),
            1 => Ok(Self::Underline),
            2 => Ok(Self::Line),
            _ => Err(InvalidRawValue {
                enumeration: "CaretStyle",
                value: raw,
            }),
        }
    }

    /// The integer-backed value for this style.
    pub fn raw(self) -> u32 {
        match self {
            Self::Block => 0,
            Self::Underline => 1,
            Self::Line => 2,
        }
    }

    /// Whether this style draws a block over the entirety of the selected
    /// char.
    ///
    /// e.g. with the caret on `b` in `foo bar` -> `foo █ar`
    pub fn renders_block(self) -> bool {
        match self {
            Self::Block => true,
            Self::Underline | Self::Line => false,
        }
    }

    /// Whether this style draws an underscore beneath the selected char.
    ///
    /// `Line` renders neither treatment; the caller keeps its default
    /// thin-line caret.
    pub fn renders_underline(self) -> bool {
        match self {
            Self::Underline => true,
            Self::Block | Self::Line => false,
        }
    }
}

/// Integer-keyed form of [`CaretStyle::renders_block`].
///
/// The preference callback only sees the integer, so the range check happens
/// here. An out-of-range value is a defect upstream: it is logged and
/// renders neither treatment.
pub fn should_render_block_caret(raw: u32) -> bool {
    match CaretStyle::from_raw(raw) {
        Ok(style) => style.renders_block(),
        Err(err) => {
            error!("{err}; rendering the default caret");
            false
        }
    }
}

/// Integer-keyed form of [`CaretStyle::renders_underline`].
pub fn should_render_underline_caret(raw: u32) -> bool {
    match CaretStyle::from_raw(raw) {
        Ok(style) => style.renders_underline(),
        Err(err) => {
            error!("{err}; rendering the default caret");
            false
        }
    }
}

#[cfg(test)]
mod tests;
