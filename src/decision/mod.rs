//! Combined render decision for one caret pass.

use crate::mode::EditMode;
use crate::style::CaretStyle;

/// The two treatment flags the renderer selects between.
///
/// When both are false the renderer falls back to its default thin-line
/// caret. The type does not stop both flags being set; the constructors
/// never produce that combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretRenderDecision {
    /// Draw the filled block over the glyph cell.
    pub block: bool,
    /// Draw the underline beneath the glyph.
    pub underline: bool,
}

impl CaretRenderDecision {
    /// Neither treatment; the default thin-line caret.
    pub const DEFAULT: Self = Self {
        block: false,
        underline: false,
    };

    /// Decision for an explicit style preference.
    pub fn for_style(style: CaretStyle) -> Self {
        Self {
            block: style.renders_block(),
            underline: style.renders_underline(),
        }
    }

    /// Decision for the current edit mode.
    pub fn for_mode(mode: EditMode) -> Self {
        Self {
            block: mode.renders_block_caret(),
            underline: mode.renders_underline_caret(),
        }
    }

    /// True when neither special treatment applies.
    pub fn is_default(self) -> bool {
        !self.block && !self.underline
    }
}
