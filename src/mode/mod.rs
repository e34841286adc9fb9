//! Edit mode snapshot and its caret render policy.
//!
//! The mode state machine owns all transitions; this module receives a
//! snapshot of the current mode once per render pass and answers which
//! caret treatment that mode wants. Nothing is cached between passes.

use std::fmt;

use log::error;

use crate::error::InvalidRawValue;

/// Interaction mode of the editor at the moment of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    #[default]
    Normal,
    /// Text insertion.
    Insert,
    /// Character or line selection.
    Visual,
    /// Awaiting the target of a pending operator.
    OperatorPending,
    /// All key handling suspended; the page sees every key.
    Ignore,
    /// Hint labels are displayed over interactive elements.
    Hint,
    /// Command-line entry.
    Command,
    /// Any user-defined mode.
    Other,
}

impl EditMode {
    /// Convert the integer-backed mode value to a typed mode.
    pub fn from_raw(raw: u32) -> Result<Self, InvalidRawValue> {
        match raw {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Insert),
            2 => Ok(Self::Visual),
            3 => Ok(Self::OperatorPending),
            4 => Ok(Self::Ignore),
            5 => Ok(Self::Hint),
            6 => Ok(Self::Command),
            7 => Ok(Self::Other),
            _ => Err(InvalidRawValue {
                enumeration: "EditMode",
                value: raw,
            }),
        }
    }

    /// The integer-backed value for this mode.
    pub fn raw(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Insert => 1,
            Self::Visual => 2,
            Self::OperatorPending => 3,
            Self::Ignore => 4,
            Self::Hint => 5,
            Self::Command => 6,
            Self::Other => 7,
        }
    }

    /// Map a mode name to its variant. Case-insensitive.
    ///
    /// Modes registered by the user at runtime have no fixed variant and map
    /// to `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Self::Normal,
            "insert" => Self::Insert,
            "visual" => Self::Visual,
            "op-pending" => Self::OperatorPending,
            "ignore" => Self::Ignore,
            "hint" => Self::Hint,
            "command" => Self::Command,
            _ => Self::Other,
        }
    }

    /// Canonical name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Insert => "insert",
            Self::Visual => "visual",
            Self::OperatorPending => "op-pending",
            Self::Ignore => "ignore",
            Self::Hint => "hint",
            Self::Command => "command",
            Self::Other => "other",
        }
    }

    /// Whether this mode draws the caret as a block over the selected char.
    ///
    /// Insert and command entry keep the thin insertion caret, and ignore
    /// mode leaves caret styling alone entirely. Operator-pending uses the
    /// underline treatment instead. Visual selection rendering has its own
    /// path that never asks; the `true` recorded for it is only seen by
    /// callers that fall through to this decision.
    pub fn renders_block_caret(self) -> bool {
        match self {
            Self::Normal | Self::Visual | Self::Hint | Self::Other => true,
            Self::Insert | Self::OperatorPending | Self::Ignore | Self::Command => false,
        }
    }

    /// Whether this mode draws the caret as an underscore beneath the
    /// selected char. Only operator-pending does.
    pub fn renders_underline_caret(self) -> bool {
        match self {
            Self::OperatorPending => true,
            Self::Normal
            | Self::Insert
            | Self::Visual
            | Self::Ignore
            | Self::Hint
            | Self::Command
            | Self::Other => false,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer-keyed form of [`EditMode::renders_block_caret`].
///
/// The mode state machine hands the render path an integer snapshot, so the
/// range check happens here. An out-of-range value is a defect upstream: it
/// is logged and renders neither treatment.
pub fn should_render_block_caret(raw: u32) -> bool {
    match EditMode::from_raw(raw) {
        Ok(mode) => mode.renders_block_caret(),
        Err(err) => {
            error!("{err}; rendering the default caret");
            false
        }
    }
}

/// Integer-keyed form of [`EditMode::renders_underline_caret`].
pub fn should_render_underline_caret(raw: u32) -> bool {
    match EditMode::from_raw(raw) {
        Ok(mode) => mode.renders_underline_caret(),
        Err(err) => {
            error!("{err}; rendering the default caret");
            false
        }
    }
}
