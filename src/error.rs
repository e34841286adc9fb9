//! Boundary error for integer-backed enumeration values.

use thiserror::Error;

/// An integer crossed the preference or mode boundary without matching any
/// variant of the target enumeration.
///
/// This signals a defect in the layer that produced the value (corrupted
/// storage, or a variant added upstream and not here), not a recoverable
/// condition. The integer-keyed predicates log it and render neither
/// treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value {value} is not a valid {enumeration}")]
pub struct InvalidRawValue {
    /// Name of the enumeration the value failed to match.
    pub enumeration: &'static str,
    /// The offending integer.
    pub value: u32,
}
