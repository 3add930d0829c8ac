//! Configurable limits for bounded decoding.

/// Text-level limits for deck code decoding.
///
/// Enforced before base64 decoding so oversized input never allocates a
/// buffer. Entry counts are bounded by the codec layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum deck code length in bytes, prefix included.
    pub max_code_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            // Real decks encode to a few hundred characters at most
            max_code_len: 8 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self { max_code_len: 512 }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_code_len: usize::MAX,
        }
    }
}
