//! Limits for codec-level decoding.

/// Codec-specific limits enforced while walking the entry lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecLimits {
    /// Maximum decoded hero count.
    pub max_heroes: usize,
    /// Maximum number of card stacks.
    pub max_cards: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_heroes: 64,
            max_cards: 4096,
        }
    }
}

impl CodecLimits {
    /// Creates limits suitable for testing with smaller values.
    #[must_use]
    pub const fn for_testing() -> Self {
        Self {
            max_heroes: 8,
            max_cards: 64,
        }
    }

    /// Creates limits with no restrictions (use with caution).
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_heroes: usize::MAX,
            max_cards: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_reasonable() {
        let limits = CodecLimits::default();
        assert!(limits.max_heroes >= 5);
        assert!(limits.max_cards >= 256);
    }

    #[test]
    fn testing_limits_smaller() {
        let test_limits = CodecLimits::for_testing();
        let default_limits = CodecLimits::default();
        assert!(test_limits.max_heroes < default_limits.max_heroes);
        assert!(test_limits.max_cards < default_limits.max_cards);
    }

    #[test]
    fn unlimited_limits() {
        let limits = CodecLimits::unlimited();
        assert_eq!(limits.max_heroes, usize::MAX);
        assert_eq!(limits.max_cards, usize::MAX);
    }
}
