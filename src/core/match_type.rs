//! Describes how a [`crate::core::pattern::Pattern`] relates to a directory
//! and its descendants.

/// A three-bit field over a directory match: M (match), A (all descendants
/// match too), N (no descendant can ever match).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchType(u8);

impl MatchType {
    pub const BIT_MATCH: u8 = 1;
    pub const BIT_ALL_SUBDIRECTORIES: u8 = 2;
    pub const BIT_NO_SUBDIRECTORIES: u8 = 4;

    pub const NO_MATCH: MatchType = MatchType(0);
    pub const MATCH: MatchType = MatchType(Self::BIT_MATCH);
    pub const MATCH_ALL_SUBDIRECTORIES: MatchType =
        MatchType(Self::BIT_MATCH | Self::BIT_ALL_SUBDIRECTORIES);
    pub const MATCH_BUT_NO_SUBDIRECTORIES: MatchType =
        MatchType(Self::BIT_MATCH | Self::BIT_NO_SUBDIRECTORIES);
    pub const NO_MATCH_NO_SUBDIRECTORIES: MatchType = MatchType(Self::BIT_NO_SUBDIRECTORIES);

    pub fn is_match(self) -> bool {
        self.0 & Self::BIT_MATCH != 0
    }

    pub fn is_all_subdirectories(self) -> bool {
        self.0 & Self::BIT_ALL_SUBDIRECTORIES != 0
    }

    pub fn is_no_subdirectories(self) -> bool {
        self.0 & Self::BIT_NO_SUBDIRECTORIES != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_composition() {
        assert!(MatchType::MATCH_ALL_SUBDIRECTORIES.is_match());
        assert!(MatchType::MATCH_ALL_SUBDIRECTORIES.is_all_subdirectories());
        assert!(!MatchType::MATCH_ALL_SUBDIRECTORIES.is_no_subdirectories());

        assert!(MatchType::MATCH_BUT_NO_SUBDIRECTORIES.is_match());
        assert!(MatchType::MATCH_BUT_NO_SUBDIRECTORIES.is_no_subdirectories());

        assert!(!MatchType::NO_MATCH.is_match());
        assert!(!MatchType::NO_MATCH.is_no_subdirectories());

        assert!(MatchType::NO_MATCH_NO_SUBDIRECTORIES.is_no_subdirectories());
        assert!(!MatchType::NO_MATCH_NO_SUBDIRECTORIES.is_match());
    }
}
