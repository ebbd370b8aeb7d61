// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which edges of a burst of events a rate limiter reports.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Report the first event of a burst only.
    Leading,
    /// Report once after the burst has settled.
    #[default]
    Trailing,
    /// Report both the first event and the settled state.
    Both,
}

impl EdgePolicy {
    /// Returns `true` if this policy reports the leading edge.
    #[must_use]
    pub const fn fires_leading(self) -> bool {
        matches!(self, Self::Leading | Self::Both)
    }

    /// Returns `true` if this policy reports the trailing edge.
    #[must_use]
    pub const fn fires_trailing(self) -> bool {
        matches!(self, Self::Trailing | Self::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_per_policy() {
        assert!(EdgePolicy::Leading.fires_leading());
        assert!(!EdgePolicy::Leading.fires_trailing());
        assert!(!EdgePolicy::Trailing.fires_leading());
        assert!(EdgePolicy::Trailing.fires_trailing());
        assert!(EdgePolicy::Both.fires_leading());
        assert!(EdgePolicy::Both.fires_trailing());
        assert_eq!(EdgePolicy::default(), EdgePolicy::Trailing);
    }
}
