//! Trust tier module - source trust levels and their sanitization strategies

use serde::{Deserialize, Serialize};

/// How aggressively content from a tier is rewritten before prompt assembly
///
/// Strategies are ordered: each tier applies everything a more trusted tier
/// would, plus one additional transformation:
/// - None: pass content through unchanged
/// - Minimal: redact detected injection spans
/// - Moderate: redact, then soften absolutist advice phrasing
/// - Aggressive: redact, soften, then wrap as an explicit third-party claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SanitizationStrategy {
    /// Pass-through; content is never mutated
    None,

    /// Redact injection spans only when an injection was detected
    Minimal,

    /// Redact injection spans and soften imperative phrasing
    Moderate,

    /// Redact, soften, and wrap in a claim envelope (with truncation)
    Aggressive,
}

impl SanitizationStrategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SanitizationStrategy::None => "none",
            SanitizationStrategy::Minimal => "minimal",
            SanitizationStrategy::Moderate => "moderate",
            SanitizationStrategy::Aggressive => "aggressive",
        }
    }

    /// Parse a strategy from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(SanitizationStrategy::None),
            "minimal" => Some(SanitizationStrategy::Minimal),
            "moderate" => Some(SanitizationStrategy::Moderate),
            "aggressive" => Some(SanitizationStrategy::Aggressive),
            _ => None,
        }
    }

    /// The single strategy mandated for a numeric tier
    ///
    /// Tier numbers outside 1-4 are treated as least-trusted.
    pub fn for_tier(tier: u8) -> Self {
        match tier {
            1 => SanitizationStrategy::None,
            2 => SanitizationStrategy::Minimal,
            3 => SanitizationStrategy::Moderate,
            _ => SanitizationStrategy::Aggressive,
        }
    }
}

/// An immutable trust classification for a content source
///
/// Lower numeric tier = higher trust. The sanitization strategy is derived
/// from the tier number at construction, so a tier can never carry a
/// strategy that disagrees with its trust level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustTier {
    /// Numeric tier (1 = most trusted, 4 = least trusted)
    pub tier: u8,

    /// Human-readable source name (used in claim-wrap labels)
    pub name: String,

    /// Short description of why this tier applies
    pub description: String,

    /// Sanitization strategy applied to content from this tier
    pub strategy: SanitizationStrategy,
}

impl TrustTier {
    /// Create a trust tier; the strategy is derived from the tier number
    pub fn new(tier: u8, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tier,
            name: name.into(),
            description: description.into(),
            strategy: SanitizationStrategy::for_tier(tier),
        }
    }

    /// The fallback tier for sources no registry entry matches
    pub fn unknown() -> Self {
        Self::new(4, "Unknown", "Unrecognized source, treated as unverified")
    }

    /// True if content from this tier may be cited without claim framing
    pub fn is_verified(&self) -> bool {
        self.tier <= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_per_tier_is_monotonic() {
        let strategies: Vec<SanitizationStrategy> =
            (1..=4).map(SanitizationStrategy::for_tier).collect();

        for pair in strategies.windows(2) {
            assert!(pair[0] < pair[1], "strategy must grow with tier number");
        }
    }

    #[test]
    fn test_tier_one_is_pass_through() {
        assert_eq!(SanitizationStrategy::for_tier(1), SanitizationStrategy::None);
    }

    #[test]
    fn test_out_of_range_tier_is_aggressive() {
        assert_eq!(SanitizationStrategy::for_tier(0), SanitizationStrategy::Aggressive);
        assert_eq!(SanitizationStrategy::for_tier(9), SanitizationStrategy::Aggressive);
    }

    #[test]
    fn test_strategy_roundtrip() {
        for s in [
            SanitizationStrategy::None,
            SanitizationStrategy::Minimal,
            SanitizationStrategy::Moderate,
            SanitizationStrategy::Aggressive,
        ] {
            assert_eq!(SanitizationStrategy::parse(s.as_str()), Some(s));
        }
        assert_eq!(SanitizationStrategy::parse("invalid"), None);
    }

    #[test]
    fn test_tier_construction_derives_strategy() {
        let tier = TrustTier::new(3, "FlyerTalk", "Named forum user");
        assert_eq!(tier.strategy, SanitizationStrategy::Moderate);
        assert!(!tier.is_verified());

        let official = TrustTier::new(1, "Capital One", "Official issuer");
        assert_eq!(official.strategy, SanitizationStrategy::None);
        assert!(official.is_verified());
    }

    #[test]
    fn test_unknown_is_least_trusted() {
        let unknown = TrustTier::unknown();
        assert_eq!(unknown.tier, 4);
        assert_eq!(unknown.strategy, SanitizationStrategy::Aggressive);
    }
}
