//! Source registry - maps source labels to trust tiers

use crate::tier::TrustTier;

/// Normalize a free-form source label into a registry key
///
/// Lowercases the label and replaces every character outside `[a-z0-9-]`
/// with `-`, so "Capital One Help Center" and "capital_one help.center"
/// resolve identically.
pub fn normalize_source(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Registry of known sources and their trust tiers
///
/// Lookup order: exact key match, then first entry (in insertion order)
/// whose key is a substring of the normalized label or vice versa, then the
/// fallback tier. Classification never fails - an unrecognized source is
/// always treated as least-trusted, so nothing fails open into "no
/// sanitization".
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    // Insertion order is significant: the first substring match wins.
    entries: Vec<(String, TrustTier)>,
    fallback: TrustTier,
}

impl SourceRegistry {
    /// Create an empty registry with the standard tier-4 fallback
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            fallback: TrustTier::unknown(),
        }
    }

    /// Register a source under its normalized key
    ///
    /// Re-registering a key replaces the existing entry in place, keeping
    /// its original position in substring-match order.
    pub fn register(&mut self, key: &str, tier: TrustTier) {
        let key = normalize_source(key);
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = tier;
        } else {
            self.entries.push((key, tier));
        }
    }

    /// Merge caller-supplied custom entries into this registry
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, TrustTier)>,
    {
        for (key, tier) in overrides {
            self.register(&key, tier);
        }
        self
    }

    /// Classify a source label into a trust tier
    ///
    /// Pure function over the registry; no error path. Resolution order:
    /// 1. Exact key match
    /// 2. First key that contains, or is contained in, the normalized label
    /// 3. The tier-4 fallback
    pub fn classify(&self, label: &str) -> &TrustTier {
        let normalized = normalize_source(label);

        // An empty label would be a trivial substring of every key.
        if normalized.is_empty() {
            return &self.fallback;
        }

        if let Some((_, tier)) = self.entries.iter().find(|(k, _)| *k == normalized) {
            return tier;
        }

        if let Some((_, tier)) = self
            .entries
            .iter()
            .find(|(k, _)| normalized.contains(k.as_str()) || k.contains(&normalized))
        {
            return tier;
        }

        &self.fallback
    }

    /// Number of registered sources (excluding the fallback)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no sources are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SourceRegistry {
    /// The built-in travel-rewards source table
    ///
    /// Official card issuers are tier 1, editorial publications tier 2,
    /// named-account forums tier 3, anonymous social media tier 4.
    fn default() -> Self {
        let mut registry = Self::empty();

        // Tier 1: official issuer content
        registry.register("capitalone", TrustTier::new(1, "Capital One", "Official card issuer"));
        registry.register("chase", TrustTier::new(1, "Chase", "Official card issuer"));
        registry.register("amex", TrustTier::new(1, "American Express", "Official card issuer"));

        // Tier 2: editorial publications with named authors
        registry.register(
            "thepointsguy",
            TrustTier::new(2, "The Points Guy", "Editorial travel publication"),
        );
        registry.register(
            "onemileatatime",
            TrustTier::new(2, "One Mile at a Time", "Editorial travel publication"),
        );
        registry.register(
            "nerdwallet",
            TrustTier::new(2, "NerdWallet", "Editorial finance publication"),
        );

        // Tier 3: forums with persistent named accounts
        registry.register("flyertalk", TrustTier::new(3, "FlyerTalk", "Community forum"));
        registry.register("milepoint", TrustTier::new(3, "Milepoint", "Community forum"));

        // Tier 4: anonymous social media
        registry.register("reddit", TrustTier::new(4, "Reddit", "Anonymous social media"));
        registry.register("twitter", TrustTier::new(4, "Twitter", "Anonymous social media"));
        registry.register("facebook", TrustTier::new(4, "Facebook", "Anonymous social media"));

        registry
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: normalization output only contains [a-z0-9-]
        #[test]
        fn test_normalize_alphabet(label in ".*") {
            let normalized = normalize_source(&label);
            prop_assert!(normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        /// Property: normalization is idempotent
        #[test]
        fn test_normalize_idempotent(label in ".*") {
            let once = normalize_source(&label);
            prop_assert_eq!(normalize_source(&once), once);
        }

        /// Property: classification is total - every label gets a tier in 1..=4
        #[test]
        fn test_classify_total(label in ".*") {
            let registry = SourceRegistry::default();
            let tier = registry.classify(&label);
            prop_assert!((1..=4).contains(&tier.tier));
        }
    }
}
