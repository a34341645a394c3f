//! Freshness threshold configuration

use crate::error::ProvenanceError;
use palisade_domain::normalize_source;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key that every threshold table must contain
pub const DEFAULT_KEY: &str = "default";

/// Per-source content-age thresholds, in whole days
///
/// Two parallel tables keyed by normalized source name. A source may have a
/// custom stale threshold while using the default expiry threshold, or vice
/// versa - the two lookups fall back independently.
///
/// Invariant (enforced by [`FreshnessConfig::validate`]): both tables carry
/// a `default` entry, and no source's effective expiry threshold is below
/// its effective stale threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessConfig {
    /// Days after which content counts as stale
    pub stale_days: BTreeMap<String, u32>,

    /// Days after which content counts as expired
    pub expired_days: BTreeMap<String, u32>,
}

impl FreshnessConfig {
    /// Validate the threshold tables
    ///
    /// A misconfigured table (missing `default`, or expiry tighter than
    /// staleness) is rejected at load time instead of silently producing
    /// inverted lifecycle states at evaluation time.
    pub fn validate(&self) -> Result<(), ProvenanceError> {
        for (name, table) in [("stale_days", &self.stale_days), ("expired_days", &self.expired_days)]
        {
            if !table.contains_key(DEFAULT_KEY) {
                return Err(ProvenanceError::MissingDefault {
                    table: name.to_string(),
                });
            }
        }

        let keys = self.stale_days.keys().chain(self.expired_days.keys());
        for key in keys {
            let (stale, expired) = self.thresholds_for(key);
            if expired < stale {
                return Err(ProvenanceError::InvalidThresholds {
                    source: key.clone(),
                    stale,
                    expired,
                });
            }
        }

        Ok(())
    }

    /// Resolve `(stale, expired)` thresholds for a source
    ///
    /// Each table is consulted independently, falling back to its `default`
    /// entry when the source has no custom value.
    pub fn thresholds_for(&self, source: &str) -> (u32, u32) {
        let key = normalize_source(source);
        let stale = self.lookup(&self.stale_days, &key, 30);
        let expired = self.lookup(&self.expired_days, &key, 90);
        (stale, expired)
    }

    fn lookup(&self, table: &BTreeMap<String, u32>, key: &str, fallback: u32) -> u32 {
        table
            .get(key)
            .or_else(|| table.get(DEFAULT_KEY))
            .copied()
            .unwrap_or(fallback)
    }

    /// Merge caller-supplied overrides into this configuration
    pub fn with_overrides(mut self, other: FreshnessConfig) -> Self {
        self.stale_days.extend(other.stale_days);
        self.expired_days.extend(other.expired_days);
        self
    }
}

impl Default for FreshnessConfig {
    /// Built-in thresholds for the travel-rewards source table
    ///
    /// Anonymous social content decays in days; issuer documentation holds
    /// for months.
    fn default() -> Self {
        let stale_days = BTreeMap::from([
            (DEFAULT_KEY.to_string(), 30),
            ("reddit".to_string(), 14),
            ("twitter".to_string(), 7),
            ("flyertalk".to_string(), 21),
            ("capitalone".to_string(), 90),
            ("chase".to_string(), 90),
            ("amex".to_string(), 90),
        ]);

        let expired_days = BTreeMap::from([
            (DEFAULT_KEY.to_string(), 90),
            ("reddit".to_string(), 60),
            ("twitter".to_string(), 30),
            ("flyertalk".to_string(), 90),
            ("capitalone".to_string(), 365),
            ("chase".to_string(), 365),
            ("amex".to_string(), 365),
        ]);

        Self {
            stale_days,
            expired_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FreshnessConfig::default().validate().is_ok());
    }

    #[test]
    fn test_thresholds_fall_back_independently() {
        let mut config = FreshnessConfig::default();
        // Custom stale threshold, no custom expiry: expiry uses default.
        config.stale_days.insert("niche-blog".to_string(), 10);

        let (stale, expired) = config.thresholds_for("niche-blog");
        assert_eq!(stale, 10);
        assert_eq!(expired, 90);
    }

    #[test]
    fn test_thresholds_normalize_source() {
        let config = FreshnessConfig::default();
        assert_eq!(config.thresholds_for("Reddit"), config.thresholds_for("reddit"));
    }

    #[test]
    fn test_unknown_source_uses_defaults() {
        let config = FreshnessConfig::default();
        assert_eq!(config.thresholds_for("some-random-blog"), (30, 90));
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let mut config = FreshnessConfig::default();
        config.stale_days.remove(DEFAULT_KEY);

        match config.validate() {
            Err(ProvenanceError::MissingDefault { table }) => assert_eq!(table, "stale_days"),
            other => panic!("Expected MissingDefault, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_thresholds_are_rejected() {
        let mut config = FreshnessConfig::default();
        // Expires after 5 days but only goes stale after 14: inverted.
        config.expired_days.insert("reddit".to_string(), 5);

        match config.validate() {
            Err(ProvenanceError::InvalidThresholds { source, stale, expired }) => {
                assert_eq!(source, "reddit");
                assert_eq!(stale, 14);
                assert_eq!(expired, 5);
            }
            other => panic!("Expected InvalidThresholds, got {:?}", other),
        }
    }

    #[test]
    fn test_inverted_via_custom_stale_only() {
        let mut config = FreshnessConfig::default();
        // Custom stale of 200 days with the default 90-day expiry is inverted.
        config.stale_days.insert("slow-source".to_string(), 200);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_merge() {
        let overrides = FreshnessConfig {
            stale_days: BTreeMap::from([("reddit".to_string(), 7)]),
            expired_days: BTreeMap::new(),
        };
        let config = FreshnessConfig::default().with_overrides(overrides);

        assert_eq!(config.thresholds_for("reddit"), (7, 60));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FreshnessConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: FreshnessConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.thresholds_for("reddit"), (14, 60));
        assert!(parsed.validate().is_ok());
    }
}
