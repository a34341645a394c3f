//! Freshness evaluation against per-source thresholds

use crate::config::FreshnessConfig;
use crate::error::ProvenanceError;
use chrono::{DateTime, Utc};
use palisade_domain::{FreshnessStatus, SourceMetadata};
use serde::Serialize;

/// Result of evaluating one metadata record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreshnessReport {
    /// The derived status
    pub status: FreshnessStatus,

    /// Whole days since retrieval (or publication), when computable
    pub days_old: Option<i64>,

    /// Human-readable note for non-fresh statuses
    pub message: Option<String>,
}

/// Presentation mapping for a freshness status
///
/// Part of the core contract, not decoration: the color and label carry the
/// cite/verify/discard semantics that presentation layers render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreshnessDisplay {
    /// Badge label
    pub label: &'static str,
    /// Semantic color
    pub color: &'static str,
    /// Hover text explaining what the status means for the reader
    pub tooltip: &'static str,
}

/// Days between re-verification sweeps for tier 1-2 sources
const VERIFIED_SOURCE_RECHECK_DAYS: i64 = 90;
/// Days between re-verification sweeps for tier 3-4 sources
const UNVERIFIED_SOURCE_RECHECK_DAYS: i64 = 30;

/// Computes age-based freshness for provenance metadata
///
/// Never fails at evaluation time: a record with no usable timestamp gets
/// `Unknown` rather than a guessed age, and an explicit `expires_at` in the
/// past dominates any age-based computation.
pub struct FreshnessEvaluator {
    config: FreshnessConfig,
}

impl FreshnessEvaluator {
    /// Create an evaluator, validating the configuration first
    pub fn new(config: FreshnessConfig) -> Result<Self, ProvenanceError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &FreshnessConfig {
        &self.config
    }

    /// Evaluate freshness as of now
    pub fn calculate_freshness(&self, metadata: &SourceMetadata) -> FreshnessReport {
        self.calculate_freshness_at(metadata, Utc::now())
    }

    /// Evaluate freshness as of a given instant
    pub fn calculate_freshness_at(
        &self,
        metadata: &SourceMetadata,
        now: DateTime<Utc>,
    ) -> FreshnessReport {
        let anchor = match metadata.age_anchor() {
            Some(anchor) => anchor,
            None => {
                return FreshnessReport {
                    status: FreshnessStatus::Unknown,
                    days_old: None,
                    message: Some("No retrieval or publication timestamp".to_string()),
                };
            }
        };

        let (stale_days, expired_days) = self.config.thresholds_for(&metadata.source);
        let days_old = (now - anchor).num_days();

        // Explicit expiry always wins over age-based computation.
        if let Some(expires_at) = metadata.expires_at {
            if expires_at <= now {
                tracing::debug!(source = %metadata.source, "content explicitly expired");
                return FreshnessReport {
                    status: FreshnessStatus::Expired,
                    days_old: Some(days_old),
                    message: Some(format!("Explicitly expired at {}", expires_at.to_rfc3339())),
                };
            }
        }

        let (status, message) = if days_old >= i64::from(expired_days) {
            (
                FreshnessStatus::Expired,
                Some(format!("{} days old, past the {}-day expiry threshold", days_old, expired_days)),
            )
        } else if days_old >= i64::from(stale_days) {
            (
                FreshnessStatus::Stale,
                Some(format!("{} days old, past the {}-day stale threshold", days_old, stale_days)),
            )
        } else {
            (FreshnessStatus::Fresh, None)
        };

        FreshnessReport {
            status,
            days_old: Some(days_old),
            message,
        }
    }

    /// Whether this record is due for a re-verification sweep
    ///
    /// Never-verified records are always due. Verified records are re-checked
    /// every 90 days for tier 1-2 sources and every 30 days for tier 3-4;
    /// higher-trust sources change less often.
    pub fn needs_reverification(&self, metadata: &SourceMetadata) -> bool {
        self.needs_reverification_at(metadata, Utc::now())
    }

    /// `needs_reverification` as of a given instant
    pub fn needs_reverification_at(&self, metadata: &SourceMetadata, now: DateTime<Utc>) -> bool {
        let verified_at = match metadata.verified_at {
            Some(at) => at,
            None => return true,
        };

        let interval = if metadata.trust_tier <= 2 {
            VERIFIED_SOURCE_RECHECK_DAYS
        } else {
            UNVERIFIED_SOURCE_RECHECK_DAYS
        };

        (now - verified_at).num_days() >= interval
    }

    /// Presentation triple for a status
    pub fn display(status: FreshnessStatus) -> FreshnessDisplay {
        match status {
            FreshnessStatus::Fresh => FreshnessDisplay {
                label: "Fresh",
                color: "green",
                tooltip: "Within the source's freshness window",
            },
            FreshnessStatus::Stale => FreshnessDisplay {
                label: "Stale",
                color: "yellow",
                tooltip: "Older than the staleness threshold; verify before relying on it",
            },
            FreshnessStatus::Expired => FreshnessDisplay {
                label: "Expired",
                color: "red",
                tooltip: "Past expiry; do not cite without re-verification",
            },
            FreshnessStatus::Unknown => FreshnessDisplay {
                label: "Unknown",
                color: "gray",
                tooltip: "No timestamp available; age cannot be determined",
            },
        }
    }
}

impl Default for FreshnessEvaluator {
    fn default() -> Self {
        Self {
            // The built-in table satisfies validate() by construction.
            config: FreshnessConfig::default(),
        }
    }
}
