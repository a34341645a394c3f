//! Freshness status - content-age classification

use serde::{Deserialize, Serialize};

/// Age classification of a piece of content relative to its source's decay
/// thresholds
///
/// `Unknown` means no age could be computed (no retrieval or publication
/// timestamp); it is never guessed. Ranking order for retrieval sorting is
/// fixed: Fresh < Stale < Expired < Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessStatus {
    /// Younger than the source's stale threshold
    Fresh,

    /// Past the stale threshold but not yet expired; usable with caution
    Stale,

    /// Past the expiry threshold, or explicitly expired
    Expired,

    /// No timestamp available; age cannot be computed
    Unknown,
}

impl FreshnessStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FreshnessStatus::Fresh => "fresh",
            FreshnessStatus::Stale => "stale",
            FreshnessStatus::Expired => "expired",
            FreshnessStatus::Unknown => "unknown",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fresh" => Some(FreshnessStatus::Fresh),
            "stale" => Some(FreshnessStatus::Stale),
            "expired" => Some(FreshnessStatus::Expired),
            "unknown" => Some(FreshnessStatus::Unknown),
            _ => None,
        }
    }

    /// Fixed sort rank: fresh sorts before stale, stale before expired,
    /// expired before unknown
    pub fn rank(&self) -> u8 {
        match self {
            FreshnessStatus::Fresh => 0,
            FreshnessStatus::Stale => 1,
            FreshnessStatus::Expired => 2,
            FreshnessStatus::Unknown => 3,
        }
    }

    /// True for statuses safe to cite by default (fresh or stale)
    pub fn is_citable(&self) -> bool {
        matches!(self, FreshnessStatus::Fresh | FreshnessStatus::Stale)
    }
}

impl std::str::FromStr for FreshnessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid freshness status: {}", s))
    }
}
