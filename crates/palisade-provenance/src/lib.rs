//! Palisade Provenance
//!
//! Freshness evaluation and trust-aware ranking for retrieved content.
//!
//! Content age is scored against per-source decay thresholds (a Reddit
//! thread goes stale in days, an issuer fee schedule in months); retrieved
//! chunks are then ordered by trust tier, freshness, and relevance before
//! prompt assembly. Missing timestamps degrade to an explicit `Unknown`
//! status rather than a guessed age.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use palisade_domain::{FreshnessStatus, SourceMetadata};
//! use palisade_provenance::FreshnessEvaluator;
//!
//! let evaluator = FreshnessEvaluator::default();
//! let meta = SourceMetadata::new("reddit", 4, "hash")
//!     .with_retrieved_at(Utc::now() - Duration::days(20));
//!
//! let report = evaluator.calculate_freshness(&meta);
//! assert_eq!(report.status, FreshnessStatus::Stale);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;
mod ranker;

pub use config::FreshnessConfig;
pub use error::ProvenanceError;
pub use evaluator::{FreshnessDisplay, FreshnessEvaluator, FreshnessReport};
pub use ranker::ProvenanceRanker;
