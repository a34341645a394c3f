//! Provenance error types

use thiserror::Error;

/// Errors that can occur while loading freshness configuration
///
/// Evaluation itself never fails: missing timestamps yield an `Unknown`
/// status, not an error.
#[derive(Error, Debug)]
pub enum ProvenanceError {
    /// A threshold table lacks its mandatory `default` entry
    #[error("Freshness table '{table}' has no 'default' entry")]
    MissingDefault {
        /// Which table is missing the entry
        table: String,
    },

    /// A source would expire before it goes stale
    #[error("Source '{source}' expires after {expired} days but goes stale after {stale}")]
    InvalidThresholds {
        /// The offending source key
        source: String,
        /// Effective stale threshold (days)
        stale: u32,
        /// Effective expiry threshold (days)
        expired: u32,
    },
}
