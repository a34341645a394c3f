//! Provenance metadata for retrieved content

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Provenance record attached to every piece of retrieved content
///
/// Created at ingestion/retrieval time. `is_active` flips when a newer
/// version of the same logical fact supersedes this one; `verified_at` is
/// updated by re-verification sweeps outside this core (we only consume the
/// timestamp).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// Unique identifier (UUIDv7, chronologically sortable)
    pub id: Uuid,

    /// Source label (e.g. "capitalone", "reddit-post")
    pub source: String,

    /// Original URL, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Document title, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// When the content was retrieved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieved_at: Option<DateTime<Utc>>,

    /// When the content was originally published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// When the described fact takes effect (e.g. a fee change date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateTime<Utc>>,

    /// Explicit expiry; dominates age-based freshness when in the past
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Numeric trust tier of the source (1 = most trusted)
    pub trust_tier: u8,

    /// When this record was last re-verified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<DateTime<Utc>>,

    /// Who/what performed the last verification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,

    /// Hash of the content at ingestion time
    pub content_hash: String,

    /// Version number, incremented when a newer record supersedes this one
    pub version: u32,

    /// False once superseded by a newer version of the same fact
    pub is_active: bool,
}

impl SourceMetadata {
    /// Create a new metadata record for freshly ingested content
    pub fn new(source: impl Into<String>, trust_tier: u8, content_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            source: source.into(),
            url: None,
            title: None,
            retrieved_at: None,
            published_at: None,
            effective_date: None,
            expires_at: None,
            trust_tier,
            verified_at: None,
            verified_by: None,
            content_hash: content_hash.into(),
            version: 1,
            is_active: true,
        }
    }

    /// Set the retrieval timestamp
    pub fn with_retrieved_at(mut self, at: DateTime<Utc>) -> Self {
        self.retrieved_at = Some(at);
        self
    }

    /// Set the publication timestamp
    pub fn with_published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    /// Set an explicit expiry timestamp
    pub fn with_expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }

    /// Record a verification pass
    pub fn with_verification(mut self, at: DateTime<Utc>, by: impl Into<String>) -> Self {
        self.verified_at = Some(at);
        self.verified_by = Some(by.into());
        self
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The timestamp freshness is measured from: retrieval, else publication
    pub fn age_anchor(&self) -> Option<DateTime<Utc>> {
        self.retrieved_at.or(self.published_at)
    }

    /// Mark this record superseded by a newer version
    pub fn supersede(&mut self) {
        self.is_active = false;
    }
}
