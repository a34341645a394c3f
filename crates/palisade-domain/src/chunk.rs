//! Retrieved content chunks with provenance

use crate::freshness::FreshnessStatus;
use crate::metadata::SourceMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A retrieved content chunk carrying its provenance record
///
/// `freshness` and `days_old` are derived fields: they must always equal
/// what the freshness evaluator computes from `metadata`. Callers set them
/// via the evaluator/ranker, never directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkWithProvenance {
    /// Unique identifier (UUIDv7)
    pub id: Uuid,

    /// The chunk text
    pub content: String,

    /// Optional embedding vector from the retrieval layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// Provenance record for this chunk
    pub metadata: SourceMetadata,

    /// Retrieval relevance score, if the retriever produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    /// Position assigned by the ranker (0-based), if ranked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_position: Option<usize>,

    /// Derived freshness status (see type docs)
    pub freshness: FreshnessStatus,

    /// Derived age in whole days, when an age anchor exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_old: Option<i64>,
}

impl ChunkWithProvenance {
    /// Create a new chunk; freshness starts as `Unknown` until evaluated
    pub fn new(content: impl Into<String>, metadata: SourceMetadata) -> Self {
        Self {
            id: Uuid::now_v7(),
            content: content.into(),
            embedding: None,
            metadata,
            score: None,
            rank_position: None,
            freshness: FreshnessStatus::Unknown,
            days_old: None,
        }
    }

    /// Attach a retrieval relevance score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Relevance score with missing values treated as zero
    pub fn score_or_zero(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}
