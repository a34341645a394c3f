//! Trust- and freshness-aware ranking of retrieved chunks

use crate::evaluator::FreshnessEvaluator;
use palisade_domain::ChunkWithProvenance;
use std::cmp::Ordering;

/// Orders and filters retrieved chunks by trust, freshness, and relevance
///
/// Sorting is stable and non-mutating: ties between chunks keep their
/// retrieval order. The comparator priority is fixed: ascending trust tier
/// (tier 1 first), then ascending freshness rank (fresh < stale < expired <
/// unknown), then descending retrieval score (missing scores count as zero).
pub struct ProvenanceRanker {
    evaluator: FreshnessEvaluator,
}

impl ProvenanceRanker {
    /// Create a ranker over a freshness evaluator
    pub fn new(evaluator: FreshnessEvaluator) -> Self {
        Self { evaluator }
    }

    /// Fill the derived freshness fields on a batch of chunks
    ///
    /// This is the only place `freshness`/`days_old` are written, keeping
    /// the invariant that they always equal what the evaluator computes
    /// from the chunk's metadata.
    pub fn annotate(&self, chunks: &[ChunkWithProvenance]) -> Vec<ChunkWithProvenance> {
        chunks
            .iter()
            .map(|chunk| {
                let report = self.evaluator.calculate_freshness(&chunk.metadata);
                let mut annotated = chunk.clone();
                annotated.freshness = report.status;
                annotated.days_old = report.days_old;
                annotated
            })
            .collect()
    }

    /// Sort chunks by trust tier, then freshness, then relevance score
    ///
    /// Assigns `rank_position` on the returned chunks. Callers should
    /// `annotate` first; un-annotated chunks all carry `Unknown` freshness
    /// and only differ by tier and score.
    pub fn sort_by_freshness_and_trust(
        &self,
        chunks: &[ChunkWithProvenance],
    ) -> Vec<ChunkWithProvenance> {
        let mut sorted = chunks.to_vec();
        sorted.sort_by(compare);

        for (position, chunk) in sorted.iter_mut().enumerate() {
            chunk.rank_position = Some(position);
        }
        sorted
    }

    /// Keep only chunks safe to cite by default (fresh or stale)
    ///
    /// Expired and unknown chunks are excluded; callers may bypass this
    /// filter when no fresher data exists.
    pub fn filter_fresh_sources(
        &self,
        chunks: &[ChunkWithProvenance],
    ) -> Vec<ChunkWithProvenance> {
        chunks
            .iter()
            .filter(|chunk| chunk.freshness.is_citable())
            .cloned()
            .collect()
    }

    /// Annotate, filter, and sort in one pass
    pub fn rank(&self, chunks: &[ChunkWithProvenance]) -> Vec<ChunkWithProvenance> {
        let annotated = self.annotate(chunks);
        self.sort_by_freshness_and_trust(&annotated)
    }
}

fn compare(a: &ChunkWithProvenance, b: &ChunkWithProvenance) -> Ordering {
    a.metadata
        .trust_tier
        .cmp(&b.metadata.trust_tier)
        .then_with(|| a.freshness.rank().cmp(&b.freshness.rank()))
        .then_with(|| {
            b.score_or_zero()
                .partial_cmp(&a.score_or_zero())
                .unwrap_or(Ordering::Equal)
        })
}

impl Default for ProvenanceRanker {
    fn default() -> Self {
        Self::new(FreshnessEvaluator::default())
    }
}
