//! Rank command implementation.

use crate::cli::RankArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use palisade_domain::ChunkWithProvenance;
use palisade_provenance::{FreshnessEvaluator, ProvenanceRanker};
use std::fs;

/// Execute the rank command.
pub fn execute_rank(args: RankArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let contents = fs::read_to_string(&args.file)?;
    let chunks: Vec<ChunkWithProvenance> = serde_json::from_str(&contents)?;

    let evaluator = FreshnessEvaluator::new(config.build_freshness())?;
    let ranker = ProvenanceRanker::new(evaluator);

    let ranked = ranker.rank(&chunks);
    let output = if args.fresh_only {
        ranker.filter_fresh_sources(&ranked)
    } else {
        ranked
    };

    println!("{}", formatter.format_chunks(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use palisade_domain::SourceMetadata;

    #[test]
    fn test_rank_command_reads_json_file() {
        let chunks = vec![
            ChunkWithProvenance::new("fee info", SourceMetadata::new("capitalone", 1, "h1")),
            ChunkWithProvenance::new("forum tip", SourceMetadata::new("reddit", 4, "h2")),
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.json");
        fs::write(&path, serde_json::to_string(&chunks).unwrap()).unwrap();

        let args = RankArgs {
            file: path,
            fresh_only: false,
        };
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_rank(args, &config, &formatter).is_ok());
    }

    #[test]
    fn test_rank_command_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chunks.json");
        fs::write(&path, "not json").unwrap();

        let args = RankArgs {
            file: path,
            fresh_only: false,
        };
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_rank(args, &config, &formatter).is_err());
    }
}
