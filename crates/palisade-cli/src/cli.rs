//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Palisade CLI - Trust-tiered content sanitization and provenance pipeline.
#[derive(Debug, Parser)]
#[command(name = "palisade")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal output)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sanitize content from a source before it enters a prompt
    Sanitize(SanitizeArgs),

    /// Classify a source label into a trust tier
    Classify(ClassifyArgs),

    /// Fast boolean injection gate (exit code 1 when unsafe)
    Check(CheckArgs),

    /// Evaluate freshness for a piece of provenance metadata
    Freshness(FreshnessArgs),

    /// Rank retrieved chunks by trust, freshness, and relevance
    Rank(RankArgs),

    /// Build a secure system prompt with trust-boundary sections
    Assemble(AssembleArgs),

    /// Audit an outgoing model response for security weak signals
    Audit(AuditArgs),
}

/// Arguments for the sanitize command.
#[derive(Debug, Parser)]
pub struct SanitizeArgs {
    /// Content to sanitize (reads stdin when omitted)
    pub content: Option<String>,

    /// Source label the content arrived under
    #[arg(short, long)]
    pub source: String,

    /// Record detected injection attempts and print the telemetry log
    #[arg(long)]
    pub log: bool,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Source label to classify
    pub label: String,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Content to check (reads stdin when omitted)
    pub content: Option<String>,
}

/// Arguments for the freshness command.
#[derive(Debug, Parser)]
pub struct FreshnessArgs {
    /// Source label the content came from
    #[arg(short, long)]
    pub source: String,

    /// Numeric trust tier of the source (1-4)
    #[arg(short, long, default_value_t = 4)]
    pub tier: u8,

    /// Retrieval timestamp (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub retrieved_at: Option<String>,

    /// Publication timestamp (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub published_at: Option<String>,

    /// Explicit expiry timestamp (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub expires_at: Option<String>,

    /// Last verification timestamp (RFC 3339 or YYYY-MM-DD)
    #[arg(long)]
    pub verified_at: Option<String>,
}

/// Arguments for the rank command.
#[derive(Debug, Parser)]
pub struct RankArgs {
    /// JSON file containing an array of chunks with provenance
    pub file: PathBuf,

    /// Drop expired and unknown chunks after ranking
    #[arg(long)]
    pub fresh_only: bool,
}

/// Arguments for the assemble command.
#[derive(Debug, Parser)]
pub struct AssembleArgs {
    /// Base system prompt text
    #[arg(short, long)]
    pub base: String,

    /// File containing pre-rendered RAG context with [Source: ...] tags
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Source tier pairs, e.g. --tier capitalone=1 --tier reddit=4
    #[arg(long = "tier", value_parser = parse_tier_pair)]
    pub tiers: Vec<(String, u8)>,
}

/// Arguments for the audit command.
#[derive(Debug, Parser)]
pub struct AuditArgs {
    /// Model response text to audit (reads stdin when omitted)
    pub response: Option<String>,
}

/// Parse a `source=tier` pair from the command line.
fn parse_tier_pair(s: &str) -> std::result::Result<(String, u8), String> {
    let (source, tier) = s
        .split_once('=')
        .ok_or_else(|| format!("expected source=tier, got '{}'", s))?;

    let tier: u8 = tier
        .parse()
        .map_err(|_| format!("tier must be a number 1-4, got '{}'", tier))?;
    if !(1..=4).contains(&tier) {
        return Err(format!("tier must be 1-4, got {}", tier));
    }

    Ok((source.to_string(), tier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tier_pair() {
        assert_eq!(parse_tier_pair("capitalone=1").unwrap(), ("capitalone".to_string(), 1));
        assert_eq!(parse_tier_pair("reddit=4").unwrap(), ("reddit".to_string(), 4));
        assert!(parse_tier_pair("no-equals").is_err());
        assert!(parse_tier_pair("reddit=nine").is_err());
        assert!(parse_tier_pair("reddit=0").is_err());
        assert!(parse_tier_pair("reddit=5").is_err());
    }

    #[test]
    fn test_cli_parses_sanitize() {
        let cli = Cli::try_parse_from([
            "palisade", "sanitize", "Portal is best!", "--source", "reddit",
        ])
        .unwrap();
        match cli.command {
            Command::Sanitize(args) => {
                assert_eq!(args.content.as_deref(), Some("Portal is best!"));
                assert_eq!(args.source, "reddit");
                assert!(!args.log);
            }
            _ => panic!("Expected sanitize command"),
        }
    }

    #[test]
    fn test_cli_parses_assemble_tiers() {
        let cli = Cli::try_parse_from([
            "palisade", "assemble", "--base", "You help.", "--tier", "capitalone=1",
            "--tier", "reddit=4",
        ])
        .unwrap();
        match cli.command {
            Command::Assemble(args) => {
                assert_eq!(args.tiers.len(), 2);
                assert_eq!(args.tiers[0], ("capitalone".to_string(), 1));
            }
            _ => panic!("Expected assemble command"),
        }
    }
}
