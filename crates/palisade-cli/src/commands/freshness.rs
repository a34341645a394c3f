//! Freshness command implementation.

use crate::cli::FreshnessArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::{DateTime, NaiveDate, Utc};
use palisade_domain::SourceMetadata;
use palisade_provenance::FreshnessEvaluator;

/// Execute the freshness command.
pub fn execute_freshness(args: FreshnessArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let evaluator = FreshnessEvaluator::new(config.build_freshness())?;

    let mut metadata = SourceMetadata::new(&args.source, args.tier, "");
    if let Some(value) = &args.retrieved_at {
        metadata = metadata.with_retrieved_at(parse_timestamp(value)?);
    }
    if let Some(value) = &args.published_at {
        metadata = metadata.with_published_at(parse_timestamp(value)?);
    }
    if let Some(value) = &args.expires_at {
        metadata = metadata.with_expires_at(parse_timestamp(value)?);
    }
    if let Some(value) = &args.verified_at {
        metadata = metadata.with_verification(parse_timestamp(value)?, "manual");
    }

    let report = evaluator.calculate_freshness(&metadata);
    let display = FreshnessEvaluator::display(report.status);
    let needs_reverification = evaluator.needs_reverification(&metadata);

    println!(
        "{}",
        formatter.format_freshness(&report, &display, needs_reverification)?
    );
    Ok(())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .map_err(|_| {
            CliError::InvalidInput(format!(
                "'{}' is not an RFC 3339 timestamp or YYYY-MM-DD date",
                value
            ))
        })
}
