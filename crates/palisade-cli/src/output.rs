//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use palisade_assembler::SecurityAudit;
use palisade_domain::{ChunkWithProvenance, TrustTier};
use palisade_provenance::{FreshnessDisplay, FreshnessReport};
use palisade_sanitizer::{InjectionLogEntry, SanitizeResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a sanitization result.
    pub fn format_sanitize(&self, result: &SanitizeResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "sanitized": result.sanitized,
                    "original": result.original,
                    "was_modified": result.was_modified,
                    "injection_detected": result.injection_detected,
                    "detected_patterns": result.detected_patterns,
                    "trust_tier": {
                        "tier": result.trust_tier.tier,
                        "name": result.trust_tier.name,
                        "strategy": result.trust_tier.strategy.as_str(),
                    },
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(result.sanitized.clone()),
            OutputFormat::Table => {
                let mut lines = Vec::new();
                lines.push(format!(
                    "Source tier: {} ({}, strategy: {})",
                    result.trust_tier.tier,
                    result.trust_tier.name,
                    result.trust_tier.strategy.as_str()
                ));

                if result.injection_detected {
                    lines.push(self.colorize(
                        &format!(
                            "Injection detected: {}",
                            result.detected_patterns.join(", ")
                        ),
                        "red",
                    ));
                } else {
                    lines.push(self.colorize("No injection signatures matched", "green"));
                }

                if result.was_modified {
                    lines.push(self.colorize("Content was modified", "yellow"));
                } else {
                    lines.push("Content unchanged".to_string());
                }

                lines.push(String::new());
                lines.push(result.sanitized.clone());
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a trust tier classification.
    pub fn format_tier(&self, label: &str, tier: &TrustTier) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "label": label,
                    "tier": tier.tier,
                    "name": tier.name,
                    "description": tier.description,
                    "strategy": tier.strategy.as_str(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(tier.tier.to_string()),
            OutputFormat::Table => Ok(format!(
                "{} -> tier {} ({})\n  {}\n  strategy: {}",
                label,
                tier.tier,
                tier.name,
                tier.description,
                tier.strategy.as_str()
            )),
        }
    }

    /// Format a freshness report with its display badge.
    pub fn format_freshness(
        &self,
        report: &FreshnessReport,
        display: &FreshnessDisplay,
        needs_reverification: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "status": report.status.as_str(),
                    "days_old": report.days_old,
                    "message": report.message,
                    "display": display,
                    "needs_reverification": needs_reverification,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(report.status.as_str().to_string()),
            OutputFormat::Table => {
                let badge = self.colorize(display.label, display.color);
                let mut lines = vec![match report.days_old {
                    Some(days) => format!("{} ({} days old)", badge, days),
                    None => badge,
                }];
                if let Some(message) = &report.message {
                    lines.push(message.clone());
                }
                lines.push(display.tooltip.to_string());
                if needs_reverification {
                    lines.push(self.colorize("Due for re-verification", "yellow"));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format ranked chunks.
    pub fn format_chunks(&self, chunks: &[ChunkWithProvenance]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(chunks)?),
            OutputFormat::Quiet => {
                let ids: Vec<String> = chunks.iter().map(|c| c.id.to_string()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                if chunks.is_empty() {
                    return Ok(self.colorize("No chunks to rank.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Rank", "Tier", "Freshness", "Score", "Source", "Content"]);

                for chunk in chunks {
                    let rank = chunk
                        .rank_position
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let score = chunk
                        .score
                        .map(|s| format!("{:.2}", s))
                        .unwrap_or_else(|| "-".to_string());
                    builder.push_record([
                        rank,
                        chunk.metadata.trust_tier.to_string(),
                        chunk.freshness.as_str().to_string(),
                        score,
                        chunk.metadata.source.clone(),
                        excerpt(&chunk.content, 48),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    /// Format telemetry log entries.
    pub fn format_log_entries(&self, entries: &[InjectionLogEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => Ok(entries.len().to_string()),
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok("No injection attempts recorded.".to_string());
                }

                let mut builder = Builder::default();
                builder.push_record(["Timestamp", "Source", "Pattern"]);
                for entry in entries {
                    builder.push_record([
                        entry.timestamp.to_rfc3339(),
                        entry.source.clone(),
                        entry.pattern.clone(),
                    ]);
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a response security audit.
    pub fn format_audit(&self, audit: &SecurityAudit) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "safe": audit.safe,
                    "issues": audit.issues,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(if audit.safe { "safe" } else { "unsafe" }.to_string()),
            OutputFormat::Table => {
                if audit.safe {
                    Ok(self.success("Response passed the security audit"))
                } else {
                    let mut lines = vec![self.error("Response raised security issues:")];
                    for issue in &audit.issues {
                        lines.push(format!("  - {}", issue));
                    }
                    Ok(lines.join("\n"))
                }
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "gray" => text.dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Truncate content for table cells.
fn excerpt(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use palisade_domain::SourceRegistry;
    use palisade_sanitizer::SanitizationPipeline;

    fn sanitize_result() -> SanitizeResult {
        SanitizationPipeline::new(SourceRegistry::default())
            .sanitize("Portal is best!", "reddit")
    }

    #[test]
    fn test_json_format_sanitize() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_sanitize(&sanitize_result()).unwrap();
        assert!(output.contains("\"was_modified\": true"));
        assert!(output.contains("\"tier\": 4"));
    }

    #[test]
    fn test_quiet_format_sanitize_is_sanitized_text_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_sanitize(&sanitize_result()).unwrap();
        assert!(output.starts_with("[Unverified user claims:]"));
        assert!(!output.contains("Source tier"));
    }

    #[test]
    fn test_table_format_sanitize() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_sanitize(&sanitize_result()).unwrap();
        assert!(output.contains("Source tier: 4"));
        assert!(output.contains("claims:]"));
    }

    #[test]
    fn test_empty_chunks_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_chunks(&[]).unwrap();
        assert!(output.contains("No chunks to rank"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        let long = "a".repeat(60);
        let cut = excerpt(&long, 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with('…'));
    }
}
