//! Sanitize command implementation.

use crate::cli::SanitizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use palisade_sanitizer::{InjectionLog, SanitizationPipeline};

/// Execute the sanitize command.
pub fn execute_sanitize(args: SanitizeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let content = super::read_input(args.content)?;
    let pipeline = SanitizationPipeline::new(config.build_registry());

    let result = pipeline.sanitize(&content, &args.source);
    println!("{}", formatter.format_sanitize(&result)?);

    if args.log {
        let mut log = InjectionLog::new();
        log.log_attempt(pipeline.detector(), &content, &args.source);
        println!("{}", formatter.format_log_entries(&log.entries())?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_sanitize_command_runs() {
        let args = SanitizeArgs {
            content: Some("Portal is best!".to_string()),
            source: "reddit".to_string(),
            log: true,
        };
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_sanitize(args, &config, &formatter).is_ok());
    }
}
