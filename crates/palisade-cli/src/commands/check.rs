//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use palisade_sanitizer::SanitizationPipeline;

/// Execute the check command.
///
/// Returns whether the content passed the gate; the caller turns an unsafe
/// verdict into a non-zero exit code.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let content = super::read_input(args.content)?;
    let pipeline = SanitizationPipeline::new(config.build_registry());

    let safe = pipeline.is_safe(&content);
    if safe {
        println!("{}", formatter.success("No injection signatures matched"));
    } else {
        println!("{}", formatter.error("Injection signatures matched"));
    }

    Ok(safe)
}
