//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let registry = config.build_registry();
    let tier = registry.classify(&args.label);
    println!("{}", formatter.format_tier(&args.label, tier)?);
    Ok(())
}
