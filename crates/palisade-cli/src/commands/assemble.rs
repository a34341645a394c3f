//! Assemble command implementation.

use crate::cli::AssembleArgs;
use crate::error::Result;
use palisade_assembler::TrustBoundaryAssembler;
use std::collections::HashMap;
use std::fs;

/// Execute the assemble command.
///
/// Prints the assembled prompt verbatim; it is meant to be piped onward, so
/// no formatting or coloring is applied.
pub fn execute_assemble(args: AssembleArgs) -> Result<()> {
    let context = match &args.context {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let tiers: HashMap<String, u8> = args.tiers.into_iter().collect();
    let assembler = TrustBoundaryAssembler::new();

    let prompt = assembler.build_secure_system_prompt(
        &args.base,
        context.as_deref(),
        if tiers.is_empty() { None } else { Some(&tiers) },
    );

    println!("{}", prompt);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_with_context_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("context.txt");
        fs::write(&path, "[Source: capitalone]\nThe fee is $395.").unwrap();

        let args = AssembleArgs {
            base: "You help with points.".to_string(),
            context: Some(path),
            tiers: vec![("capitalone".to_string(), 1)],
        };
        assert!(execute_assemble(args).is_ok());
    }

    #[test]
    fn test_assemble_missing_context_file_is_an_error() {
        let args = AssembleArgs {
            base: "Base.".to_string(),
            context: Some("/nonexistent/context.txt".into()),
            tiers: Vec::new(),
        };
        assert!(execute_assemble(args).is_err());
    }
}
