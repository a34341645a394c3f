//! Audit command implementation.

use crate::cli::AuditArgs;
use crate::error::Result;
use crate::output::Formatter;
use palisade_assembler::ResponseAuditor;

/// Execute the audit command.
///
/// The audit is advisory, so the exit code stays zero either way; callers
/// inspect the printed verdict.
pub fn execute_audit(args: AuditArgs, formatter: &Formatter) -> Result<()> {
    let response = super::read_input(args.response)?;
    let audit = ResponseAuditor::new().audit(&response);
    println!("{}", formatter.format_audit(&audit)?);
    Ok(())
}
