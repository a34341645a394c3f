//! Palisade Assembler
//!
//! Builds the final prompt context behind an explicit trust boundary and
//! audits outgoing model responses.
//!
//! Sanitized content and ranked chunks are partitioned into a verified
//! section (tier 1-2 sources) and a user-contributed section (tier 3-4 or
//! untagged), each behind a labeled banner; a fixed security preamble is
//! prepended ahead of the host's base prompt. The response audit is
//! advisory: it reports weak signals (preamble leakage, role confusion,
//! jailbreak acknowledgment) and never blocks a response itself.

#![warn(missing_docs)]

mod audit;
mod prompt;

pub use audit::{ResponseAuditor, SecurityAudit};
pub use prompt::{TrustBoundaryAssembler, SECURITY_PREAMBLE};
