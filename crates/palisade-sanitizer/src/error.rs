//! Sanitizer error types

use thiserror::Error;

/// Errors that can occur while constructing sanitizer components
///
/// Scanning and sanitizing never fail: malformed or empty content flows
/// through the pipeline and degrades safely. Errors exist only at
/// construction time, where caller-supplied configuration is compiled.
#[derive(Error, Debug)]
pub enum SanitizerError {
    /// A caller-supplied signature failed to compile
    #[error("Invalid custom pattern '{name}': {reason}")]
    InvalidPattern {
        /// Name of the offending signature
        name: String,
        /// Why compilation failed
        reason: String,
    },
}
