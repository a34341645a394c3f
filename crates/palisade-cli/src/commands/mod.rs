//! Command implementations.

pub mod assemble;
pub mod audit;
pub mod check;
pub mod classify;
pub mod freshness;
pub mod rank;
pub mod sanitize;

pub use self::assemble::execute_assemble;
pub use self::audit::execute_audit;
pub use self::check::execute_check;
pub use self::classify::execute_classify;
pub use self::freshness::execute_freshness;
pub use self::rank::execute_rank;
pub use self::sanitize::execute_sanitize;

use crate::error::Result;
use std::io::Read;

/// Take content from the argument, or read it from stdin when omitted.
pub(crate) fn read_input(arg: Option<String>) -> Result<String> {
    match arg {
        Some(content) => Ok(content),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end_matches('\n').to_string())
        }
    }
}
