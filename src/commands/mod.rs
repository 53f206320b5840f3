//! Command dispatch and handlers.

pub mod generate;

use crate::context::ServiceContext;

/// Generate one macro line on stdout from the OS randomness source.
///
/// # Errors
///
/// Returns an error string if generation fails.
pub fn dispatch() -> Result<(), String> {
    generate::run(&ServiceContext::live())
}
