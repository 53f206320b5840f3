//! Generation of a single `BLE_UUID128_INIT` macro line.

use std::io::{self, Write};

use crate::context::ServiceContext;
use crate::macro_line::MacroLine;

/// Draw one UUID from the context and print its macro line to stdout.
///
/// # Errors
///
/// Returns an error string if the UUID source fails or stdout cannot be written.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(ctx, &mut out)
}

/// Draw one UUID from the context and write its macro line to `out`.
///
/// # Errors
///
/// Returns an error string if the UUID source fails or `out` cannot be written.
pub fn run_with_writer<W: Write>(ctx: &ServiceContext, out: &mut W) -> Result<(), String> {
    let uuid = ctx.uuids.next_uuid()?;
    let line = MacroLine::from_uuid(uuid);
    writeln!(out, "{line}")
        .and_then(|()| out.flush())
        .map_err(|e| format!("Failed to write macro line: {e}"))
}
