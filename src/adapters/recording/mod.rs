//! Recording adapters that capture interactions to cassettes.

pub mod uuid_source;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use uuid_source::RecordingUuidSource;

/// Record the output of an argument-less port call.
///
/// # Errors
///
/// Returns an error if the output cannot be serialized or the recorder lock
/// is poisoned.
pub(crate) fn record_output<O: Serialize>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    output: &O,
) -> Result<(), String> {
    let output_json = serde_json::to_value(output)
        .map_err(|e| format!("Failed to serialize {port}::{method} output: {e}"))?;

    recorder
        .lock()
        .map_err(|e| format!("Recorder lock poisoned: {e}"))?
        .record_output(port, method, output_json);
    Ok(())
}
