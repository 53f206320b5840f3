//! Recording adapter for the `UuidSource` port.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::record_output;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::{NEXT_UUID_METHOD, UUID_SOURCE_PORT};
use crate::ports::UuidSource;

/// Records UUID source interactions while delegating to an inner implementation.
pub struct RecordingUuidSource {
    inner: Box<dyn UuidSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingUuidSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn UuidSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl UuidSource for RecordingUuidSource {
    fn next_uuid(&self) -> Result<Uuid, String> {
        let uuid = self.inner.next_uuid()?;
        record_output(
            &self.recorder,
            UUID_SOURCE_PORT,
            NEXT_UUID_METHOD,
            &uuid.hyphenated().to_string(),
        )?;
        Ok(uuid)
    }
}
