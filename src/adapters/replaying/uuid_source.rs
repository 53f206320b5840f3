//! Replaying adapter for the `UuidSource` port.

use std::sync::Mutex;

use uuid::Uuid;

use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::{NEXT_UUID_METHOD, UUID_SOURCE_PORT};
use crate::ports::UuidSource;

/// Replays recorded UUIDs from a cassette.
pub struct ReplayingUuidSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingUuidSource {
    /// Creates a new replaying UUID source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl UuidSource for ReplayingUuidSource {
    fn next_uuid(&self) -> Result<Uuid, String> {
        let output = {
            let mut replayer =
                self.replayer.lock().map_err(|e| format!("Replayer lock poisoned: {e}"))?;
            replayer.next_interaction(UUID_SOURCE_PORT, NEXT_UUID_METHOD)?.output.clone()
        };
        let text = output
            .as_str()
            .ok_or_else(|| format!("uuid_source::next_uuid: expected string output, got {output}"))?;
        Uuid::parse_str(text).map_err(|e| format!("uuid_source::next_uuid: invalid UUID {text:?}: {e}"))
    }
}
