//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::LiveUuidSource;
use crate::adapters::recording::RecordingUuidSource;
use crate::adapters::replaying::ReplayingUuidSource;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::UuidSource;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Source of the identifiers to render.
    pub uuids: Box<dyn UuidSource>,
}

impl ServiceContext {
    /// Creates a live context backed by the OS randomness source.
    #[must_use]
    pub fn live() -> Self {
        Self { uuids: Box::new(LiveUuidSource::new()) }
    }

    /// Creates a context around an arbitrary source.
    #[must_use]
    pub fn with_source(uuids: Box<dyn UuidSource>) -> Self {
        Self { uuids }
    }

    /// Creates a recording context using live adapters.
    ///
    /// The cassette is written to `path` when the returned session is
    /// finished, which must happen after this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn recording_at(path: &Path) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(path)?;
        let ctx = Self {
            uuids: Box::new(RecordingUuidSource::new(
                Box::new(LiveUuidSource::new()),
                std::sync::Arc::clone(&session.uuid_source),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_file(path)?;
        Ok(Self { uuids: Box::new(ReplayingUuidSource::new(replayer)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[test]
    fn replaying_context_serves_recorded_uuid() {
        let dir = std::env::temp_dir().join("ble_uuid_ctx_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ctx.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "ctx");
        recorder.record_output(
            "uuid_source",
            "next_uuid",
            json!("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
        );
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert_eq!(
            ctx.uuids.next_uuid().unwrap().to_string(),
            "6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn recording_context_writes_cassette_after_drop() {
        let dir = std::env::temp_dir().join("ble_uuid_ctx_record_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ctx.cassette.yaml");

        let (ctx, session) = ServiceContext::recording_at(&path).unwrap();
        let uuid = ctx.uuids.next_uuid().unwrap();
        drop(ctx);
        session.finish().unwrap();

        let replayed = ServiceContext::replaying(&path).unwrap();
        assert_eq!(replayed.uuids.next_uuid().unwrap(), uuid);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_missing_cassette_fails() {
        let path = std::env::temp_dir().join("ble_uuid_ctx_missing.cassette.yaml");
        assert!(ServiceContext::replaying(&path).is_err());
    }
}
