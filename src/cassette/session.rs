//! Recording session owning the cassette recorder shared with adapters.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Owns the recorder that recording adapters write into.
///
/// Adapters hold clones of the `Arc`; all of them must be dropped before
/// [`RecordingSession::finish`] can write the cassette.
pub struct RecordingSession {
    /// Recorder for UUID source interactions.
    pub uuid_source: Arc<Mutex<CassetteRecorder>>,
    path: PathBuf,
}

impl RecordingSession {
    /// Create a session that will write its cassette to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory of `path` does not exist.
    pub fn new(path: &Path) -> Result<Self, String> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                return Err(format!("Cassette directory does not exist: {}", parent.display()));
            }
        }

        let name = format!("{}-uuid_source", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        Ok(Self {
            uuid_source: Arc::new(Mutex::new(CassetteRecorder::new(path, name))),
            path: path.to_path_buf(),
        })
    }

    /// Finish the recorder and write the cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder or the
    /// cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.uuid_source)
            .map_err(|_| "Recording adapter for uuid_source still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for uuid_source poisoned: {e}"))?;
        recorder
            .finish()
            .map_err(|e| format!("Failed to write cassette {}: {e}", self.path.display()))
    }
}
