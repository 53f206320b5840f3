//! Live adapter for the `UuidSource` port.

use uuid::Uuid;

use crate::ports::UuidSource;

/// Live source that draws random version 4 UUIDs from the OS.
///
/// A failing OS randomness source panics inside `uuid`; that is left to
/// terminate the process.
#[derive(Debug, Default)]
pub struct LiveUuidSource;

impl LiveUuidSource {
    /// Creates a new live UUID source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl UuidSource for LiveUuidSource {
    fn next_uuid(&self) -> Result<Uuid, String> {
        Ok(Uuid::new_v4())
    }
}
