//! UUID source port for producing random identifiers.

use uuid::Uuid;

/// Supplies random 128-bit identifiers.
///
/// Abstracting the source allows deterministic output by substituting
/// recorded UUIDs during tests and cassette playback.
pub trait UuidSource: Send + Sync {
    /// Returns the next identifier.
    ///
    /// # Errors
    ///
    /// Returns an error when a non-live source cannot produce an identifier.
    fn next_uuid(&self) -> Result<Uuid, String>;
}
