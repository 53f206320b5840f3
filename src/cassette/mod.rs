//! Cassette format for recording and replaying port interactions.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

/// Port name used for UUID source interactions.
pub const UUID_SOURCE_PORT: &str = "uuid_source";

/// Method name used for UUID source interactions.
pub const NEXT_UUID_METHOD: &str = "next_uuid";
