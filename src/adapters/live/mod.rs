//! Live adapters for real external interactions.

pub mod uuid_source;

pub use uuid_source::LiveUuidSource;
