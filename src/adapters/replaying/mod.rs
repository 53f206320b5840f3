//! Replaying adapters that serve recorded interactions.

pub mod uuid_source;

pub use uuid_source::ReplayingUuidSource;
