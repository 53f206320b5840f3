//! Port traits defining external boundaries.
//!
//! The only boundary is the randomness source that supplies UUIDs.
//! Implementations live in `src/adapters/`.

pub mod uuid_source;

pub use uuid_source::UuidSource;
