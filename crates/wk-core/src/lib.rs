//! # wk-core
//!
//! Typed records and decoding for the WaniKani v2 API.
//!
//! This crate provides the value types shared by the client and its callers:
//! - Entity structs for assignments, level progressions, and reviews
//! - The subject hierarchy (radical, kanji, vocabulary) as a tagged enum
//! - Envelope decoding via the [`Record`](decode::Record) trait
//! - The exact-format timestamp parser used by every timestamp field
//! - [`DecodeError`](errors::DecodeError)
//!
//! Decoding is pure: no I/O, no shared state, same input yields the same record.

pub mod decode;
pub mod entities;
pub mod errors;
pub mod timestamp;

pub use decode::{Envelope, Record};
pub use errors::DecodeError;
