//! # Formats Module
//!
//! Serialized forms of window graphs.
//!
//! File enumeration and I/O live in the app layer; this module only converts
//! between bytes and validated in-memory types.

mod record;

pub use record::*;
