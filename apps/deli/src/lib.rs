//! # deli
//!
//! Batch driver around `deli-core`: enumerates window records on disk, loads
//! configuration, runs the detector window by window and reports the result.

pub mod cli;
pub mod config;
pub mod loader;
pub mod report;
