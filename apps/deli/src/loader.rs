//! # Window Loader
//!
//! Enumerates and reads window records from disk.
//!
//! A data directory holds one JSON record per window, named `<index>.json`
//! with indices `0..n` and no gaps. Other files are ignored.

use deli_core::{DeliError, WindowInput, WindowRecord};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum size of a single window record (256 MB).
const MAX_WINDOW_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Maximum size of a ground-truth file (16 MB).
const MAX_GROUND_TRUTH_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a file after checking it is a regular file within `max_size` bytes.
fn read_bounded(path: &Path, max_size: u64) -> Result<Vec<u8>, DeliError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        DeliError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !metadata.is_file() {
        return Err(DeliError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    if metadata.len() > max_size {
        return Err(DeliError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }

    std::fs::read(path)
        .map_err(|e| DeliError::IoError(format!("Read '{}': {}", path.display(), e)))
}

// =============================================================================
// WINDOW ENUMERATION
// =============================================================================

/// List the window files of `dir` in index order.
///
/// Returns an error if the indices do not form the contiguous range `0..n`.
pub fn list_windows(dir: &Path) -> Result<Vec<PathBuf>, DeliError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        DeliError::IoError(format!("Cannot read directory '{}': {}", dir.display(), e))
    })?;

    let mut indexed = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| DeliError::IoError(format!("Read directory entry: {}", e)))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(index) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<usize>().ok())
        else {
            tracing::debug!("Skipping non-window file {:?}", path);
            continue;
        };
        indexed.push((index, path));
    }

    indexed.sort_by_key(|(index, _)| *index);

    for (expected, (index, _)) in indexed.iter().enumerate() {
        if *index != expected {
            return Err(DeliError::IoError(format!(
                "Missing window file {}.json in '{}'",
                expected,
                dir.display()
            )));
        }
    }

    Ok(indexed.into_iter().map(|(_, path)| path).collect())
}

/// Read and validate one window record.
pub fn load_window(path: &Path) -> Result<WindowInput, DeliError> {
    let bytes = read_bounded(path, MAX_WINDOW_FILE_SIZE)?;
    WindowRecord::from_json(&bytes)?.into_input()
}

// =============================================================================
// GROUND TRUTH
// =============================================================================

/// Read a ground-truth file: a JSON array with one 0/1 flag per window.
pub fn load_ground_truth(path: &Path) -> Result<Vec<bool>, DeliError> {
    let bytes = read_bounded(path, MAX_GROUND_TRUTH_FILE_SIZE)?;
    let flags: Vec<u8> = serde_json::from_slice(&bytes)
        .map_err(|e| DeliError::SerializationError(format!("Ground truth: {}", e)))?;

    flags
        .into_iter()
        .enumerate()
        .map(|(i, flag)| match flag {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DeliError::SerializationError(format!(
                "Ground truth entry {} must be 0 or 1, got {}",
                i, other
            ))),
        })
        .collect()
}
