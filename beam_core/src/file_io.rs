//! # File I/O Module
//!
//! Reads solve requests from disk and writes responses back:
//! - **Request loading**: read a JSON request document into a [`SolveRequest`]
//! - **Atomic saves**: write to `.tmp`, sync, rename so a reader never sees a
//!   half-written response
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::file_io::{load_request, save_json};
//! use std::path::Path;
//!
//! let request = load_request(Path::new("beam.json"))?;
//! let response = request.solve()?;
//! save_json(&response, Path::new("beam.out.json"), true)?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::payload::SolveRequest;

/// Read a file to a string
pub fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    Ok(contents)
}

/// Load a solve request from a JSON file.
///
/// # Returns
///
/// * `Ok(SolveRequest)` - Parsed request (defaults are applied when solving)
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_request(path: &Path) -> CalcResult<SolveRequest> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        CalcError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Save any serializable value as JSON with atomic write semantics.
///
/// The save process:
/// 1. Serialize to JSON (pretty or compact)
/// 2. Write to a temporary file next to the target
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over the target
pub fn save_json<T: Serialize>(value: &T, path: &Path, pretty: bool) -> CalcResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!("wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}

/// Temporary sibling path used during an atomic save
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut tmp_path = path.to_path_buf();
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    tmp_path.set_extension(extension);
    tmp_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{respond, SolveOutcome};
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/path/to/out.json")),
            Path::new("/path/to/out.json.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("/path/to/out")), Path::new("/path/to/out.tmp"));
    }

    #[test]
    fn test_load_request() {
        let path = temp_path("request");
        fs::write(
            &path,
            r#"{"beamType":"cantilever","beam":{"length":3},"loads":[{"type":"point","P":600,"x":3}]}"#,
        )
        .unwrap();

        let request = load_request(&path).unwrap();
        assert_eq!(request.beam_type(), "cantilever");
        assert_eq!(request.solve().unwrap().reactions.ra, 600.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_request(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{ nope").unwrap();

        let err = load_request(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let outcome = respond(r#"{"beam":{"length":2}}"#);

        save_json(&outcome, &path, false).unwrap();

        assert!(!tmp_path_for(&path).exists());
        let written: SolveOutcome = serde_json::from_str(&read_to_string(&path).unwrap()).unwrap();
        match (written, outcome) {
            (SolveOutcome::Solved(written), SolveOutcome::Solved(original)) => {
                assert_eq!(written.reactions, original.reactions);
                assert_eq!(written.x.len(), original.x.len());
                assert_eq!(written.x.last(), Some(&2.0));
            }
            other => panic!("unexpected outcomes: {other:?}"),
        }

        let _ = fs::remove_file(&path);
    }
}
