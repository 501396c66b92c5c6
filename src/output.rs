//! JSON output

use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};

/// Pretty-print with two-space indentation.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize `value` and write it to `path`, replacing any existing file.
///
/// Parent directories are not created; a missing directory is a write error.
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_json(value)?;
    tokio::fs::write(path, json.as_bytes())
        .await
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(())
}
