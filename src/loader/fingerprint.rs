//! BLAKE3 fingerprint of a data directory

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use blake3::Hasher;
use walkdir::WalkDir;

use super::{is_data_file, is_skipped};
use crate::error::{AvkgError, Result};

/// Hash prefix for fingerprints
pub const HASH_PREFIX: &str = "blake3:";

/// Hash every data file below `root`.
///
/// Files are visited in sorted path order and each contributes its relative
/// path and contents, so the result only changes when the data does.
pub fn fingerprint(root: &Path) -> Result<String> {
    if !root.is_dir() {
        return Err(AvkgError::DataDirNotFound {
            path: root.display().to_string(),
        });
    }

    let mut hasher = Hasher::new();
    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_data_file(entry.path()) {
            files.push(entry);
        }
    }

    files.sort_by_key(|e| e.path().to_path_buf());

    for entry in files {
        let file_path = entry.path();

        let relative_path = file_path
            .strip_prefix(root)
            .unwrap_or(file_path)
            .to_string_lossy();
        hasher.update(relative_path.as_bytes());
        hasher.update(b"\0");

        let file = File::open(file_path).map_err(|e| AvkgError::FileReadFailed {
            path: file_path.display().to_string(),
            reason: e.to_string(),
        })?;
        io::copy(&mut BufReader::new(file), &mut hasher).map_err(|e| {
            AvkgError::FileReadFailed {
                path: file_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        hasher.update(b"\0");
    }

    Ok(format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex()))
}
