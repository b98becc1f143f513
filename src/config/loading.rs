//! Locating and reading avkg.yaml
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>` / `AVKG_CONFIG` (must exist)
//! 2. `<data dir>/avkg.yaml`, when a data directory was given
//! 3. `<user config dir>/avkg/avkg.yaml`
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Config;
use crate::error::{AvkgError, Result};

/// Config filename
pub const CONFIG_FILE: &str = "avkg.yaml";

/// A parsed config and the file it came from, if any
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: Option<PathBuf>,
}

/// Load configuration following the lookup order above
pub fn load(explicit: Option<&Path>, data_dir: Option<&Path>) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AvkgError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        return load_file(path);
    }

    let candidates = data_dir
        .map(|dir| dir.join(CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            return load_file(&candidate);
        }
        debug!(path = %candidate.display(), "no config file");
    }

    Ok(LoadedConfig::default())
}

fn load_file(path: &Path) -> Result<LoadedConfig> {
    let content = fs::read_to_string(path).map_err(|e| AvkgError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let config = Config::from_yaml(&content).map_err(|e| match e {
        AvkgError::ConfigParseFailed { reason, .. } => AvkgError::ConfigParseFailed {
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })?;

    debug!(path = %path.display(), "loaded config");
    Ok(LoadedConfig {
        config,
        path: Some(path.to_path_buf()),
    })
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("avkg").join(CONFIG_FILE))
}

/// Pick the data directory: the CLI value wins over the config file's.
///
/// A relative `data_dir` from the config file is taken relative to that file.
/// Existing directories are canonicalized.
pub fn resolve_data_dir(cli: Option<&Path>, loaded: &LoadedConfig) -> Result<PathBuf> {
    let dir = match (cli, loaded.config.data_dir.as_deref()) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) if dir.is_relative() => loaded
            .path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| dir.to_path_buf(), |base| base.join(dir)),
        (None, Some(dir)) => dir.to_path_buf(),
        (None, None) => return Err(AvkgError::DataDirNotSet),
    };

    if !dir.is_dir() {
        return Err(AvkgError::DataDirNotFound {
            path: dir.display().to_string(),
        });
    }

    Ok(dunce::canonicalize(&dir)?)
}
