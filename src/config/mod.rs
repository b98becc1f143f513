//! Configuration file handling for avkg
//!
//! This module contains:
//! - [`settings`]: `avkg.yaml` data structures and validation
//! - [`loading`]: locating and reading the config file, resolving the data directory

pub mod loading;
pub mod settings;

pub use loading::{CONFIG_FILE, LoadedConfig, load, resolve_data_dir};
pub use settings::{Config, DiagnosisSettings, Vocabulary};
