//! Error types and handling for avkg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for avkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum AvkgError {
    // Data directory errors
    #[error("Data directory not found: {path}")]
    #[diagnostic(
        code(avkg::data::not_found),
        help("Pass --data-dir, set AVKG_DATA_DIR, or set data_dir in avkg.yaml")
    )]
    DataDirNotFound { path: String },

    #[error("No data directory configured")]
    #[diagnostic(
        code(avkg::data::not_set),
        help("Pass --data-dir, set AVKG_DATA_DIR, or set data_dir in avkg.yaml")
    )]
    DataDirNotSet,

    #[error("Unexpected file in data directory: {path}")]
    #[diagnostic(
        code(avkg::data::unexpected_file),
        help("Data directories may only contain .json files and subdirectories")
    )]
    UnexpectedDataFile { path: String },

    #[error("Failed to parse data file {path}: {reason}")]
    #[diagnostic(
        code(avkg::data::parse_failed),
        help("Expected {{\"head\": {{\"relation\": \"tail\" | [\"tail\", ...]}}}}")
    )]
    DataParseFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(avkg::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(avkg::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(avkg::config::invalid))]
    ConfigInvalid { message: String },

    // Query errors
    #[error("Search needs at least one of --head, --relation or --tail")]
    #[diagnostic(code(avkg::query::empty))]
    EmptyQuery,

    // Diagnosis errors
    #[error("Invalid score for '{item}': {score}")]
    #[diagnostic(
        code(avkg::diagnosis::invalid_score),
        help("Scores must be numbers from 0 to 1000000")
    )]
    InvalidScore { item: String, score: f64 },

    #[error("Invalid symptom: {input}")]
    #[diagnostic(
        code(avkg::diagnosis::invalid_symptom),
        help("Use the form \"description=score\", e.g. --symptom \"dry skin=7\"")
    )]
    InvalidSymptom { input: String },

    #[error("Unknown position: {position}")]
    #[diagnostic(
        code(avkg::diagnosis::unknown_position),
        help("Known positions: {available}")
    )]
    UnknownPosition { position: String, available: String },

    #[error("Expected {expected} scores from the collector, got {actual}")]
    #[diagnostic(code(avkg::diagnosis::collector_mismatch))]
    CollectorMismatch { expected: usize, actual: usize },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(avkg::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(avkg::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(avkg::fs::io_error))]
    IoError { message: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(avkg::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for AvkgError {
    fn from(err: std::io::Error) -> Self {
        AvkgError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AvkgError {
    fn from(err: serde_yaml::Error) -> Self {
        AvkgError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AvkgError {
    fn from(err: serde_json::Error) -> Self {
        AvkgError::DataParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for AvkgError {
    fn from(err: walkdir::Error) -> Self {
        AvkgError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AvkgError {
    fn from(err: inquire::InquireError) -> Self {
        AvkgError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AvkgError>;
