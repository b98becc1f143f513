//! Presentation layer
//!
//! This module handles:
//! - Progress reporting while a data directory is loaded
//! - Styled terminal output of facts, entities and diagnoses (see [`display`])
//!
//! Loading reports through the [`LoadReporter`] trait so the CLI can show a
//! spinner while tests and verbose runs stay silent.

pub mod display;

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for data directory loading
pub trait LoadReporter {
    /// A data file was parsed and `facts` facts were read from it
    fn file_loaded(&mut self, path: &Path, facts: usize);

    /// Loading completed
    fn finish(&mut self);

    /// Loading failed
    fn abandon(&mut self);
}

/// Spinner shown on stderr while files are loaded
pub struct SpinnerReporter {
    spinner: ProgressBar,
    files: usize,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Loading knowledge graph");

        Self { spinner, files: 0 }
    }
}

impl Default for SpinnerReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadReporter for SpinnerReporter {
    fn file_loaded(&mut self, path: &Path, _facts: usize) {
        self.files += 1;
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        self.spinner
            .set_message(format!("Loading knowledge graph ({} files) {name}", self.files));
    }

    fn finish(&mut self) {
        self.spinner.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.spinner.abandon();
    }
}

/// No-op reporter for tests and verbose runs, where tracing output is used instead
#[derive(Debug, Default)]
pub struct SilentReporter;

impl LoadReporter for SilentReporter {
    fn file_loaded(&mut self, _path: &Path, _facts: usize) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
