//! Loading a knowledge graph from a directory of JSON files
//!
//! ## Layout
//!
//! ```text
//! data/
//! ├── taste.json            heads are "is of" taste
//! ├── diagnosis/            category "diagnosis"
//! │   ├── skin.json         skin "is of" diagnosis; heads "is of" skin
//! │   └── tongue.json
//! └── food/
//!     └── grain/            grain "is of" food
//!         └── rice.json     rice "is of" grain; heads "is of" rice
//! ```
//!
//! Each file contributes its facts with the file stem as the category of its
//! heads. Directories become categories of the files and directories they
//! contain. Hidden entries are skipped; any other non-JSON file is an error.

pub mod fingerprint;
pub mod format;

pub use fingerprint::fingerprint;

use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::CONFIG_FILE;
use crate::error::{AvkgError, Result};
use crate::graph::{Fact, KnowledgeGraph};
use crate::ui::{LoadReporter, SilentReporter};

/// What a directory load touched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub files: usize,
    pub directories: usize,
    pub facts: usize,
}

/// Load a fresh graph from `root` using the default subcategory relation
pub fn load_dir(root: &Path) -> Result<KnowledgeGraph> {
    let mut kg = KnowledgeGraph::new();
    load_dir_into(&mut kg, root, &mut SilentReporter)?;
    Ok(kg)
}

/// Load every data file below `root` into `kg`
pub fn load_dir_into(
    kg: &mut KnowledgeGraph,
    root: &Path,
    reporter: &mut dyn LoadReporter,
) -> Result<LoadSummary> {
    match walk(kg, root, reporter) {
        Ok(summary) => {
            reporter.finish();
            info!(
                root = %root.display(),
                files = summary.files,
                facts = summary.facts,
                "loaded knowledge graph"
            );
            Ok(summary)
        }
        Err(e) => {
            reporter.abandon();
            Err(e)
        }
    }
}

fn walk(
    kg: &mut KnowledgeGraph,
    root: &Path,
    reporter: &mut dyn LoadReporter,
) -> Result<LoadSummary> {
    if !root.is_dir() {
        return Err(AvkgError::DataDirNotFound {
            path: root.display().to_string(),
        });
    }

    let subcategory = kg.subcategory_relation().clone();
    let facts_before = kg.len();
    let mut summary = LoadSummary::default();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        // Files and directories directly under root have no parent category
        let parent = (entry.depth() >= 2)
            .then(|| path.parent().and_then(Path::file_name))
            .flatten()
            .map(|name| name.to_string_lossy().into_owned());

        if entry.file_type().is_dir() {
            summary.directories += 1;
            if let Some(parent) = parent {
                let name = entry.file_name().to_string_lossy();
                debug!(category = %name, parent = %parent, "nested category");
                kg.add(Fact::new(name.as_ref(), subcategory.clone(), parent));
            }
            continue;
        }

        if !is_data_file(path) {
            return Err(AvkgError::UnexpectedDataFile {
                path: path.display().to_string(),
            });
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(parent) = parent {
            kg.add(Fact::new(stem.as_str(), subcategory.clone(), parent));
        }

        let added = update_from_file(kg, path, &stem)?;
        reporter.file_loaded(path, added);
        summary.files += 1;
    }

    summary.facts = kg.len() - facts_before;
    Ok(summary)
}

/// Add the facts of one data file to `kg`, filing every head under `category`.
///
/// Returns the number of facts read from the file.
pub fn update_from_file(kg: &mut KnowledgeGraph, path: &Path, category: &str) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| AvkgError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let data = format::parse(&content).map_err(|e| AvkgError::DataParseFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let subcategory = kg.subcategory_relation().clone();
    let mut count = 0;
    for (head, relations) in data {
        kg.add(Fact::new(head.as_str(), subcategory.clone(), category));
        count += 1;
        for (relation, tails) in relations {
            for tail in tails.iter() {
                kg.add(Fact::new(head.as_str(), relation.as_str(), tail.as_str()));
                count += 1;
            }
        }
    }

    debug!(path = %path.display(), category, facts = count, "read data file");
    Ok(count)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Hidden entries, and the config file sitting at the data root
pub(crate) fn is_skipped(entry: &DirEntry) -> bool {
    is_hidden(entry) || (entry.depth() == 1 && entry.file_name() == CONFIG_FILE)
}

pub(crate) fn is_data_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
