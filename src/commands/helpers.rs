//! Command helper utilities

use std::path::PathBuf;

use console::Term;
use tracing::debug;

use crate::ayurveda::Ayurveda;
use crate::cli::GlobalArgs;
use crate::config::{self, Config};
use crate::error::Result;
use crate::graph::KnowledgeGraph;
use crate::loader;
use crate::ui::{LoadReporter, SilentReporter, SpinnerReporter};

/// Everything a command needs: resolved config, data directory and graph
pub struct Context {
    pub config: Config,
    pub data_dir: PathBuf,
    pub kg: KnowledgeGraph,
}

impl Context {
    /// Resolve configuration and load the knowledge graph
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let loaded = config::load(global.config.as_deref(), global.data_dir.as_deref())?;
        let data_dir = config::resolve_data_dir(global.data_dir.as_deref(), &loaded)?;
        debug!(
            data_dir = %data_dir.display(),
            config = ?loaded.path,
            "resolved context"
        );

        let config = loaded.config;
        let mut kg = KnowledgeGraph::with_subcategory_relation(config.vocabulary.subcategory.as_str());

        // The spinner would interleave with tracing output, and is noise when piped
        let mut reporter: Box<dyn LoadReporter> = if global.verbose || !Term::stderr().is_term() {
            Box::new(SilentReporter)
        } else {
            Box::new(SpinnerReporter::new())
        };
        loader::load_dir_into(&mut kg, &data_dir, reporter.as_mut())?;

        Ok(Self {
            config,
            data_dir,
            kg,
        })
    }

    /// Start a diagnosis session over the loaded graph
    pub fn into_session(self) -> Ayurveda {
        Ayurveda::from_config(self.kg, &self.config)
    }
}
