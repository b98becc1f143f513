//! avkg - Ayurveda knowledge graph
//!
//! Loads a directory of JSON facts into an indexed knowledge graph, answers
//! fact and category queries, and runs a symptom-based dosha diagnosis with
//! food suggestions.
//!
//! ```rust,no_run
//! use avkg::graph::FactPattern;
//!
//! let kg = avkg::loader::load_dir(std::path::Path::new("data"))?;
//! for fact in kg.exact_search(&FactPattern::new().relation("pacifies").tail("vata")) {
//!     println!("{fact}");
//! }
//! # Ok::<(), avkg::error::AvkgError>(())
//! ```

pub mod ayurveda;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod ui;
