//! Command implementations for the avkg CLI

pub mod completions;
pub mod diagnose;
pub mod food;
pub mod helpers;
pub mod objects;
pub mod search;
pub mod stats;
pub mod version;
