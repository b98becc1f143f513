//! On-disk shape of a data file
//!
//! Keys are heads; each head maps relation names to one tail or a list of
//! tails:
//!
//! ```json
//! {
//!     "sweet": { "component": ["earth", "water"] },
//!     "salty": { "pacifies": "vata" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

/// Parsed data file: head → relation → tails
pub type DataFile = BTreeMap<String, BTreeMap<String, Tails>>;

/// A single tail or a list of tails
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tails {
    One(String),
    Many(Vec<String>),
}

impl Tails {
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        match self {
            Tails::One(tail) => std::slice::from_ref(tail).iter(),
            Tails::Many(tails) => tails.iter(),
        }
    }
}

/// Parse the contents of a data file
pub fn parse(content: &str) -> serde_json::Result<DataFile> {
    serde_json::from_str(content)
}
