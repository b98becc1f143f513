//! Fact search over a [`KnowledgeGraph`]
//!
//! Two strategies are offered:
//!
//! - **exact**: intersects the head/relation/tail indexes. Cheap even on
//!   large graphs, but only matches names exactly.
//! - **fuzzy**: scans every fact and asks each component whether it
//!   `is_like` the query. Slower, but the only path that will pick up a
//!   looser notion of similarity should `is_like` ever grow one.

use std::collections::BTreeSet;

use super::{Fact, KnowledgeGraph};

/// A (head?, relation?, tail?) query; `None` components match anything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactPattern {
    pub head: Option<String>,
    pub relation: Option<String>,
    pub tail: Option<String>,
}

impl FactPattern {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    #[must_use]
    pub fn relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    #[must_use]
    pub fn tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// True when no component is constrained
    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.relation.is_none() && self.tail.is_none()
    }

    /// Whether `fact` satisfies every constrained component
    pub fn matches(&self, fact: &Fact) -> bool {
        self.head.as_deref().is_none_or(|h| fact.head.is_like(h))
            && self
                .relation
                .as_deref()
                .is_none_or(|r| fact.relation.is_like(r))
            && self.tail.as_deref().is_none_or(|t| fact.tail.is_like(t))
    }
}

impl KnowledgeGraph {
    /// Index-backed search.
    ///
    /// Returns the facts present in the index bucket of every constrained
    /// component. An unconstrained pattern returns nothing.
    pub fn exact_search(&self, pattern: &FactPattern) -> BTreeSet<&Fact> {
        let mut buckets: Vec<&BTreeSet<Fact>> = Vec::with_capacity(3);
        if let Some(head) = pattern.head.as_deref() {
            buckets.push(self.facts_by_head(head));
        }
        if let Some(relation) = pattern.relation.as_deref() {
            buckets.push(self.facts_by_relation(relation));
        }
        if let Some(tail) = pattern.tail.as_deref() {
            buckets.push(self.facts_by_tail(tail));
        }

        // Probe from the smallest bucket
        buckets.sort_by_key(|bucket| bucket.len());
        let Some((smallest, rest)) = buckets.split_first() else {
            return BTreeSet::new();
        };

        smallest
            .iter()
            .filter(|fact| rest.iter().all(|bucket| bucket.contains(*fact)))
            .collect()
    }

    /// Full scan using `is_like` on each constrained component.
    ///
    /// An unconstrained pattern returns every fact.
    pub fn fuzzy_search(&self, pattern: &FactPattern) -> BTreeSet<&Fact> {
        self.facts.iter().filter(|f| pattern.matches(f)).collect()
    }
}
