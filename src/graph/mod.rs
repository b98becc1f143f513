//! Knowledge graph core types
//!
//! A knowledge graph is the triple (E, R, F) of entities, relations and facts,
//! where each fact is a (head, relation, tail) triple with head and tail in E
//! and relation in R.
//!
//! ## Structure
//!
//! ```text
//! KnowledgeGraph
//!   ├── entities     BTreeSet<Entity>
//!   ├── relations    BTreeSet<Relation>
//!   ├── facts        BTreeSet<Fact>
//!   └── indexes      head → facts, relation → facts, tail → facts
//! ```
//!
//! All collections are ordered so that query results and CLI output are
//! deterministic.
//!
//! See "A Survey on Knowledge Graphs: Representation, Acquisition and
//! Applications" (arXiv:2002.00388), section II.B.

pub mod search;
pub mod taxonomy;

pub use search::FactPattern;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::AddAssign;

/// Relation linking a subcategory (head) to its parent category (tail)
pub const SUBCATEGORY_RELATION: &str = "is of";

static EMPTY_FACTS: BTreeSet<Fact> = BTreeSet::new();

/// A named node of the graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(String);

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this entity answers to `name`.
    ///
    /// Matching is exact; there is no similarity model behind it.
    pub fn is_like(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Entity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Entity {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A named edge label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Relation(String);

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this relation answers to `name` (exact match).
    pub fn is_like(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Relation {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Relation {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A (head, relation, tail) triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    pub head: Entity,
    pub relation: Relation,
    pub tail: Entity,
}

impl Fact {
    pub fn new(
        head: impl Into<Entity>,
        relation: impl Into<Relation>,
        tail: impl Into<Entity>,
    ) -> Self {
        Self {
            head: head.into(),
            relation: relation.into(),
            tail: tail.into(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} --> {}", self.head, self.relation, self.tail)
    }
}

/// Counts reported by [`KnowledgeGraph::stats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub entities: usize,
    pub relations: usize,
    pub facts: usize,
}

/// Indexed fact store
#[derive(Debug, Clone)]
pub struct KnowledgeGraph {
    entities: BTreeSet<Entity>,
    relations: BTreeSet<Relation>,
    facts: BTreeSet<Fact>,

    head_index: BTreeMap<Entity, BTreeSet<Fact>>,
    relation_index: BTreeMap<Relation, BTreeSet<Fact>>,
    tail_index: BTreeMap<Entity, BTreeSet<Fact>>,

    subcategory: Relation,
}

impl Default for KnowledgeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeGraph {
    /// Create an empty graph using the default subcategory relation
    pub fn new() -> Self {
        Self::with_subcategory_relation(SUBCATEGORY_RELATION)
    }

    /// Create an empty graph whose category hierarchy is built from `relation`
    pub fn with_subcategory_relation(relation: impl Into<Relation>) -> Self {
        Self {
            entities: BTreeSet::new(),
            relations: BTreeSet::new(),
            facts: BTreeSet::new(),
            head_index: BTreeMap::new(),
            relation_index: BTreeMap::new(),
            tail_index: BTreeMap::new(),
            subcategory: relation.into(),
        }
    }

    pub fn entities(&self) -> &BTreeSet<Entity> {
        &self.entities
    }

    pub fn relations(&self) -> &BTreeSet<Relation> {
        &self.relations
    }

    pub fn facts(&self) -> &BTreeSet<Fact> {
        &self.facts
    }

    /// Relation used for "X is a subcategory of Y" facts
    pub fn subcategory_relation(&self) -> &Relation {
        &self.subcategory
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            entities: self.entities.len(),
            relations: self.relations.len(),
            facts: self.facts.len(),
        }
    }

    /// Add a fact, registering its entities and relation.
    ///
    /// Returns `false` if the fact was already present.
    pub fn add(&mut self, fact: Fact) -> bool {
        if self.facts.contains(&fact) {
            return false;
        }

        self.entities.insert(fact.head.clone());
        self.entities.insert(fact.tail.clone());
        self.relations.insert(fact.relation.clone());

        self.head_index
            .entry(fact.head.clone())
            .or_default()
            .insert(fact.clone());
        self.relation_index
            .entry(fact.relation.clone())
            .or_default()
            .insert(fact.clone());
        self.tail_index
            .entry(fact.tail.clone())
            .or_default()
            .insert(fact.clone());

        self.facts.insert(fact);
        true
    }

    /// Add every fact of `other` to this graph
    pub fn merge(&mut self, other: &KnowledgeGraph) {
        for fact in &other.facts {
            self.add(fact.clone());
        }
    }

    pub fn facts_by_head(&self, head: &str) -> &BTreeSet<Fact> {
        self.head_index
            .get(&Entity::new(head))
            .unwrap_or(&EMPTY_FACTS)
    }

    pub fn facts_by_relation(&self, relation: &str) -> &BTreeSet<Fact> {
        self.relation_index
            .get(&Relation::new(relation))
            .unwrap_or(&EMPTY_FACTS)
    }

    pub fn facts_by_tail(&self, tail: &str) -> &BTreeSet<Fact> {
        self.tail_index
            .get(&Entity::new(tail))
            .unwrap_or(&EMPTY_FACTS)
    }
}

impl AddAssign<&KnowledgeGraph> for KnowledgeGraph {
    fn add_assign(&mut self, other: &KnowledgeGraph) {
        self.merge(other);
    }
}

impl AddAssign<KnowledgeGraph> for KnowledgeGraph {
    fn add_assign(&mut self, other: KnowledgeGraph) {
        self.extend(other.facts);
    }
}

impl Extend<Fact> for KnowledgeGraph {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        for fact in iter {
            self.add(fact);
        }
    }
}

impl FromIterator<Fact> for KnowledgeGraph {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        let mut kg = Self::new();
        kg.extend(iter);
        kg
    }
}

#[cfg(test)]
pub(crate) fn sample_graph() -> KnowledgeGraph {
    [
        Fact::new("sweet", "component", "earth"),
        Fact::new("sweet", "component", "water"),
        Fact::new("sour", "component", "earth"),
        Fact::new("sour", "component", "fire"),
        Fact::new("sweet", SUBCATEGORY_RELATION, "taste"),
        Fact::new("sour", SUBCATEGORY_RELATION, "taste"),
    ]
    .into_iter()
    .collect()
}
