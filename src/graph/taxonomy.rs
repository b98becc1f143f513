//! Category hierarchy queries
//!
//! Facts of the form `(child, <subcategory relation>, parent)` form a tree
//! (or, with bad data, a graph) of categories. [`KnowledgeGraph::objects`]
//! returns the leaves below a category.

use std::collections::BTreeSet;

use super::{Entity, KnowledgeGraph};

impl KnowledgeGraph {
    /// Direct subcategories of `category`
    pub fn subcategories(&self, category: &str) -> BTreeSet<&Entity> {
        self.facts_by_tail(category)
            .iter()
            .filter(|fact| fact.relation == self.subcategory)
            .map(|fact| &fact.head)
            .collect()
    }

    /// Leaf objects below `category`.
    ///
    /// A category without subcategories is its own leaf, so an unknown name
    /// comes back as a single-element set. Categories already visited during
    /// the walk contribute nothing, which keeps cyclic data finite.
    pub fn objects(&self, category: &str) -> BTreeSet<Entity> {
        let mut visited = BTreeSet::new();
        let mut leaves = BTreeSet::new();
        self.collect_leaves(category, &mut visited, &mut leaves);
        leaves
    }

    fn collect_leaves(
        &self,
        category: &str,
        visited: &mut BTreeSet<String>,
        leaves: &mut BTreeSet<Entity>,
    ) {
        if !visited.insert(category.to_string()) {
            return;
        }

        let children = self.subcategories(category);
        if children.is_empty() {
            leaves.insert(Entity::new(category));
            return;
        }

        for child in children {
            self.collect_leaves(child.name(), visited, leaves);
        }
    }
}
