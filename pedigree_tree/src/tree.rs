// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core builder: the keyed person store, root selection, and recursive construction.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use pedigree_records::Person;

use crate::error::BuildError;
use crate::types::{TreeNode, parent_ids};

/// Generation assigned to the root when it carries none.
pub const ROOT_GENERATION: u32 = 1;

/// Flat person store keyed by Ahnentafel identifier.
///
/// This is the only input of tree construction. Insertion is last-write-wins, so
/// feeding normalized records in input order keeps the later duplicate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonMap {
    people: BTreeMap<u64, Person>,
}

impl PersonMap {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key `people` by identifier; later entries replace earlier ones.
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut map = Self::new();
        for person in people {
            map.insert(person);
        }
        map
    }

    /// Insert a person, returning the one it replaced.
    pub fn insert(&mut self, person: Person) -> Option<Person> {
        let replaced = self.people.insert(person.id, person);
        if let Some(old) = &replaced {
            tracing::trace!(id = old.id, "duplicate identifier, keeping the later record");
        }
        replaced
    }

    /// Look up a person by identifier.
    pub fn get(&self, id: u64) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Returns true if `id` is present.
    pub fn contains(&self, id: u64) -> bool {
        self.people.contains_key(&id)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the store holds no person.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.values()
    }

    /// Select the root: `1` when present, else the smallest identifier.
    pub fn root_id(&self) -> Option<u64> {
        if self.contains(1) {
            return Some(1);
        }
        self.people.keys().next().copied()
    }

    /// Build the ancestor tree from the selected root.
    ///
    /// Fails with [`BuildError::NoRoot`] on an empty store.
    pub fn build_tree(&self) -> Result<TreeNode, BuildError> {
        let root = self.root_id().ok_or(BuildError::NoRoot)?;
        tracing::debug!(root, people = self.len(), "selected root");
        let tree = self.build_from(root, ROOT_GENERATION)?;
        tracing::debug!(
            nodes = tree.node_count(),
            depth = tree.depth(),
            "built ancestor tree"
        );
        Ok(tree)
    }

    /// Build the subtree rooted at `id` with `generation` as its inherited generation.
    ///
    /// Fails with [`BuildError::RootMissing`] if `id` is not in the store.
    pub fn build_from(&self, id: u64, generation: u32) -> Result<TreeNode, BuildError> {
        self.build_node(id, generation)
            .ok_or(BuildError::RootMissing { id })
    }

    // Recursion depth is bounded by the bit width of the identifier, since
    // identifiers at least double at each level.
    fn build_node(&self, id: u64, inherited: u32) -> Option<TreeNode> {
        let person = self.people.get(&id)?;
        let next = inherited.saturating_add(1);
        let children: Vec<TreeNode> = parent_ids(id)
            .into_iter()
            .flatten()
            .filter_map(|parent| self.build_node(parent, next))
            .collect();
        let generation = person.generation.unwrap_or(inherited);
        Some(TreeNode::new(person.clone(), generation, children))
    }
}

impl FromIterator<Person> for PersonMap {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self::from_people(iter)
    }
}

/// Key `people` by identifier and build the ancestor tree in one step.
pub fn build_tree(people: impl IntoIterator<Item = Person>) -> Result<TreeNode, BuildError> {
    PersonMap::from_people(people).build_tree()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_records::Field;

    fn people(ids: &[u64]) -> PersonMap {
        ids.iter().map(|id| Person::new(*id)).collect()
    }

    fn ids(nodes: &[TreeNode]) -> Vec<u64> {
        nodes.iter().map(TreeNode::id).collect()
    }

    #[test]
    fn root_is_one_when_present() {
        assert_eq!(people(&[3, 1, 2]).root_id(), Some(1));
    }

    #[test]
    fn root_is_minimum_without_one() {
        assert_eq!(people(&[7, 3, 5]).root_id(), Some(3));
        assert_eq!(people(&[]).root_id(), None);
    }

    #[test]
    fn empty_store_has_no_root() {
        assert_eq!(people(&[]).build_tree(), Err(BuildError::NoRoot));
    }

    #[test]
    fn missing_start_is_reported() {
        assert_eq!(
            people(&[1]).build_from(2, 2),
            Err(BuildError::RootMissing { id: 2 })
        );
    }

    #[test]
    fn five_person_shape() {
        let tree = people(&[1, 2, 3, 4, 5]).build_tree().unwrap();
        assert_eq!(tree.id(), 1);
        assert_eq!(ids(tree.children()), [2, 3]);
        assert_eq!(ids(tree.children()[0].children()), [4, 5]);
        assert!(tree.children()[1].children().is_empty());
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn missing_left_parent_keeps_right() {
        let tree = people(&[1, 3, 7]).build_tree().unwrap();
        assert_eq!(ids(tree.children()), [3]);
        assert_eq!(ids(tree.children()[0].children()), [7]);
    }

    #[test]
    fn gaps_cut_branches() {
        // 4 is unreachable without 2.
        let tree = people(&[1, 3, 4]).build_tree().unwrap();
        assert_eq!(tree.node_count(), 2);
        assert!(tree.find(4).is_none());
    }

    #[test]
    fn minimum_root_without_one() {
        let tree = people(&[3, 6, 7, 5]).build_tree().unwrap();
        assert_eq!(tree.id(), 3);
        assert_eq!(ids(tree.children()), [6, 7]);
        assert!(tree.find(5).is_none(), "5 is not an ancestor of 3");
    }

    #[test]
    fn generations_are_inferred() {
        let tree = people(&[1, 2, 3, 4, 7]).build_tree().unwrap();
        assert_eq!(tree.generation(), 1);
        assert_eq!(tree.find(2).unwrap().generation(), 2);
        assert_eq!(tree.find(3).unwrap().generation(), 2);
        assert_eq!(tree.find(4).unwrap().generation(), 3);
        assert_eq!(tree.find(7).unwrap().generation(), 3);
    }

    #[test]
    fn explicit_generation_overrides_only_that_node() {
        let mut map = people(&[1, 2, 4]);
        let mut two = Person::new(2);
        two.generation = Some(10);
        map.insert(two);
        let tree = map.build_tree().unwrap();
        assert_eq!(tree.generation(), 1);
        assert_eq!(tree.find(2).unwrap().generation(), 10);
        // Inheritance follows the position, not the overridden value.
        assert_eq!(tree.find(4).unwrap().generation(), 3);
    }

    #[test]
    fn zero_generation_is_kept() {
        let mut root = Person::new(1);
        root.generation = Some(0);
        let tree = build_tree([root]).unwrap();
        assert_eq!(tree.generation(), 0);
    }

    #[test]
    fn last_write_wins() {
        let map = PersonMap::from_people([
            Person::new(1).with(Field::Name, "first"),
            Person::new(2),
            Person::new(1).with(Field::Name, "second"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(1).unwrap().name, "second");
    }

    #[test]
    fn tree_is_independent_of_the_store() {
        let map = people(&[1, 2]);
        let tree = map.build_tree().unwrap();
        assert_eq!(tree.person().generation, Some(1));
        assert_eq!(map.get(1).unwrap().generation, None, "store must not be stamped");
    }

    #[test]
    fn pre_order_iteration() {
        let tree = people(&[1, 2, 3, 4, 5, 6]).build_tree().unwrap();
        let order: Vec<u64> = tree.iter().map(TreeNode::id).collect();
        assert_eq!(order, [1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn deep_chain_near_the_identifier_limit() {
        let chain: Vec<u64> = (0..64).map(|bit| 1_u64 << bit).collect();
        let tree = people(&chain).build_tree().unwrap();
        assert_eq!(tree.depth(), 64);
        assert_eq!(tree.find(1 << 63).unwrap().generation(), 64);
    }

    #[test]
    fn serializes_flattened_with_children() {
        let tree = people(&[1, 3]).build_tree().unwrap();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["generation"], 1);
        assert_eq!(json["children"][0]["id"], 3);
        assert_eq!(json["children"][0]["generation"], 2);
        assert_eq!(json["children"][0]["children"].as_array().unwrap().len(), 0);
    }
}
