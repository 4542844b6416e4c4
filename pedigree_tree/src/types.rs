// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the ancestor tree: Ahnentafel arithmetic and materialized nodes.

use alloc::vec::Vec;

use pedigree_records::Person;
use serde::Serialize;

/// Identifiers of the two parents of `id`, left (`2·id`) then right (`2·id + 1`).
///
/// A parent whose identifier does not fit in `u64` is `None`.
#[inline]
pub fn parent_ids(id: u64) -> [Option<u64>; 2] {
    let left = id.checked_mul(2);
    [left, left.and_then(|l| l.checked_add(1))]
}

/// A materialized tree node.
///
/// Holds its own copy of the person, so the tree and the flat [`PersonMap`](crate::PersonMap)
/// never share state. `children` holds only parents that exist in the data, left before
/// right, so a node has zero, one or two children and never a placeholder.
///
/// Serializes as the flattened person (with the resolved generation) plus a
/// `children` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    #[serde(flatten)]
    person: Person,
    #[serde(skip)]
    generation: u32,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a node from a copy of `person`, stamping the resolved generation.
    pub(crate) fn new(mut person: Person, generation: u32, children: Vec<Self>) -> Self {
        debug_assert!(children.len() <= 2, "a person has at most two parents");
        person.generation = Some(generation);
        Self {
            person,
            generation,
            children,
        }
    }

    /// The Ahnentafel identifier of this node.
    #[inline]
    pub fn id(&self) -> u64 {
        self.person.id
    }

    /// The person copied into this node. Its `generation` is the resolved one.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Resolved generation: the stored one when present, else inherited from the child.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Built parents, left before right.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns true if at least one parent was built.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth `1`.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Find the node with identifier `id` in this subtree.
    pub fn find(&self, id: u64) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Pre-order iterator over this subtree, left before right.
    pub fn iter(&self) -> impl Iterator<Item = &Self> + '_ {
        let mut stack = alloc::vec![self];
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}
