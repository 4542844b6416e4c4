// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Disclosure state: the override mapping plus the render pass and toggle protocol.
//!
//! ## Usage
//!
//! 1) After a load, call [`DisclosureState::reset`] with the root identifier.
//! 2) On each render, call [`DisclosureState::visible_rows`] to get the rows to draw.
//! 3) When the user activates a row, call [`DisclosureState::toggle`] (or
//!    [`DisclosureState::toggle_showing`] if the row state is already known), then render again.
//!
//! ## Minimal example
//!
//! ```
//! use pedigree_disclosure::state::DisclosureState;
//! use pedigree_disclosure::types::Disclosure;
//! use pedigree_records::Person;
//! use pedigree_tree::build_tree;
//!
//! let tree = build_tree([1, 2, 3].map(Person::new)).unwrap();
//! let mut state = DisclosureState::default();
//! state.reset(tree.id());
//!
//! let rows = state.visible_rows(&tree);
//! assert_eq!(rows.len(), 3);
//!
//! // The root is showing its parents, so toggling collapses it.
//! assert_eq!(state.toggle(&tree, 1), Some(Disclosure::Collapse));
//! assert_eq!(state.visible_rows(&tree).len(), 1);
//! ```

use alloc::vec::Vec;
use core::ops::ControlFlow;

use pedigree_tree::TreeNode;

use crate::types::{DEFAULT_DEPTH, Decision, Disclosure, Overrides, RowFlags, VisibleRow};

/// Override mapping together with the default depth budget.
///
/// The state never looks at tree positions: every read and write goes through the
/// node identifier, so one [`DisclosureState`] can be applied to any rebuild of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureState {
    overrides: Overrides,
    default_depth: u32,
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl DisclosureState {
    /// Create a state with no overrides. `default_depth` is floored at `1`.
    pub fn new(default_depth: u32) -> Self {
        Self {
            overrides: Overrides::new(),
            default_depth: default_depth.max(1),
        }
    }

    /// Budget handed to the root on each render pass.
    pub fn default_depth(&self) -> u32 {
        self.default_depth
    }

    /// Current override mapping.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Replace the mapping with `{root: Expand}`. Called once per successful load.
    pub fn reset(&mut self, root: u64) {
        self.overrides = Overrides::for_root(root);
    }

    /// Write an explicit state for `id`, returning the previous one.
    pub fn set_override(&mut self, id: u64, disclosure: Disclosure) -> Option<Disclosure> {
        tracing::debug!(id, ?disclosure, "set disclosure override");
        self.overrides.set(id, disclosure)
    }

    /// Apply the disclosure rule to `node` given the budget inherited from its child row.
    pub fn decide(&self, node: &TreeNode, inherited: u32) -> Decision {
        Decision::new(
            node.has_children(),
            inherited,
            self.overrides.get(node.id()),
            self.default_depth,
        )
    }

    /// Rows to render for `root`, depth-first with left parents before right parents.
    ///
    /// Hidden subtrees produce no rows.
    pub fn visible_rows(&self, root: &TreeNode) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let _ = self.walk(root, |_, row| {
            rows.push(row);
            ControlFlow::<()>::Continue(())
        });
        rows
    }

    /// The rendered row for `id`, if that node is currently visible.
    pub fn row(&self, root: &TreeNode, id: u64) -> Option<VisibleRow> {
        match self.walk(root, |node, row| {
            if node.id() == id {
                ControlFlow::Break(row)
            } else {
                ControlFlow::Continue(())
            }
        }) {
            ControlFlow::Break(row) => Some(row),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Toggle the node `id` as rendered for `root`.
    ///
    /// A node showing its children becomes [`Disclosure::Collapse`]; any other node
    /// becomes [`Disclosure::Expand`]. Returns the written state, or `None` if `id` is
    /// not currently rendered (nothing is written then).
    pub fn toggle(&mut self, root: &TreeNode, id: u64) -> Option<Disclosure> {
        let row = self.row(root, id)?;
        Some(self.toggle_showing(id, row.is_expanded()))
    }

    /// Toggle `id` given whether it currently shows its children, and return the
    /// written state. Only the entry for `id` changes.
    pub fn toggle_showing(&mut self, id: u64, showing: bool) -> Disclosure {
        let next = if showing {
            Disclosure::Collapse
        } else {
            Disclosure::Expand
        };
        self.set_override(id, next);
        next
    }

    /// Pre-order walk over rendered nodes, stopping early when `visit` breaks.
    fn walk<B>(
        &self,
        root: &TreeNode,
        mut visit: impl FnMut(&TreeNode, VisibleRow) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let mut stack: Vec<(&TreeNode, u32, u32)> = alloc::vec![(root, self.default_depth, 0)];
        while let Some((node, inherited, level)) = stack.pop() {
            let decision = self.decide(node, inherited);
            let mut flags = RowFlags::empty();
            flags.set(RowFlags::HAS_CHILDREN, node.has_children());
            flags.set(RowFlags::EXPANDED, decision.shows_children);
            visit(
                node,
                VisibleRow {
                    id: node.id(),
                    level,
                    generation: node.generation(),
                    effective_depth: decision.effective_depth,
                    flags,
                },
            )?;
            if decision.shows_children {
                for child in node.children().iter().rev() {
                    stack.push((child, decision.child_budget, level + 1));
                }
            }
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_records::Person;
    use pedigree_tree::build_tree;

    fn tree(ids: &[u64]) -> TreeNode {
        build_tree(ids.iter().copied().map(Person::new)).unwrap()
    }

    fn loaded(tree: &TreeNode) -> DisclosureState {
        let mut state = DisclosureState::default();
        state.reset(tree.id());
        state
    }

    fn visible_ids(state: &DisclosureState, tree: &TreeNode) -> Vec<u64> {
        state.visible_rows(tree).iter().map(|r| r.id).collect()
    }

    #[test]
    fn default_horizon_is_four_generations() {
        // Left-most chain of five generations.
        let chain = tree(&[1, 2, 4, 8, 16]);
        let state = loaded(&chain);
        let rows = state.visible_rows(&chain);
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 4, 8]);
        let levels: Vec<u32> = rows.iter().map(|r| r.level).collect();
        assert_eq!(levels, [0, 1, 2, 3]);
        let last = rows[3];
        assert!(last.is_expandable(), "8 has a hidden parent");
        assert!(!last.is_expanded());
        assert_eq!(last.effective_depth, 1);
    }

    #[test]
    fn no_overrides_behaves_like_root_expand() {
        let chain = tree(&[1, 2, 4, 8, 16]);
        let state = DisclosureState::default();
        assert_eq!(visible_ids(&state, &chain), [1, 2, 4, 8]);
    }

    #[test]
    fn small_tree_shows_leaves_without_affordance() {
        let t = tree(&[1, 2, 3]);
        let rows = loaded(&t).visible_rows(&t);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].is_expanded());
        for leaf in &rows[1..] {
            assert_eq!(leaf.flags, RowFlags::empty());
        }
    }

    #[test]
    fn expanding_beyond_the_horizon() {
        let chain = tree(&[1, 2, 4, 8, 16, 32]);
        let mut state = loaded(&chain);
        assert_eq!(state.toggle(&chain, 8), Some(Disclosure::Expand));
        // 8 gets a fresh budget of four: 8, 16, 32.
        assert_eq!(visible_ids(&state, &chain), [1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn collapsing_within_the_horizon() {
        let t = tree(&[1, 2, 3, 4, 5, 6, 7]);
        let mut state = loaded(&t);
        assert_eq!(state.toggle(&t, 2), Some(Disclosure::Collapse));
        assert_eq!(visible_ids(&state, &t), [1, 2, 3, 6, 7]);
        let row = state.row(&t, 2).unwrap();
        assert!(row.is_expandable());
        assert!(!row.is_expanded());
    }

    #[test]
    fn toggle_twice_returns_to_collapse() {
        let chain = tree(&[1, 2, 4, 8, 16]);
        let mut state = loaded(&chain);
        let before: Vec<(u64, Disclosure)> = state.overrides().iter().collect();

        assert_eq!(state.toggle(&chain, 8), Some(Disclosure::Expand));
        assert_eq!(state.toggle(&chain, 8), Some(Disclosure::Collapse));
        assert_eq!(state.overrides().get(8), Some(Disclosure::Collapse));

        let others: Vec<(u64, Disclosure)> =
            state.overrides().iter().filter(|(id, _)| *id != 8).collect();
        assert_eq!(others, before, "other entries must not change");
    }

    #[test]
    fn toggling_a_hidden_node_writes_nothing() {
        let chain = tree(&[1, 2, 4, 8, 16]);
        let mut state = loaded(&chain);
        assert_eq!(state.toggle(&chain, 16), None);
        assert_eq!(state.toggle(&chain, 99), None);
        assert_eq!(state.overrides().len(), 1);
    }

    #[test]
    fn toggling_a_leaf_expands_it() {
        let t = tree(&[1, 2]);
        let mut state = loaded(&t);
        assert_eq!(state.toggle(&t, 2), Some(Disclosure::Expand));
        assert_eq!(visible_ids(&state, &t), [1, 2]);
    }

    #[test]
    fn collapsed_root_shows_only_itself() {
        let t = tree(&[1, 2, 3]);
        let mut state = loaded(&t);
        state.set_override(1, Disclosure::Collapse);
        assert_eq!(visible_ids(&state, &t), [1]);
    }

    #[test]
    fn overrides_survive_a_rebuild() {
        let first = tree(&[1, 2, 3, 4, 5]);
        let mut state = loaded(&first);
        state.toggle(&first, 2);
        let rebuilt = tree(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(visible_ids(&state, &rebuilt), [1, 2, 3, 6]);
    }

    #[test]
    fn reset_discards_previous_overrides() {
        let t = tree(&[1, 2, 3]);
        let mut state = loaded(&t);
        state.toggle(&t, 1);
        state.reset(1);
        assert_eq!(
            state.overrides().iter().collect::<Vec<_>>(),
            [(1, Disclosure::Expand)]
        );
    }

    #[test]
    fn custom_default_depth() {
        let chain = tree(&[1, 2, 4, 8]);
        let state = DisclosureState::new(2);
        assert_eq!(visible_ids(&state, &chain), [1, 2]);
        assert_eq!(DisclosureState::new(0).default_depth(), 1);
    }

    #[test]
    fn rows_carry_generation() {
        let t = tree(&[3, 6, 7]);
        let rows = loaded(&t).visible_rows(&t);
        let generations: Vec<u32> = rows.iter().map(|r| r.generation).collect();
        assert_eq!(generations, [1, 2, 2]);
    }
}
