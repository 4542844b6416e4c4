// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for disclosure: override states, the per-node decision, and rendered rows.
//!
//! ## Overview
//!
//! These types describe the disclosure protocol and its outputs.
//! They are produced by [`DisclosureState`](crate::state::DisclosureState) and consumed
//! by presentation layers.

use alloc::collections::BTreeMap;

/// Number of generations shown below (and including) the root by default.
pub const DEFAULT_DEPTH: u32 = 4;

/// An explicit user choice for one node.
///
/// Absence of an entry in [`Overrides`] means the node follows its inherited budget.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Disclosure {
    /// Show the node's children with a fresh default budget.
    Expand,
    /// Hide the node's children.
    Collapse,
}

/// Per-identifier override mapping.
///
/// This is the only persisted UI state. It is keyed by identifier, never by tree
/// position, so it survives tree rebuilds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: BTreeMap<u64, Disclosure>,
}

impl Overrides {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The mapping installed on every new load: `{root: Expand}`.
    pub fn for_root(root: u64) -> Self {
        let mut overrides = Self::new();
        overrides.set(root, Disclosure::Expand);
        overrides
    }

    /// Explicit state for `id`, if any.
    pub fn get(&self, id: u64) -> Option<Disclosure> {
        self.entries.get(&id).copied()
    }

    /// Write the state for `id`, returning the previous one.
    pub fn set(&mut self, id: u64, disclosure: Disclosure) -> Option<Disclosure> {
        self.entries.insert(id, disclosure)
    }

    /// Number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no node carries an override.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, Disclosure)> + '_ {
        self.entries.iter().map(|(id, d)| (*id, *d))
    }
}

impl FromIterator<(u64, Disclosure)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (u64, Disclosure)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Outcome of the disclosure rule for one node.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decision {
    /// Generations visible from this node down, at least `1`.
    pub effective_depth: u32,
    /// Whether the node's children are rendered.
    pub shows_children: bool,
    /// Budget inherited by each child when shown.
    pub child_budget: u32,
}

impl Decision {
    /// Apply the disclosure rule.
    ///
    /// - `Collapse` gives an effective depth of `1`.
    /// - `Expand` gives `default_depth`.
    /// - No override gives the inherited budget, floored at `1`.
    ///
    /// Children are shown when the node has any and the effective depth exceeds `1`.
    pub fn new(
        has_children: bool,
        inherited: u32,
        over: Option<Disclosure>,
        default_depth: u32,
    ) -> Self {
        let effective_depth = match over {
            Some(Disclosure::Collapse) => 1,
            Some(Disclosure::Expand) => default_depth.max(1),
            None => inherited.max(1),
        };
        Self {
            effective_depth,
            shows_children: has_children && effective_depth > 1,
            child_budget: effective_depth.saturating_sub(1),
        }
    }
}

bitflags::bitflags! {
    /// Affordance flags of a rendered row.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// The node has at least one built parent.
        const HAS_CHILDREN = 0b0000_0001;
        /// The node's parents are currently rendered.
        const EXPANDED     = 0b0000_0010;
    }
}

/// One rendered node, produced by
/// [`DisclosureState::visible_rows`](crate::state::DisclosureState::visible_rows).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VisibleRow {
    /// Identifier of the node.
    pub id: u64,
    /// Distance from the root; the root is level `0`.
    pub level: u32,
    /// Resolved generation of the node.
    pub generation: u32,
    /// Effective depth computed for this node.
    pub effective_depth: u32,
    /// Affordance flags.
    pub flags: RowFlags,
}

impl VisibleRow {
    /// Returns true if the node's children are rendered.
    pub fn is_expanded(&self) -> bool {
        self.flags.contains(RowFlags::EXPANDED)
    }

    /// Returns true if the node has children to reveal or hide.
    pub fn is_expandable(&self) -> bool {
        self.flags.contains(RowFlags::HAS_CHILDREN)
    }
}
