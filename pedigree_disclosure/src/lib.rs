// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Disclosure: depth-bounded progressive disclosure for ancestor trees.
//!
//! ## Overview
//!
//! A pedigree doubles in width with every generation, so only the first few are shown
//! by default. This crate decides, for every node, whether its parents are rendered.
//! It does no drawing; presentation layers consume [`VisibleRow`](types::VisibleRow)
//! values and report user toggles back.
//!
//! ## The rule
//!
//! Each node receives an inherited budget from the row below it. The root receives
//! [`DEFAULT_DEPTH`](types::DEFAULT_DEPTH) (four generations).
//!
//! - An explicit [`Collapse`](types::Disclosure::Collapse) gives an effective depth of `1`.
//! - An explicit [`Expand`](types::Disclosure::Expand) restarts the budget at the default.
//! - Otherwise the inherited budget is used, floored at `1`: a node past the horizon
//!   still renders itself, just not its parents.
//!
//! Parents are shown when the node has any and the effective depth exceeds `1`; each
//! then inherits `effective depth - 1`.
//!
//! ## Toggling
//!
//! Toggling a node that shows its parents writes `Collapse`; toggling any other node
//! writes `Expand`. Toggles are available everywhere, so users can open branches past
//! the default horizon or close branches within it.
//!
//! ## State lifetime
//!
//! Overrides are keyed by identifier and live in [`DisclosureState`](state::DisclosureState),
//! outside the tree. They survive rebuilds and are reset to `{root: Expand}` on each
//! new load via [`DisclosureState::reset`](state::DisclosureState::reset).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod state;
pub mod types;
