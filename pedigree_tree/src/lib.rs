// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Tree: ancestor trees inferred from Ahnentafel numbering.
//!
//! The records carry no parent or child references. Ancestry is inferred from the
//! identifiers alone: the parents of person `k` are `2k` (left) and `2k + 1` (right).
//!
//! - [`PersonMap`]: flat store keyed by identifier, last write wins on duplicates.
//! - [`PersonMap::root_id`]: `1` when present, otherwise the smallest identifier.
//! - [`PersonMap::build_tree`]: recursive construction by index lookup. Missing
//!   identifiers end a branch; a missing left parent never prevents the right one.
//! - [`TreeNode`]: an owned copy of each person with its resolved generation and
//!   its zero, one or two built parents.
//!
//! Generations are taken from the record when present and otherwise inherited as
//! `child + 1`, starting at [`ROOT_GENERATION`] for the root.
//!
//! Sparse identifier spaces are the normal case: most pedigrees thin out after a
//! few generations. Cycles cannot occur because identifiers strictly grow with depth.
//!
//! # Example
//!
//! ```rust
//! use pedigree_records::Person;
//! use pedigree_tree::PersonMap;
//!
//! let store: PersonMap = [1, 2, 3, 4, 5].into_iter().map(Person::new).collect();
//! let tree = store.build_tree().unwrap();
//!
//! let ids: Vec<u64> = tree.children().iter().map(|n| n.id()).collect();
//! assert_eq!(ids, [2, 3]);
//! assert_eq!(tree.children()[0].children().len(), 2);
//! assert!(tree.children()[1].children().is_empty());
//! assert_eq!(tree.find(5).unwrap().generation(), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod tree;
mod types;

pub use error::BuildError;
pub use tree::{PersonMap, ROOT_GENERATION, build_tree};
pub use types::{TreeNode, parent_ids};
