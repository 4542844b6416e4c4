// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Records: tolerant normalization of genealogy records.
//!
//! Records arrive from hand-edited exports, web tooling and the Sosa page exporter, each
//! with its own field vocabulary. This crate turns any of those documents into a flat
//! sequence of canonical [`Person`] values keyed by their Ahnentafel (Sosa) number,
//! where the parents of person `k` are `2k` and `2k + 1`.
//!
//! - [`normalize`](normalize::normalize) accepts a top-level array, an object with a
//!   `people` or `records` array, or a single record object.
//! - Identifiers are read from `id`, `ID`, `Id`, `sosa` or `Sosa` and coerced to a
//!   number. Items without a usable identifier are dropped silently.
//! - Display fields are resolved through the static [`FIELD_KEYS`] table, so adding a
//!   vocabulary is a data change, not a code change.
//! - [`sosa`] parses the tab-separated Sosa page format into exportable rows.
//!
//! Normalization does not deduplicate; keying by identifier happens in `pedigree_tree`.
//!
//! # Example
//!
//! ```rust
//! use pedigree_records::normalize::normalize;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "people": [
//!         { "Sosa": 1, "Nom": "Jean" },
//!         { "id": "2", "name": "Louis", "birthPlace": "Nantes" },
//!         { "note": "no identifier, dropped" },
//!     ]
//! });
//!
//! let people = normalize(&doc);
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[0].name, "Jean");
//! assert_eq!(people[1].birth_place, "Nantes");
//! assert_eq!(people[1].death_date, "");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod normalize;
pub mod sosa;
mod types;

pub use types::{FIELD_KEYS, Field, Person};
