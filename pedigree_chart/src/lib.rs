// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pedigree Chart: loading, configuration and text presentation for ancestor charts.
//!
//! ## Overview
//!
//! This crate ties the pipeline together:
//!
//! - [`source`]: where the genealogy document comes from ([`FileSource`], an in-memory
//!   [`StaticSource`], and `HttpSource` behind the `http` feature).
//! - [`loader`]: the single in-flight load that fetches, decodes, normalizes and builds
//!   the tree, then resets the disclosure overrides.
//! - [`config`]: defaults and `PEDIGREE_*` environment overrides.
//! - [`render`]: one indented text line per visible row.
//! - [`export`]: conversion of a Sosa text page into the JSON document.
//!
//! The `pedigree` binary wraps these in two subcommands: `export` converts a Sosa text
//! page into the JSON document, and `show` loads and prints the chart.
//!
//! ## Example
//!
//! ```
//! use pedigree_chart::loader::chart_from_document;
//! use pedigree_chart::render::render_text;
//! use pedigree_disclosure::state::DisclosureState;
//! use serde_json::json;
//!
//! let chart = chart_from_document(&json!({
//!     "people": [
//!         { "Sosa": 1, "Nom": "Jeanne" },
//!         { "Sosa": 2, "Nom": "Pierre", "Date de naissance": "1850" },
//!     ]
//! }))
//! .unwrap();
//! assert_eq!(chart.people_count, 2);
//!
//! let mut state = DisclosureState::default();
//! state.reset(chart.tree.id());
//! assert_eq!(
//!     render_text(&chart.tree, &state),
//!     "[-] 1 Jeanne\n      2 Pierre (° 1850)\n"
//! );
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod render;
pub mod source;

pub use config::ChartConfig;
pub use error::LoadError;
pub use export::{ExportError, ExportReport, export_page};
pub use loader::{Chart, LoadState, Loader};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{FileSource, Source, StaticSource};
