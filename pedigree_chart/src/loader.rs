// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The load boundary: fetch, decode, normalize, build, and reset disclosure.
//!
//! A [`Loader`] runs one load at a time; [`Loader::load`] takes `&mut self`, so an
//! overlapping load cannot be started. Every load rebuilds the person store and the
//! tree from scratch. Failures are never fatal to the process: they replace the chart
//! with a message in [`LoadState`].

use pedigree_disclosure::state::DisclosureState;
use pedigree_disclosure::types::{Disclosure, VisibleRow};
use pedigree_records::normalize::normalize;
use pedigree_tree::{PersonMap, TreeNode};
use serde_json::Value;

use crate::config::ChartConfig;
use crate::error::LoadError;
use crate::source::Source;

/// A successfully loaded pedigree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    /// Ancestor tree from the selected root.
    pub tree: TreeNode,
    /// Number of distinct people in the loaded records.
    pub people_count: usize,
}

/// What the presentation layer should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The source could not be fetched or decoded.
    Error(String),
    /// The document held no usable pedigree.
    Empty(String),
    /// A chart is available.
    Ready(Chart),
}

impl LoadState {
    fn from_error(err: &LoadError) -> Self {
        if err.is_empty_dataset() {
            Self::Empty(err.to_string())
        } else {
            Self::Error(err.to_string())
        }
    }

    /// The chart, when ready.
    pub fn chart(&self) -> Option<&Chart> {
        match self {
            Self::Ready(chart) => Some(chart),
            _ => None,
        }
    }

    /// The user-facing message for error and empty states.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error(message) | Self::Empty(message) => Some(message),
            _ => None,
        }
    }
}

/// Turn a decoded document into a chart.
pub fn chart_from_document(document: &Value) -> Result<Chart, LoadError> {
    let people = normalize(document);
    if people.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    let store = PersonMap::from_people(people);
    let tree = store.build_tree()?;
    Ok(Chart {
        tree,
        people_count: store.len(),
    })
}

/// Drives loads from a [`Source`] and owns the disclosure state of the current chart.
#[derive(Debug)]
pub struct Loader<S> {
    source: S,
    config: ChartConfig,
    state: LoadState,
    disclosure: DisclosureState,
}

impl<S: Source> Loader<S> {
    /// Create an idle loader.
    pub fn new(source: S, config: ChartConfig) -> Self {
        let disclosure = DisclosureState::new(config.default_depth);
        Self {
            source,
            config,
            state: LoadState::Idle,
            disclosure,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The chart, when ready.
    pub fn chart(&self) -> Option<&Chart> {
        self.state.chart()
    }

    /// Disclosure state of the current chart.
    pub fn disclosure(&self) -> &DisclosureState {
        &self.disclosure
    }

    /// Fetch and rebuild the chart, replacing the previous state.
    ///
    /// On success the overrides are reset to `{root: Expand}`.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        tracing::info!(source = %self.config.source, "loading pedigree");
        match self.fetch_chart().await {
            Ok(chart) => {
                tracing::info!(
                    people = chart.people_count,
                    root = chart.tree.id(),
                    nodes = chart.tree.node_count(),
                    "pedigree loaded"
                );
                self.disclosure.reset(chart.tree.id());
                self.state = LoadState::Ready(chart);
            }
            Err(err) => {
                tracing::warn!(error = %err, "pedigree load failed");
                self.state = LoadState::from_error(&err);
            }
        }
        &self.state
    }

    async fn fetch_chart(&self) -> Result<Chart, LoadError> {
        let path = self.config.source.as_str();
        let fetched = self.source.fetch(path).await?;
        if !fetched.is_success() {
            return Err(LoadError::Transport {
                path: path.to_string(),
                status: fetched.status,
            });
        }
        let document: Value =
            serde_json::from_slice(&fetched.body).map_err(|source| LoadError::Decode {
                path: path.to_string(),
                source,
            })?;
        chart_from_document(&document)
    }

    /// Rows to render for the current chart; empty when no chart is ready.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.chart()
            .map(|chart| self.disclosure.visible_rows(&chart.tree))
            .unwrap_or_default()
    }

    /// Toggle a rendered node. Returns `None` when no chart is ready or `id` is not
    /// currently rendered.
    pub fn toggle(&mut self, id: u64) -> Option<Disclosure> {
        let LoadState::Ready(chart) = &self.state else {
            return None;
        };
        self.disclosure.toggle(&chart.tree, id)
    }

    /// Force an explicit state on `id`, rendered or not.
    pub fn set_override(&mut self, id: u64, disclosure: Disclosure) -> Option<Disclosure> {
        self.disclosure.set_override(id, disclosure)
    }

    /// Write every `expand` override, then every `collapse` override, so an identifier
    /// named in both ends up collapsed.
    pub fn apply_overrides(&mut self, expand: &[u64], collapse: &[u64]) {
        for &id in expand {
            self.set_override(id, Disclosure::Expand);
        }
        for &id in collapse {
            self.set_override(id, Disclosure::Collapse);
        }
    }
}
