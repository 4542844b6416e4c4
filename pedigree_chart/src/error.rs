// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load errors. The `Display` form of each variant is the message shown to users.

use pedigree_tree::BuildError;
use thiserror::Error;

/// Why a load attempt produced no chart.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source answered with a non-success status.
    #[error("failed to load {path}: status {status}")]
    Transport {
        /// Requested path.
        path: String,
        /// Status code returned by the source.
        status: u16,
    },
    /// The source could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Requested path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP request itself failed.
    #[cfg(feature = "http")]
    #[error("request for {path} failed: {source}")]
    Http {
        /// Requested URL.
        path: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },
    /// The body is not a JSON document.
    #[error("{path} is not valid JSON: {source}")]
    Decode {
        /// Requested path.
        path: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// Normalization kept no record.
    #[error("no valid person records found")]
    EmptyDataset,
    /// No root could be selected.
    #[error("no root person could be determined")]
    NoRoot,
    /// A root was selected but the tree could not be built from it.
    #[error("failed to build the tree from root {root}")]
    TreeBuild {
        /// Selected root identifier.
        root: u64,
    },
}

impl LoadError {
    /// Returns true for failures caused by the data rather than by fetching it.
    ///
    /// These are surfaced as an empty chart instead of an error.
    pub fn is_empty_dataset(&self) -> bool {
        matches!(
            self,
            Self::EmptyDataset | Self::NoRoot | Self::TreeBuild { .. }
        )
    }
}

impl From<BuildError> for LoadError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::NoRoot => Self::NoRoot,
            BuildError::RootMissing { id } => Self::TreeBuild { root: id },
        }
    }
}
