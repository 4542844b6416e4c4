// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration with environment overrides.

use std::path::PathBuf;

use pedigree_disclosure::types::DEFAULT_DEPTH;

/// Path of the exported genealogy document, relative to the source root.
pub const DEFAULT_SOURCE: &str = "/export/genealogy.json";

/// Environment variable overriding [`ChartConfig::source`].
pub const ENV_SOURCE: &str = "PEDIGREE_SOURCE";
/// Environment variable overriding [`ChartConfig::root_dir`].
pub const ENV_ROOT: &str = "PEDIGREE_ROOT";
/// Environment variable overriding [`ChartConfig::base_url`].
pub const ENV_BASE_URL: &str = "PEDIGREE_BASE_URL";
/// Environment variable overriding [`ChartConfig::default_depth`].
pub const ENV_DEPTH: &str = "PEDIGREE_DEPTH";

/// Where to load the pedigree from and how much of it to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    /// Path of the document to fetch.
    pub source: String,
    /// Directory that [`source`](Self::source) is resolved against for file loads.
    pub root_dir: PathBuf,
    /// Base URL for HTTP loads; when set, `source` is appended to it.
    pub base_url: Option<String>,
    /// Generations shown below and including the root before auto-collapsing.
    pub default_depth: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            root_dir: PathBuf::from("."),
            base_url: None,
            default_depth: DEFAULT_DEPTH,
        }
    }
}

impl ChartConfig {
    /// Defaults overlaid with the `PEDIGREE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup`. Empty values are ignored and an
    /// unparseable or zero depth keeps the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            source: get(ENV_SOURCE).unwrap_or(defaults.source),
            root_dir: get(ENV_ROOT).map(PathBuf::from).unwrap_or(defaults.root_dir),
            base_url: get(ENV_BASE_URL).or(defaults.base_url),
            default_depth: get(ENV_DEPTH)
                .and_then(|v| v.trim().parse().ok())
                .filter(|depth| *depth >= 1)
                .unwrap_or(defaults.default_depth),
        }
    }
}
