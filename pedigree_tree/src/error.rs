// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction errors.

use thiserror::Error;

/// Reasons the ancestor tree could not be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The person store is empty, so no root can be selected.
    #[error("no root person could be determined")]
    NoRoot,
    /// The start identifier is not in the person store.
    #[error("root person {id} is missing from the records")]
    RootMissing {
        /// Identifier that was looked up.
        id: u64,
    },
}
