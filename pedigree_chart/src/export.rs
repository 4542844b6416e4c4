// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion of a tab-separated Sosa page into the genealogy JSON document.
//!
//! The written document is a pretty-printed array of
//! [`SosaRecord`](pedigree_records::sosa::SosaRecord) values and is valid input to
//! [`normalize`](pedigree_records::normalize::normalize).

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use pedigree_records::sosa::{SosaRecord, parse_page};
use thiserror::Error;

/// Why an export produced no document.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The page to convert does not exist.
    #[error("source file not found: {}", .path.display())]
    MissingSource {
        /// Page that was looked up.
        path: PathBuf,
    },
    /// The page exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Page being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document or its directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The records could not be encoded.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a successful export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReport {
    /// Number of distinct people written.
    pub count: usize,
    /// Document that was written.
    pub output: PathBuf,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exported {} people to {}",
            self.count,
            self.output.display()
        )
    }
}

/// Encode parsed rows as the pretty-printed JSON document. Non-ASCII text is kept.
pub fn page_document(records: &[SosaRecord]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse the page at `source` and write the JSON document to `output`, creating
/// parent directories as needed.
pub fn export_page(source: &Path, output: &Path) -> Result<ExportReport, ExportError> {
    let text = std::fs::read_to_string(source).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ExportError::MissingSource {
            path: source.to_path_buf(),
        },
        _ => ExportError::Read {
            path: source.to_path_buf(),
            source: err,
        },
    })?;
    let records = parse_page(&text);
    let json = page_document(&records)?;

    if let Some(dir) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(output, json).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(count = records.len(), output = %output.display(), "exported sosa page");
    Ok(ExportReport {
        count: records.len(),
        output: output.to_path_buf(),
    })
}
