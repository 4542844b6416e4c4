// Copyright 2025 the Pedigree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document sources: where the genealogy file is fetched from.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::LoadError;

/// Raw response of a [`Source`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    /// Status code; file sources report `200` or `404`.
    pub status: u16,
    /// Response body.
    pub body: Vec<u8>,
}

impl Fetched {
    /// A `200` response with `body`.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// An empty response with `status`.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Returns true for `2xx` statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fetches a document by path.
///
/// A non-success status is a valid response, not an error; the loader turns it into
/// [`LoadError::Transport`].
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch the document at `path`.
    async fn fetch(&self, path: &str) -> Result<Fetched, LoadError>;
}

/// Reads documents from a directory, treating the path as relative to it.
#[derive(Clone, Debug)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Serve files below `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File that `path` resolves to.
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(Path::new(path.trim_start_matches('/')))
    }
}

#[async_trait]
impl Source for FileSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, LoadError> {
        let file = self.resolve(path);
        tracing::debug!(file = %file.display(), "reading source file");
        match tokio::fs::read(&file).await {
            Ok(body) => Ok(Fetched::ok(body)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Fetched::status(404)),
            Err(source) => Err(LoadError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }
}

/// Fixed responses keyed by path; unknown paths answer `404`.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    responses: HashMap<String, Fetched>,
}

impl StaticSource {
    /// Create a source with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status `200` at `path`.
    pub fn with_document(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(path.into(), Fetched::ok(body));
        self
    }

    /// Serve an empty body with `status` at `path`.
    pub fn with_status(mut self, path: impl Into<String>, status: u16) -> Self {
        self.responses.insert(path.into(), Fetched::status(status));
        self
    }
}

#[async_trait]
impl Source for StaticSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, LoadError> {
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| Fetched::status(404)))
    }
}

/// Fetches documents over HTTP(S), appending the path to a base URL.
#[cfg(feature = "http")]
#[derive(Clone, Debug)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    /// Fetch below `base_url` with a default client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Source for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, LoadError> {
        let url = self.url(path);
        tracing::debug!(%url, "requesting source");
        let http_err = |source| LoadError::Http {
            path: url.clone(),
            source,
        };
        let response = self.client.get(&url).send().await.map_err(http_err)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(http_err)?;
        Ok(Fetched {
            status,
            body: body.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_paths_resolve_under_the_root() {
        let source = FileSource::new("/srv/site");
        assert_eq!(
            source.resolve("/export/genealogy.json"),
            PathBuf::from("/srv/site/export/genealogy.json")
        );
        assert_eq!(
            source.resolve("family.json"),
            PathBuf::from("/srv/site/family.json")
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_404() {
        let dir = tempfile::tempdir().unwrap();
        let fetched = FileSource::new(dir.path()).fetch("/nope.json").await.unwrap();
        assert_eq!(fetched.status, 404);
        assert!(!fetched.is_success());
    }

    #[tokio::test]
    async fn existing_file_is_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("export")).unwrap();
        std::fs::write(dir.path().join("export/genealogy.json"), "[]").unwrap();
        let fetched = FileSource::new(dir.path())
            .fetch("/export/genealogy.json")
            .await
            .unwrap();
        assert!(fetched.is_success());
        assert_eq!(fetched.body, b"[]");
    }

    #[tokio::test]
    async fn static_source_answers_known_paths() {
        let source = StaticSource::new()
            .with_document("/a.json", "[]")
            .with_status("/b.json", 500);
        assert_eq!(source.fetch("/a.json").await.unwrap(), Fetched::ok("[]"));
        assert_eq!(source.fetch("/b.json").await.unwrap().status, 500);
        assert_eq!(source.fetch("/c.json").await.unwrap().status, 404);
    }
}
