//! JSON file source: reads saved mail API pages from disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::SourceError;
use crate::notify::types::RawMessage;
use crate::source::graph::GraphPayload;
use crate::source::{FetchQuery, MessageSource};

/// Reads one or more JSON files, each a page (`{"value": [...]}`) or a bare
/// array of messages. Pages are concatenated in the given order.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    paths: Vec<PathBuf>,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    pub fn with_pages(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    async fn read_page(&self, path: &Path) -> Result<Vec<RawMessage>, SourceError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SourceError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let payload: GraphPayload =
            serde_json::from_str(&content).map_err(|source| SourceError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        if payload.next_link().is_some() {
            info!(
                path = %path.display(),
                "Page has a nextLink; only pages on disk are read"
            );
        }

        let messages: Vec<RawMessage> = payload
            .into_messages()
            .into_iter()
            .map(RawMessage::from)
            .collect();
        debug!(path = %path.display(), count = messages.len(), "Read message page");
        Ok(messages)
    }
}

#[async_trait]
impl MessageSource for JsonFileSource {
    fn name(&self) -> &str {
        "json_file"
    }

    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<RawMessage>, SourceError> {
        let mut messages = Vec::new();
        for path in &self.paths {
            messages.extend(self.read_page(path).await?);
        }
        Ok(query.apply(messages))
    }
}
