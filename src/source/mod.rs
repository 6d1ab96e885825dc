//! Message sources. Pure I/O, no extraction logic.
//!
//! A source hands the assembler an already-fetched, finite batch of
//! `RawMessage`s. Token exchange, pagination and retries belong to whatever
//! produced the batch; sources here only read and select.

pub mod graph;
pub mod json_file;

pub use json_file::JsonFileSource;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SourceError;
use crate::notify::types::{EventKind, RawMessage};

/// Upper bound the mail API accepts for `$top`.
pub const MAX_TOP: usize = 1000;

/// Which messages to hand to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchQuery {
    pub kind: EventKind,
    /// Keep at most this many (newest first), clamped to `1..=1000`.
    pub max_items: Option<usize>,
    /// Keep only messages whose subject equals the event's subject line.
    pub match_subject: bool,
}

impl FetchQuery {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            max_items: None,
            match_subject: true,
        }
    }

    /// Narrow and order a batch: subject filter, newest first, then the cap.
    pub fn apply(&self, messages: Vec<RawMessage>) -> Vec<RawMessage> {
        let total = messages.len();
        let subject = self.kind.subject();

        let mut selected: Vec<RawMessage> = messages
            .into_iter()
            .filter(|m| !self.match_subject || m.subject.trim() == subject)
            .collect();
        selected.sort_by(|a, b| b.received_at.cmp(&a.received_at));

        if let Some(max) = self.max_items {
            selected.truncate(clamp_top(max));
        }

        debug!(
            event = self.kind.label(),
            total,
            selected = selected.len(),
            "Applied fetch query"
        );
        selected
    }
}

pub fn clamp_top(max_items: usize) -> usize {
    max_items.clamp(1, MAX_TOP)
}

/// Trait for message sources.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Fetch the batch selected by `query`.
    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<RawMessage>, SourceError>;
}

/// A source over messages already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    messages: Vec<RawMessage>,
}

impl StaticSource {
    pub fn new(messages: Vec<RawMessage>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl MessageSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, query: &FetchQuery) -> Result<Vec<RawMessage>, SourceError> {
        Ok(query.apply(self.messages.clone()))
    }
}
