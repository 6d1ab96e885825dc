//! Batch assembly: extraction → exclusion → readiness → dedup.
//!
//! Per-message extraction is pure and runs in parallel. Exclusion, readiness
//! and the first-occurrence dedup run afterwards over the ordered results.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde_json::json;
use tracing::{debug, info};

use crate::notify::body::normalize_body;
use crate::notify::date::extract_date;
use crate::notify::exclusion::ExclusionSet;
use crate::notify::key::CanonicalKey;
use crate::notify::schedule::{activation_instant, is_ready};
use crate::notify::types::{EventKind, OutputRecord, RawMessage};

/// Caller-selectable filters.
#[derive(Debug, Clone, Default)]
pub struct AssemblyOptions {
    /// Drop records whose activation instant is still in the future.
    pub only_ready: bool,
    /// People to suppress from every view.
    pub exclusions: ExclusionSet,
}

/// Counters for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub extracted: usize,
    pub excluded: usize,
    pub not_ready: usize,
    pub unique: usize,
}

/// Result of assembling one batch.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    records: Vec<OutputRecord>,
    unique_names: Vec<String>,
    stats: AssemblyStats,
}

impl Assembly {
    /// Full records, in input order.
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Non-empty names in input order, duplicates included.
    pub fn names(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.name.as_str())
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// First display name of each distinct person.
    pub fn unique_names(&self) -> &[String] {
        &self.unique_names
    }

    pub fn stats(&self) -> AssemblyStats {
        self.stats
    }

    /// JSON report: `{"success", "event", "items", "names"}`, or only
    /// `{"success", "names"}` when `names_only` is set.
    pub fn to_json(&self, kind: EventKind, names_only: bool) -> serde_json::Value {
        if names_only {
            json!({ "success": true, "names": self.unique_names })
        } else {
            json!({
                "success": true,
                "event": kind,
                "items": self.records,
                "names": self.unique_names,
            })
        }
    }
}

/// Turns a batch of raw messages into output records.
#[derive(Debug, Clone)]
pub struct RecordAssembler {
    kind: EventKind,
    options: AssemblyOptions,
}

impl RecordAssembler {
    pub fn new(kind: EventKind, options: AssemblyOptions) -> Self {
        Self { kind, options }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Extract one message. Never fails; misses show up as an empty name
    /// and/or absent dates.
    pub fn extract(&self, message: &RawMessage) -> OutputRecord {
        let body = normalize_body(message);
        let name = self.kind.name_extractor().extract(&body);
        let event_date = extract_date(&body);
        let activation_at = activation_instant(event_date);

        debug!(
            id = %message.id,
            event = self.kind.label(),
            name = %name,
            event_date = ?event_date,
            activation_at = ?activation_at,
            "Extracted notification"
        );

        OutputRecord {
            name: name.display(),
            received_at: message.received_at,
            event_date,
            activation_at,
            subject: message.subject.clone(),
            message_id: message.id.clone(),
        }
    }

    /// Assemble a batch, evaluating readiness against `now`.
    pub fn assemble(&self, messages: &[RawMessage], now: DateTime<Utc>) -> Assembly {
        let extracted: Vec<OutputRecord> =
            messages.par_iter().map(|m| self.extract(m)).collect();

        let mut stats = AssemblyStats {
            extracted: extracted.len(),
            ..Default::default()
        };

        let mut records = Vec::with_capacity(extracted.len());
        for record in extracted {
            if self.options.exclusions.excludes_name(&record.name) {
                debug!(id = %record.message_id, name = %record.name, "Record excluded");
                stats.excluded += 1;
                continue;
            }
            if self.options.only_ready && !is_ready(&record, now) {
                debug!(
                    id = %record.message_id,
                    activation_at = ?record.activation_at,
                    "Record not ready yet"
                );
                stats.not_ready += 1;
                continue;
            }
            records.push(record);
        }

        let unique_names = dedup_names(&records);
        stats.unique = unique_names.len();

        info!(
            event = self.kind.label(),
            extracted = stats.extracted,
            excluded = stats.excluded,
            not_ready = stats.not_ready,
            unique = stats.unique,
            "Assembled notification batch"
        );

        Assembly {
            records,
            unique_names,
            stats,
        }
    }
}

/// Keep the first display name for each non-empty canonical key.
pub fn dedup_names(records: &[OutputRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| {
            let key = CanonicalKey::new(&record.name);
            (!key.is_empty() && seen.insert(key)).then(|| record.name.clone())
        })
        .collect()
}
