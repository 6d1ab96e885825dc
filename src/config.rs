//! Configuration types.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::notify::{AssemblyOptions, EventKind, ExclusionSet};
use crate::source::FetchQuery;

/// Runtime configuration for the `hr-notify` binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Which notification type to extract.
    pub event: EventKind,
    /// JSON files holding fetched message pages, read in order.
    pub inputs: Vec<PathBuf>,
    /// Cap on messages considered (newest first).
    pub max_items: Option<usize>,
    /// Drop records whose activation instant is in the future.
    pub only_ready: bool,
    /// Free-text list of people to suppress.
    pub exclude: String,
    /// Print only the deduplicated name list.
    pub names_only: bool,
    /// Keep only messages whose subject equals the event's subject line.
    pub match_subject: bool,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// - `HR_NOTIFY_EVENT` (required): `new_hire` or `termination`
    /// - `HR_NOTIFY_INPUT` (required): comma-separated JSON file paths
    /// - `HR_NOTIFY_MAX_ITEMS`, `HR_NOTIFY_ONLY_READY`, `HR_NOTIFY_EXCLUDE`,
    ///   `HR_NOTIFY_NAMES_ONLY`, `HR_NOTIFY_MATCH_SUBJECT` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from a map, for tests and embedding.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let event = get("HR_NOTIFY_EVENT")
            .ok_or_else(|| ConfigError::MissingEnvVar("HR_NOTIFY_EVENT".into()))?
            .parse::<EventKind>()
            .map_err(|message| ConfigError::InvalidValue {
                key: "HR_NOTIFY_EVENT".into(),
                message,
            })?;

        let inputs: Vec<PathBuf> = get("HR_NOTIFY_INPUT")
            .ok_or_else(|| ConfigError::MissingEnvVar("HR_NOTIFY_INPUT".into()))?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        if inputs.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "HR_NOTIFY_INPUT".into(),
                message: "no file paths given".into(),
            });
        }

        let max_items = get("HR_NOTIFY_MAX_ITEMS")
            .map(|v| {
                v.trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: "HR_NOTIFY_MAX_ITEMS".into(),
                        message: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            event,
            inputs,
            max_items,
            only_ready: parse_flag("HR_NOTIFY_ONLY_READY", get("HR_NOTIFY_ONLY_READY"), false)?,
            exclude: get("HR_NOTIFY_EXCLUDE").unwrap_or_default(),
            names_only: parse_flag("HR_NOTIFY_NAMES_ONLY", get("HR_NOTIFY_NAMES_ONLY"), false)?,
            match_subject: parse_flag(
                "HR_NOTIFY_MATCH_SUBJECT",
                get("HR_NOTIFY_MATCH_SUBJECT"),
                true,
            )?,
        })
    }

    pub fn fetch_query(&self) -> FetchQuery {
        FetchQuery {
            kind: self.event,
            max_items: self.max_items,
            match_subject: self.match_subject,
        }
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            only_ready: self.only_ready,
            exclusions: ExclusionSet::parse(&self.exclude),
        }
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.into(),
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}
