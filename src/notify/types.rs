//! Shared types for the notification extraction pipeline.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::notify::tokens::is_connector;

// ── Event kind ──────────────────────────────────────────────────────

/// Which HR notification a batch of messages announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// "Şirkete Yeni Katılım": a new employee joined.
    NewHire,
    /// "Çalışan İlişik Kesme": an employee left.
    Termination,
}

impl EventKind {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewHire => "new_hire",
            Self::Termination => "termination",
        }
    }

    /// Exact subject line the HR system uses for this notification.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::NewHire => "[Kurum Dışı] Şirkete Yeni Katılım - New Comer",
            Self::Termination => "[Kurum Dışı] Çalışan İlişik Kesme Bildirimi",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new_hire" | "new-hire" | "newhire" => Ok(Self::NewHire),
            "termination" | "term" => Ok(Self::Termination),
            other => Err(format!(
                "unknown event kind '{other}' (expected new_hire or termination)"
            )),
        }
    }
}

// ── Raw message ─────────────────────────────────────────────────────

/// Text alternatives for a message body.
///
/// Preference order when picking one is `unique > primary > preview`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyVariants {
    /// Full body text.
    pub primary: Option<String>,
    /// Body without quoted history.
    pub unique: Option<String>,
    /// Short preview the mail server generates.
    pub preview: Option<String>,
}

/// A notification message as delivered by the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub received_at: DateTime<Utc>,
    pub body: BodyVariants,
}

// ── Person name ─────────────────────────────────────────────────────

/// Maximum number of tokens in an extracted name.
pub const MAX_NAME_TOKENS: usize = 6;

/// Minimum number of tokens for a name to count as a match.
pub const MIN_NAME_TOKENS: usize = 2;

/// A person's name as extracted from a message body.
///
/// Either empty (a miss) or 2–6 tokens that do not end in a connector word.
/// The constructor enforces this, so no other shape can exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PersonName {
    tokens: Vec<String>,
}

impl PersonName {
    /// The empty name.
    pub fn miss() -> Self {
        Self::default()
    }

    /// Build a name from collected tokens.
    ///
    /// Trailing connectors are dropped, and anything shorter than two tokens
    /// becomes a miss. Tokens past the sixth are ignored.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens: Vec<String> = tokens
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim_matches(|c: char| c == '-' || c == '.').to_string())
            .filter(|t| !t.is_empty())
            .take(MAX_NAME_TOKENS)
            .collect();

        while tokens.last().is_some_and(|t| is_connector(t)) {
            tokens.pop();
        }

        if tokens.len() < MIN_NAME_TOKENS {
            return Self::miss();
        }
        Self { tokens }
    }

    pub fn is_miss(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Space-joined display form ("" for a miss).
    pub fn display(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

// ── Output record ───────────────────────────────────────────────────

/// Structured facts extracted from one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Display name, empty when no name was found.
    pub name: String,
    pub received_at: DateTime<Utc>,
    /// Effective date of the event (start or termination date).
    pub event_date: Option<NaiveDate>,
    /// When downstream action may begin.
    pub activation_at: Option<DateTime<Utc>>,
    pub subject: String,
    pub message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_parses_aliases() {
        assert_eq!("new-hire".parse::<EventKind>().unwrap(), EventKind::NewHire);
        assert_eq!("NEW_HIRE".parse::<EventKind>().unwrap(), EventKind::NewHire);
        assert_eq!(
            " termination ".parse::<EventKind>().unwrap(),
            EventKind::Termination
        );
        assert!("resignation".parse::<EventKind>().is_err());
    }

    #[test]
    fn event_kind_subjects_differ() {
        assert!(EventKind::NewHire.subject().contains("Yeni Katılım"));
        assert!(EventKind::Termination.subject().contains("İlişik Kesme"));
    }

    #[test]
    fn event_kind_serializes_snake_case() {
        let json = serde_json::to_value(EventKind::NewHire).unwrap();
        assert_eq!(json, "new_hire");
    }

    #[test]
    fn person_name_rejects_single_token() {
        assert!(PersonName::from_tokens(["Ayşe"]).is_miss());
    }

    #[test]
    fn person_name_trims_trailing_connectors() {
        let name = PersonName::from_tokens(["Hasan", "Kara", "oğlu", "de"]);
        assert_eq!(name.display(), "Hasan Kara");
    }

    #[test]
    fn person_name_connector_trim_can_cause_miss() {
        assert!(PersonName::from_tokens(["Ahmet", "bin"]).is_miss());
    }

    #[test]
    fn person_name_keeps_inner_connector() {
        let name = PersonName::from_tokens(["Leyla", "de", "Souza"]);
        assert_eq!(name.tokens().len(), 3);
        assert_eq!(name.to_string(), "Leyla de Souza");
    }

    #[test]
    fn person_name_caps_at_six_tokens() {
        let name = PersonName::from_tokens(["A1", "B1", "C1", "D1", "E1", "F1", "G1"]);
        assert_eq!(name.tokens().len(), MAX_NAME_TOKENS);
    }

    #[test]
    fn person_name_strips_edge_punctuation() {
        let name = PersonName::from_tokens(["Ali", "Veli.", "-"]);
        assert_eq!(name.display(), "Ali Veli");
    }

    #[test]
    fn output_record_serializes_dates() {
        let record = OutputRecord {
            name: "Mehmet Demir".into(),
            received_at: "2025-10-15T08:30:00Z".parse().unwrap(),
            event_date: NaiveDate::from_ymd_opt(2025, 10, 17),
            activation_at: Some("2025-10-20T00:00:00Z".parse().unwrap()),
            subject: "s".into(),
            message_id: "m1".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["event_date"], "2025-10-17");
        assert_eq!(json["activation_at"], "2025-10-20T00:00:00Z");
        assert_eq!(json["received_at"], "2025-10-15T08:30:00Z");
    }
}
