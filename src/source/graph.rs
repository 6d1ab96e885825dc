//! Mail API message shapes (`/users/{mailbox}/messages` responses).
//!
//! Only the fields the extractor needs are modelled. Unknown fields are ignored.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;

use crate::notify::types::{BodyVariants, RawMessage};

/// One message as returned by the mail API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMessage {
    pub id: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub received_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sender: Option<GraphRecipient>,
    #[serde(default)]
    pub body: Option<GraphBody>,
    #[serde(default)]
    pub unique_body: Option<GraphBody>,
    #[serde(default)]
    pub body_preview: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRecipient {
    #[serde(default)]
    pub email_address: Option<GraphEmailAddress>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphEmailAddress {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphBody {
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl GraphBody {
    /// Body text; HTML bodies are reduced to plain text.
    pub fn text(&self) -> Option<String> {
        let content = self.content.as_deref()?;
        let is_html = self
            .content_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("html"));
        Some(if is_html {
            html_to_text(content)
        } else {
            content.to_string()
        })
    }
}

/// Either a page (`{"value": [...]}`) or a bare array of messages.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GraphPayload {
    Page {
        value: Vec<GraphMessage>,
        #[serde(default, rename = "@odata.nextLink")]
        next_link: Option<String>,
    },
    List(Vec<GraphMessage>),
}

impl GraphPayload {
    pub fn next_link(&self) -> Option<&str> {
        match self {
            Self::Page { next_link, .. } => next_link.as_deref(),
            Self::List(_) => None,
        }
    }

    pub fn into_messages(self) -> Vec<GraphMessage> {
        match self {
            Self::Page { value, .. } => value,
            Self::List(messages) => messages,
        }
    }
}

impl From<GraphMessage> for RawMessage {
    fn from(message: GraphMessage) -> Self {
        let sender = message
            .sender
            .and_then(|s| s.email_address)
            .and_then(|a| a.address.or(a.name))
            .unwrap_or_default();

        RawMessage {
            id: message.id,
            sender,
            subject: message.subject.unwrap_or_default(),
            received_at: message.received_date_time.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            body: BodyVariants {
                primary: message.body.as_ref().and_then(GraphBody::text),
                unique: message.unique_body.as_ref().and_then(GraphBody::text),
                preview: message.body_preview,
            },
        }
    }
}

static BREAK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*(br|/p|/div|/tr|/li)\s*/?\s*>").unwrap());
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static CELL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\s*/(td|th)\s*>").unwrap());

/// Crude HTML to text: line breaks for block ends, spaces for cells, tags dropped.
pub fn html_to_text(html: &str) -> String {
    let text = BREAK_TAG.replace_all(html, "\n");
    let text = CELL_TAG.replace_all(&text, " ");
    let text = ANY_TAG.replace_all(&text, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
