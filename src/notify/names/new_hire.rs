//! New-hire name extraction.
//!
//! The HR system renders a new-hire mail as a table whose row reads
//! `... CEP TELEFONU <number> <Ad Soyad> <POZİSYON> ...`. The name follows the
//! phone (or registry) number and ends where the position column starts,
//! which is always printed in capitals.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::notify::names::NameExtractor;
use crate::notify::tokens::{is_all_caps_word, is_connector, is_title_like, tokenize};
use crate::notify::types::{MAX_NAME_TOKENS, PersonName};

/// "CEP TELEFONU" followed by a number of at least three digits.
static PHONE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)CEP\s*TELEFONU\b.*?\b[0-9]{3,}\b").unwrap());

/// "SİCİL NO" followed by a number of at least three digits.
static REGISTRY_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)S[İIıi]C[İIıi]L\s*NO\b.*?\b[0-9]{3,}\b").unwrap()
});

/// "ADI SOYADI:" label used by older templates.
static NAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)AD[İIıi]\s*SOYAD[İIıi]\s*[:\-]?\s*").unwrap()
});

/// States of the token scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for the phone/registry anchor.
    SeekingAnchor,
    /// Appending name tokens.
    Collecting,
    /// Stopped; the collected tokens are final.
    Done,
}

/// Token-by-token scanner for the name that follows the anchor.
#[derive(Debug)]
pub struct NameScan<'a> {
    state: ScanState,
    collected: Vec<&'a str>,
}

impl<'a> NameScan<'a> {
    pub fn new() -> Self {
        Self {
            state: ScanState::SeekingAnchor,
            collected: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Locate the anchor and return the text to scan.
    ///
    /// Without an anchor the whole text is scanned.
    pub fn enter_window(&mut self, text: &'a str) -> &'a str {
        debug_assert_eq!(self.state, ScanState::SeekingAnchor);
        self.state = ScanState::Collecting;

        match PHONE_ANCHOR
            .find(text)
            .or_else(|| REGISTRY_ANCHOR.find(text))
        {
            Some(m) => &text[m.end()..],
            None => {
                debug!("No phone or registry anchor, scanning whole body");
                text
            }
        }
    }

    /// Feed the next token while collecting.
    pub fn feed(&mut self, token: &'a str) {
        if self.state != ScanState::Collecting {
            return;
        }

        // Position column header/value.
        if is_all_caps_word(token) {
            self.state = ScanState::Done;
            return;
        }

        if is_title_like(token) || is_connector(token) {
            self.collected.push(token);
            if self.collected.len() >= MAX_NAME_TOKENS {
                self.state = ScanState::Done;
            }
            return;
        }

        // Noise before the name is skipped; noise after it ends the name.
        if !self.collected.is_empty() {
            self.state = ScanState::Done;
        }
    }

    pub fn finish(self) -> PersonName {
        PersonName::from_tokens(self.collected)
    }
}

impl Default for NameScan<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the scan over a body.
pub fn scan_name(text: &str) -> PersonName {
    let mut scan = NameScan::new();
    let window = scan.enter_window(text);
    for token in tokenize(window) {
        scan.feed(token.text);
        if scan.state() == ScanState::Done {
            break;
        }
    }
    scan.finish()
}

/// Fallback for bodies that label the name: `ADI SOYADI : Ayşe Yılmaz`.
pub fn labeled_name(text: &str) -> PersonName {
    let Some(label) = NAME_LABEL.find(text) else {
        return PersonName::miss();
    };
    let rest = &text[label.end()..];

    let mut collected = Vec::new();
    for token in tokenize(rest) {
        let adjacent = if collected.is_empty() {
            token.start == 0
        } else {
            token.spaced
        };
        if !adjacent || !is_title_like(token.text) {
            break;
        }
        collected.push(token.text);
        if collected.len() >= MAX_NAME_TOKENS {
            break;
        }
    }
    PersonName::from_tokens(collected)
}

/// Name extraction for new-hire announcements.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewHireExtractor;

impl NameExtractor for NewHireExtractor {
    fn name(&self) -> &'static str {
        "new_hire"
    }

    fn extract(&self, text: &str) -> PersonName {
        let name = scan_name(text);
        if !name.is_miss() {
            return name;
        }

        let labeled = labeled_name(text);
        if !labeled.is_miss() {
            debug!(name = %labeled, "New-hire name taken from labeled field");
        }
        labeled
    }
}
