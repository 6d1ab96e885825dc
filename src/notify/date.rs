//! Effective-date extraction.
//!
//! Notification bodies often carry several dates (signature blocks, legal
//! footers, the mail header quoted in a forward). The effective date sits
//! next to the phrase "tarihi itibari ile", so a window around that phrase is
//! searched before the whole text.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Characters kept on each side of the trigger phrase.
const CONTEXT_RADIUS: usize = 40;

/// "tarihi itibari ile" plus up to 30 trailing characters.
static TRIGGER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)tar[iİı]h[iİı]\s+[iİı]t[iİı]bar[iİı]\s+[iİı]le.{0,30}").unwrap()
});

/// `17.10.2025`, `17/10/25`
static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]{1,2})[./]([0-9]{1,2})[./]([0-9]{2,4})\b").unwrap()
});

/// `2025-10-17`
static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{4})-([0-9]{1,2})-([0-9]{1,2})\b").unwrap());

/// Find the effective date in a normalized body.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    search_windows(text)
        .into_iter()
        .find_map(first_valid_date)
}

/// Windows in priority order: the trigger context (if any), then the full text.
fn search_windows(text: &str) -> Vec<&str> {
    let mut windows = Vec::with_capacity(2);
    if let Some(m) = TRIGGER.find(text) {
        let start = back_chars(text, m.start(), CONTEXT_RADIUS);
        let end = forward_chars(text, m.end(), CONTEXT_RADIUS);
        windows.push(&text[start..end]);
    }
    windows.push(text);
    windows
}

fn first_valid_date(window: &str) -> Option<NaiveDate> {
    let numeric = NUMERIC_DATE.captures_iter(window).find_map(|caps| {
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let mut year: i32 = caps[3].parse().ok()?;
        if year < 100 {
            year += 2000;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    });
    if numeric.is_some() {
        return numeric;
    }

    ISO_DATE.captures_iter(window).find_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// Byte offset `n` characters before `idx` (clamped to 0).
fn back_chars(text: &str, idx: usize, n: usize) -> usize {
    text[..idx]
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset `n` characters after `idx` (clamped to the end).
fn forward_chars(text: &str, idx: usize, n: usize) -> usize {
    text[idx..]
        .char_indices()
        .nth(n)
        .map(|(i, _)| idx + i)
        .unwrap_or(text.len())
}
