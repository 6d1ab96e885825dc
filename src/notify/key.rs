//! Canonical identity keys for exclusion and deduplication.
//!
//! `"Ayşe Yılmaz"`, `"AYŞE  YILMAZ"` and `"ayse.yilmaz"` all map to
//! `ayse.yilmaz`. Free-form names keep only their first and last token, so
//! middle names do not split one person into several keys.

use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalized ASCII, dot-separated identity string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Normalize a display name or a username.
    pub fn new(input: &str) -> Self {
        Self(normalize_key(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letters folded before generic diacritic stripping. `ı` and `İ` do not
/// decompose to a plain `i` under NFD.
fn fold_turkish(c: char) -> char {
    match c {
        'ç' => 'c',
        'Ç' => 'C',
        'ğ' => 'g',
        'Ğ' => 'G',
        'ı' => 'i',
        'İ' => 'I',
        'ö' => 'o',
        'Ö' => 'O',
        'ş' => 's',
        'Ş' => 'S',
        'ü' => 'u',
        'Ü' => 'U',
        other => other,
    }
}

/// Core of [`CanonicalKey::new`].
pub fn normalize_key(input: &str) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();
    let identity = match words.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, .., last] => format!("{first} {last}"),
    };

    let ascii: String = identity
        .chars()
        .map(fold_turkish)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' ' | '.'))
        .collect();

    let dotted = ascii.split_whitespace().collect::<Vec<_>>().join(".");
    dotted
        .split('.')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}
