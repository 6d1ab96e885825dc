//! Termination name extraction.
//!
//! Termination mails describe the employee in a sentence such as
//! `"48213 sicili ile çalışan Mehmet Demir isimli çalışan için 17.10.2025
//! tarihi itibari ile ilişik kesme işlemi başlatılmıştır."` Phrase templates
//! are matched over word tokens, most specific first.

use tracing::debug;

use crate::notify::names::NameExtractor;
use crate::notify::tokens::{
    Token, fold, is_all_caps_word, is_connector, is_title_like, tokenize, word_eq,
};
use crate::notify::types::{MAX_NAME_TOKENS, MIN_NAME_TOKENS, PersonName};

/// One literal word of a phrase template.
#[derive(Debug, Clone, Copy)]
enum Word {
    /// Whole-word match.
    Exact(&'static str),
    /// Word starting with the given stem ("sicil", "sicili", "sicilli").
    Stem(&'static str),
}

impl Word {
    fn matches(&self, token: &str) -> bool {
        match self {
            Self::Exact(word) => word_eq(token, word),
            Self::Stem(stem) => fold(token).starts_with(&fold(stem)),
        }
    }
}

/// `<words> <NAME> <words>`, all separated by whitespace only.
#[derive(Debug, Clone, Copy)]
struct Template {
    label: &'static str,
    lead: &'static [Word],
    trail: &'static [Word],
}

const REGISTRY_LEAD: &[Word] = &[Word::Stem("sicil"), Word::Exact("ile"), Word::Exact("çalışan")];
const LABELED_TRAIL: &[Word] = &[
    Word::Exact("isimli"),
    Word::Exact("çalışan"),
    Word::Exact("için"),
];
const PLAIN_TRAIL: &[Word] = &[Word::Exact("için")];

/// Most specific first. The generic form matches a superset of the others
/// and grabs short fragments, so it runs last.
const TEMPLATES: &[Template] = &[
    Template {
        label: "labeled",
        lead: REGISTRY_LEAD,
        trail: LABELED_TRAIL,
    },
    Template {
        label: "registry",
        lead: REGISTRY_LEAD,
        trail: PLAIN_TRAIL,
    },
    Template {
        label: "named",
        lead: &[],
        trail: LABELED_TRAIL,
    },
    Template {
        label: "generic",
        lead: &[],
        trail: PLAIN_TRAIL,
    },
];

fn is_name_token(token: &str) -> bool {
    is_title_like(token) || is_all_caps_word(token) || is_connector(token)
}

/// Match `words` starting at `at`. The first word must be whitespace-separated
/// from its predecessor only when `spaced_first` is set.
fn words_match(tokens: &[Token<'_>], at: usize, words: &[Word], spaced_first: bool) -> bool {
    if at + words.len() > tokens.len() {
        return false;
    }
    words.iter().enumerate().all(|(i, word)| {
        let token = &tokens[at + i];
        let spaced_ok = token.spaced || (i == 0 && !spaced_first);
        spaced_ok && word.matches(token.text)
    })
}

impl Template {
    /// Leftmost match; at a given start the longest name wins.
    fn find<'a>(&self, tokens: &[Token<'a>]) -> Option<Vec<&'a str>> {
        for start in 0..tokens.len() {
            if !words_match(tokens, start, self.lead, false) {
                continue;
            }
            let name_start = start + self.lead.len();
            if name_start >= tokens.len() {
                continue;
            }
            if !self.lead.is_empty() && !tokens[name_start].spaced {
                continue;
            }

            let run = tokens[name_start..]
                .iter()
                .enumerate()
                .take_while(|(i, t)| (*i == 0 || t.spaced) && is_name_token(t.text))
                .take(MAX_NAME_TOKENS)
                .count();

            for len in (MIN_NAME_TOKENS..=run).rev() {
                if words_match(tokens, name_start + len, self.trail, true) {
                    let name = tokens[name_start..name_start + len]
                        .iter()
                        .map(|t| t.text)
                        .collect();
                    return Some(name);
                }
            }
        }
        None
    }
}

/// Drop an "isimli çalışan ..." tail that slipped into the name run.
fn strip_label_suffix(mut tokens: Vec<&str>) -> Vec<&str> {
    if let Some(pos) = tokens
        .windows(2)
        .position(|w| word_eq(w[0], "isimli") && word_eq(w[1], "çalışan"))
    {
        tokens.truncate(pos);
    }
    tokens
}

/// Name extraction for termination announcements.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminationExtractor;

impl NameExtractor for TerminationExtractor {
    fn name(&self) -> &'static str {
        "termination"
    }

    fn extract(&self, text: &str) -> PersonName {
        let tokens = tokenize(text);
        for template in TEMPLATES {
            let Some(raw) = template.find(&tokens) else {
                continue;
            };
            let name = PersonName::from_tokens(strip_label_suffix(raw));
            if !name.is_miss() {
                debug!(template = template.label, name = %name, "Termination template matched");
                return name;
            }
        }
        PersonName::miss()
    }
}
