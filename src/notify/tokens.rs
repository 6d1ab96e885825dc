//! Word tokenizer and token classes shared by the name extractors.
//!
//! A token is a maximal run of letters, apostrophes and hyphens. Digits,
//! punctuation and whitespace separate tokens.

/// Particles that may appear inside a name but never end one.
const CONNECTORS: &[&str] = &[
    "de", "da", "van", "von", "bin", "ibn", "al", "el", "oğlu", "oglu", "del", "di",
    "di’",
];

/// A word in the source text with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// The gap to the previous token is non-empty and whitespace only.
    pub spaced: bool,
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '\'' | '’' | '-')
}

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '’' | '-')
}

/// Split `text` into word tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (start, is_word_char(c)) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }

    let mut prev_end: Option<usize> = None;
    spans
        .into_iter()
        .map(|(start, end)| {
            let spaced = prev_end
                .is_some_and(|p| text[p..start].chars().all(char::is_whitespace));
            prev_end = Some(end);
            Token {
                text: &text[start..end],
                start,
                end,
                spaced,
            }
        })
        .collect()
}

/// At least two letters and none of them lowercase ("UZMAN", "İK").
pub fn is_all_caps_word(token: &str) -> bool {
    let mut letters = 0;
    for c in token.chars().filter(|c| c.is_alphabetic()) {
        if c.is_lowercase() {
            return false;
        }
        letters += 1;
    }
    letters >= 2
}

/// Capitalised word such as "Ayşe", "Ali-Rıza" or "O'Brien".
pub fn is_title_like(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() && first.is_uppercase()) {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    !rest.is_empty()
        && rest.iter().all(|&c| c.is_alphabetic() || is_joiner(c))
        && rest.iter().any(|c| c.is_lowercase())
}

pub fn is_connector(token: &str) -> bool {
    let folded = fold(token);
    CONNECTORS.iter().any(|c| fold(c) == folded)
}

/// Lowercase with the Turkish dotted and dotless I folded onto `i`.
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'İ' | 'I' | 'ı' => out.push('i'),
            '\u{307}' => {}
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Case-insensitive word comparison.
pub fn word_eq(token: &str, word: &str) -> bool {
    fold(token) == fold(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn tokenize_splits_on_digits_and_punctuation() {
        let tokens = tokenize("CEP: 0555 Ayşe,Yılmaz");
        assert_eq!(texts(&tokens), vec!["CEP", "Ayşe", "Yılmaz"]);
    }

    #[test]
    fn tokenize_keeps_apostrophes_and_hyphens() {
        let tokens = tokenize("Ali-Rıza O'Brien Can’ın");
        assert_eq!(texts(&tokens), vec!["Ali-Rıza", "O'Brien", "Can’ın"]);
    }

    #[test]
    fn tokenize_tracks_whitespace_gaps() {
        let tokens = tokenize("Ali Veli, Can\n Deniz");
        assert!(!tokens[0].spaced);
        assert!(tokens[1].spaced);
        assert!(!tokens[2].spaced);
        assert!(tokens[3].spaced);
    }

    #[test]
    fn tokenize_byte_spans_point_into_source() {
        let text = "ş Çağrı";
        let tokens = tokenize(text);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "Çağrı");
        assert_eq!(tokens[1].end, text.len());
    }

    #[test]
    fn all_caps_detection() {
        assert!(is_all_caps_word("UZMAN"));
        assert!(is_all_caps_word("İŞÇİ"));
        assert!(is_all_caps_word("AR-GE"));
        assert!(!is_all_caps_word("A"));
        assert!(!is_all_caps_word("Uzman"));
        assert!(!is_all_caps_word("ıŞ"));
    }

    #[test]
    fn title_like_detection() {
        assert!(is_title_like("Ayşe"));
        assert!(is_title_like("Çağrı"));
        assert!(is_title_like("İsmail"));
        assert!(is_title_like("Ali-Rıza"));
        assert!(is_title_like("McDonald"));
        assert!(!is_title_like("UZMAN"));
        assert!(!is_title_like("ayşe"));
        assert!(!is_title_like("A"));
    }

    #[test]
    fn connectors_are_case_insensitive() {
        assert!(is_connector("oğlu"));
        assert!(is_connector("Oğlu"));
        assert!(is_connector("VAN"));
        assert!(is_connector("di’"));
        assert!(is_connector("DI’"));
        assert!(!is_connector("Demir"));
    }

    #[test]
    fn fold_unifies_turkish_i() {
        assert_eq!(fold("İÇİN"), "için");
        assert_eq!(fold("IŞIK"), "işik");
        assert!(word_eq("İsimli", "isimli"));
        assert!(word_eq("ÇALIŞAN", "çalışan"));
    }
}
