//! Body selection and whitespace normalization.

use crate::notify::types::RawMessage;

/// Pick the best text representation of a message and normalize it.
///
/// Uses the first non-blank of the unique body, the full body and the
/// preview. Returns an empty string when all three are blank.
pub fn normalize_body(message: &RawMessage) -> String {
    let body = &message.body;
    [&body.unique, &body.primary, &body.preview]
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
        .map(|text| normalize_text(text))
        .unwrap_or_default()
}

/// Normalize line endings and whitespace.
///
/// - `\r\n` and bare `\r` become `\n`
/// - runs of horizontal whitespace become one space, trimmed at line edges
/// - consecutive blank lines collapse to a single blank line
pub fn normalize_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = false;

    for line in unified.split('\n') {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        let blank = collapsed.is_empty();
        if blank && previous_blank {
            continue;
        }
        previous_blank = blank;
        lines.push(collapsed);
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::types::BodyVariants;
    use chrono::Utc;

    fn message(primary: Option<&str>, unique: Option<&str>, preview: Option<&str>) -> RawMessage {
        RawMessage {
            id: "m1".into(),
            sender: "ik@example.com".into(),
            subject: "s".into(),
            received_at: Utc::now(),
            body: BodyVariants {
                primary: primary.map(String::from),
                unique: unique.map(String::from),
                preview: preview.map(String::from),
            },
        }
    }

    #[test]
    fn prefers_unique_body() {
        let msg = message(Some("full"), Some("unique"), Some("preview"));
        assert_eq!(normalize_body(&msg), "unique");
    }

    #[test]
    fn falls_back_past_blank_variants() {
        let msg = message(Some("  \r\n "), None, Some("preview text"));
        assert_eq!(normalize_body(&msg), "preview text");

        let msg = message(Some("full body"), Some(""), None);
        assert_eq!(normalize_body(&msg), "full body");
    }

    #[test]
    fn all_blank_yields_empty() {
        let msg = message(None, Some(" "), None);
        assert_eq!(normalize_body(&msg), "");
    }

    #[test]
    fn unifies_line_endings() {
        assert_eq!(normalize_text("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn collapses_horizontal_whitespace() {
        assert_eq!(normalize_text("Ayşe \t  Yılmaz   UZMAN"), "Ayşe Yılmaz UZMAN");
        assert_eq!(normalize_text("  a  \n   b  "), "a\nb");
    }

    #[test]
    fn collapses_blank_line_runs() {
        let text = "Merhaba,\r\n\r\n \r\n\t\r\nAyşe Yılmaz\n\n\n\nİK";
        assert_eq!(normalize_text(text), "Merhaba,\n\nAyşe Yılmaz\n\nİK");
    }

    #[test]
    fn never_leaves_two_blank_lines() {
        let out = normalize_text("a\n\n\n\n\nb\n \n \nc");
        assert!(!out.contains("\n\n\n"));
    }
}
