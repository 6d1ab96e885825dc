//! People whose notifications are suppressed.

use std::collections::HashSet;

use crate::notify::key::CanonicalKey;

/// Set of canonical keys parsed from a free-text list.
///
/// Entries are separated by commas, semicolons or newlines and may be display
/// names ("Mehmet Demir") or usernames ("mehmet.demir").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    keys: HashSet<CanonicalKey>,
}

impl ExclusionSet {
    pub fn parse(input: &str) -> Self {
        let keys = input
            .split([',', ';', '\n', '\r'])
            .map(CanonicalKey::new)
            .filter(|key| !key.is_empty())
            .collect();
        Self { keys }
    }

    /// Exact key match; no fuzzy comparison.
    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.keys.contains(key)
    }

    /// Whether a display name belongs to an excluded person.
    pub fn excludes_name(&self, name: &str) -> bool {
        let key = CanonicalKey::new(name);
        !key.is_empty() && self.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_delimiters() {
        let set = ExclusionSet::parse("mehmet.demir, Ayşe Yılmaz;\nCAN POLAT\r\n");
        assert_eq!(set.len(), 3);
        assert!(set.excludes_name("Mehmet Demir"));
        assert!(set.excludes_name("ayse.yilmaz"));
        assert!(set.excludes_name("Can Polat"));
    }

    #[test]
    fn skips_empty_segments() {
        let set = ExclusionSet::parse(" ,;; \n , ");
        assert!(set.is_empty());
    }

    #[test]
    fn empty_input_is_empty_set() {
        let set = ExclusionSet::parse("");
        assert!(set.is_empty());
        assert!(!set.excludes_name("Mehmet Demir"));
    }

    #[test]
    fn membership_is_exact() {
        let set = ExclusionSet::parse("mehmet.demir");
        assert!(!set.excludes_name("Mehmet Demirci"));
        assert!(!set.excludes_name("Mehmet"));
        assert!(set.contains(&CanonicalKey::new("MEHMET   DEMİR")));
    }

    #[test]
    fn middle_names_do_not_matter() {
        let set = ExclusionSet::parse("Mehmet Ali Demir");
        assert!(set.excludes_name("Mehmet Demir"));
    }

    #[test]
    fn empty_name_is_never_excluded() {
        let set = ExclusionSet::parse("a.b");
        assert!(!set.excludes_name(""));
    }
}
