use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of urls the user has pinned locally
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    urls: BTreeSet<String>,
}

impl PinSet {
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Flip membership of `url`, returning whether it is now pinned.
    ///
    /// Urls are not checked against any bookmark list.
    pub fn toggle(&mut self, url: &str) -> bool {
        if self.urls.remove(url) {
            false
        } else {
            self.urls.insert(url.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PinSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut pins = PinSet::default();
        assert!(pins.toggle("a.com"));
        assert!(pins.contains("a.com"));
        assert!(!pins.toggle("a.com"));
        assert!(pins.is_empty());
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let pins: PinSet = ["b.com", "a.com"].into_iter().collect();
        assert_eq!(serde_json::to_string(&pins).unwrap(), r#"["a.com","b.com"]"#);

        let back: PinSet = serde_json::from_str(r#"["x.org"]"#).unwrap();
        assert!(back.contains("x.org"));
        assert_eq!(back.len(), 1);
    }

    proptest! {
        #[test]
        fn toggling_twice_restores_membership(
            initial in proptest::collection::vec("[a-z]{1,6}\\.com", 0..8),
            url in "[a-z]{1,6}\\.com",
        ) {
            let original: PinSet = initial.into_iter().collect();
            let mut pins = original.clone();
            pins.toggle(&url);
            pins.toggle(&url);
            prop_assert_eq!(pins, original);
        }
    }
}
