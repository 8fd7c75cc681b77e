use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Set of technology tags picked for a project.
///
/// Tags are trimmed on insert and blank tags are ignored. Ordering is kept
/// sorted so iteration and serialization are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TechnologySelection {
    tags: BTreeSet<String>,
}

impl TechnologySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the tag was not already selected.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref().trim();
        if tag.is_empty() {
            return false;
        }
        self.tags.insert(tag.to_string())
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        self.tags.remove(tag.trim())
    }

    /// Flip membership of a tag and report whether it is now selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.insert(tag)
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag.trim())
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TechnologySelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}

impl<S: AsRef<str>> Extend<S> for TechnologySelection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let selection: TechnologySelection = ["Docker", "AWS", "Docker", " AWS "].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["AWS", "Docker"]);
    }

    #[test]
    fn blank_tags_are_ignored() {
        let mut selection = TechnologySelection::new();
        assert!(!selection.insert("   "));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = TechnologySelection::new();
        assert!(selection.toggle("Git"));
        assert!(selection.contains("Git"));
        assert!(!selection.toggle("Git"));
        assert!(!selection.contains("Git"));
    }

    #[test]
    fn serializes_as_sorted_list() {
        let selection: TechnologySelection = ["Vue.js", "Laravel"].into_iter().collect();
        let json = serde_json::to_string(&selection).expect("serialize selection");
        assert_eq!(json, r#"["Laravel","Vue.js"]"#);
    }
}
