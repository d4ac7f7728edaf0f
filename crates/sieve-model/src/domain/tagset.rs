use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::Tag;

/// Set of exclusion tags attached to one case, based on [`BTreeSet`].
///
/// The set is populated when the case is declared and never mutated after
/// registration, so lookups are safe from any number of concurrent tasks.
/// Iteration order is deterministic (lexicographic by tag name).
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(pub BTreeSet<Tag>);

impl TagSet {
    /// Create an empty set of tags.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns `true` if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert a tag.
    ///
    /// Returns `self` for chaining. Inserting a tag that is already
    /// present is a no-op.
    pub fn insert(&mut self, tag: Tag) -> &mut Self {
        self.0.insert(tag);
        self
    }

    /// Returns `true` iff the set contains the given tag.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    /// Get the stored tag equal to the given one, if present.
    pub fn get(&self, tag: &Tag) -> Option<&Tag> {
        self.0.get(tag)
    }

    /// Iterate through all tags in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::TagSet;
    use crate::domain::Tag;

    fn tag(name: &str) -> Tag {
        Tag::new(name).unwrap()
    }

    #[test]
    fn new_is_empty() {
        let set = TagSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&tag("slow")));
    }

    #[test]
    fn get_returns_stored_tag() {
        let mut set = TagSet::new();
        set.insert(tag("document-mode"));

        assert_eq!(set.get(&tag("document-mode")), Some(&tag("document-mode")));
        assert!(set.get(&tag("slow")).is_none());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = TagSet::new();
        set.insert(tag("slow"));
        set.insert(tag("slow"));

        assert_eq!(set.len(), 1);
        assert!(set.contains(&tag("slow")));
    }

    #[test]
    fn iteration_is_lexicographic() {
        let set: TagSet = [tag("slow"), tag("document-mode"), tag("net-down")]
            .into_iter()
            .collect();

        let names: Vec<_> = set.iter().map(Tag::as_str).collect();
        assert_eq!(names, ["document-mode", "net-down", "slow"]);
    }

    #[test]
    fn serde_transparent_roundtrip_json() {
        let set: TagSet = [tag("document-mode"), tag("slow")].into_iter().collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["document-mode","slow"]"#);

        let back: TagSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
