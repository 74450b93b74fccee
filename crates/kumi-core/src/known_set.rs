//! Insertion-ordered deduplicated string set.
//!
//! Membership is what matters for closure tests; the insertion order only makes
//! iteration (and therefore report output) deterministic. Equality compares
//! membership and ignores order.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Default)]
pub struct KnownSet {
    members: HashSet<String>,
    order: Vec<String>,
}

impl KnownSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value`. Returns `false` (and changes nothing) if already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.members.contains(&value) {
            return false;
        }
        self.members.insert(value.clone());
        self.order.push(value);
        true
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.members.contains(value)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.order.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.order.iter().all(|value| other.contains(value))
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl PartialEq for KnownSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for KnownSet {}

impl<S: Into<String>> Extend<S> for KnownSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KnownSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a KnownSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for KnownSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

impl<'de> Deserialize<'de> for KnownSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(Self::from_iter)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::KnownSet;

    #[test]
    fn insert_is_noop_when_present() {
        let mut set = KnownSet::new();
        assert!(set.insert("日"));
        assert!(set.insert("月"));
        assert!(!set.insert("日"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.as_slice(), ["日", "月"]);
    }

    #[test]
    fn equality_ignores_order() {
        let a: KnownSet = ["a", "b", "c"].into_iter().collect();
        let b: KnownSet = ["c", "a", "b"].into_iter().collect();
        assert_eq!(a, b);
        assert_ne!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn subset_checks_membership() {
        let small: KnownSet = ["a"].into_iter().collect();
        let large: KnownSet = ["b", "a"].into_iter().collect();
        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(KnownSet::new().is_subset(&small));
    }

    #[test]
    fn serializes_as_ordered_sequence() {
        let set: KnownSet = ["z", "a", "z"].into_iter().collect();
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["z","a"]"#);
        let back: KnownSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.as_slice(), set.as_slice());
    }
}
