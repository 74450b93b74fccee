//! Corpus index: symbol lookups over the loaded entries.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::entry::Entry;
use crate::known_set::KnownSet;

/// The loaded corpus, keyed by symbol.
///
/// Symbols are unique. When the same symbol is loaded twice the later record
/// replaces the earlier one but keeps its position. Entries with a blank
/// symbol are dropped.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Corpus {
    #[must_use]
    pub fn from_entries<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut corpus = Self::default();
        for entry in entries {
            if entry.symbol.trim().is_empty() {
                continue;
            }
            match corpus.index.get(&entry.symbol) {
                Some(&position) => corpus.entries[position] = entry,
                None => {
                    corpus.index.insert(entry.symbol.clone(), corpus.entries.len());
                    corpus.entries.push(entry);
                }
            }
        }
        corpus
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<&Entry> {
        self.index.get(symbol).map(|&position| &self.entries[position])
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    #[must_use]
    pub fn components_of(&self, symbol: &str) -> Option<&[String]> {
        self.get(symbol).map(|entry| entry.components.as_slice())
    }

    #[must_use]
    pub fn labels_of(&self, symbol: &str) -> Option<&[String]> {
        self.get(symbol).map(|entry| entry.labels.as_slice())
    }

    #[must_use]
    pub fn weight_of(&self, symbol: &str) -> Option<u32> {
        self.get(symbol).map(|entry| entry.weight)
    }

    /// Entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every direct component referenced by any entry, first-seen order.
    #[must_use]
    pub fn distinct_components(&self) -> KnownSet {
        self.entries
            .iter()
            .flat_map(|entry| entry.components.iter())
            .filter(|component| !component.trim().is_empty())
            .map(String::as_str)
            .collect()
    }

    /// Reverse index from component to the entries that use it.
    #[must_use]
    pub fn component_usage(&self) -> ComponentUsage {
        let mut users: BTreeMap<String, BTreeSet<usize>> = BTreeMap::new();
        for (position, entry) in self.entries.iter().enumerate() {
            for component in &entry.components {
                if component.trim().is_empty() {
                    continue;
                }
                users.entry(component.clone()).or_default().insert(position);
            }
        }
        ComponentUsage { users }
    }

    /// Input symbols absent from the corpus, in input order.
    #[must_use]
    pub fn missing<'a, S: AsRef<str>>(&self, symbols: &'a [S]) -> Vec<&'a str> {
        symbols
            .iter()
            .map(AsRef::as_ref)
            .filter(|symbol| !self.contains(symbol))
            .collect()
    }
}

impl FromIterator<Entry> for Corpus {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self::from_entries(iter)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Component to the positions (in [`Corpus::entries`]) of entries using it.
///
/// Built once per corpus snapshot so candidate evaluation never rescans the
/// whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentUsage {
    users: BTreeMap<String, BTreeSet<usize>>,
}

impl ComponentUsage {
    #[must_use]
    pub fn users_of(&self, component: &str) -> Option<&BTreeSet<usize>> {
        self.users.get(component)
    }

    /// Components in lexicographic order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.users.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Corpus;
    use crate::entry::Entry;

    fn sample() -> Corpus {
        Corpus::from_entries([
            Entry::primitive("日").with_labels(["day"]),
            Entry::primitive("月").with_labels(["month"]),
            Entry::new("明", ["日", "月"]).with_labels(["bright"]),
            Entry::new("朝", ["十", "日", "十", "月"]),
        ])
    }

    #[test]
    fn lookups_by_symbol() {
        let corpus = sample();
        assert_eq!(corpus.len(), 4);
        assert_eq!(
            corpus.components_of("明"),
            Some(["日".to_string(), "月".to_string()].as_slice())
        );
        assert_eq!(corpus.labels_of("日"), Some(["day".to_string()].as_slice()));
        assert_eq!(corpus.weight_of("月"), Some(1));
        assert!(corpus.get("十").is_none());
    }

    #[test]
    fn duplicate_symbol_last_write_wins_in_place() {
        let corpus = Corpus::from_entries([
            Entry::primitive("A"),
            Entry::primitive("B"),
            Entry::new("A", ["B"]).with_weight(7),
        ]);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].symbol, "A");
        assert_eq!(corpus.entries()[0].components, vec!["B"]);
        assert_eq!(corpus.weight_of("A"), Some(7));
    }

    #[test]
    fn blank_symbols_are_dropped() {
        let corpus = Corpus::from_entries([Entry::primitive(" "), Entry::primitive("A")]);
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn distinct_components_keep_first_seen_order() {
        let components = sample().distinct_components();
        assert_eq!(components.as_slice(), ["日", "月", "十"]);
    }

    #[test]
    fn component_usage_indexes_entries() {
        let usage = sample().component_usage();
        assert_eq!(usage.len(), 3);
        let users: Vec<usize> =
            usage.users_of("日").expect("日 is used").iter().copied().collect();
        assert_eq!(users, vec![2, 3]);
        assert_eq!(usage.users_of("十").map(|set| set.len()), Some(1));
        assert!(usage.users_of("明").is_none());
    }

    #[test]
    fn missing_keeps_input_order() {
        let corpus = sample();
        let selection = ["X", "日", "Y"];
        assert_eq!(corpus.missing(&selection[..]), vec!["X", "Y"]);
    }
}
