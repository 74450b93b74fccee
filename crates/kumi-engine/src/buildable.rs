//! Buildability: which corpus entries a known set can construct.

use std::collections::HashSet;

use kumi_core::{Corpus, Entry, KnownSet};

use crate::closure::expand;

/// Closure of a selection together with the entries it makes buildable.
#[derive(Debug, Clone)]
pub struct BuildResult<'c> {
    pub components: KnownSet,
    /// Buildable entries in corpus order.
    pub buildable: Vec<&'c Entry>,
}

impl<'c> BuildResult<'c> {
    #[must_use]
    pub fn buildable_symbols(&self) -> HashSet<&'c str> {
        self.buildable.iter().map(|entry| entry.symbol.as_str()).collect()
    }
}

/// Entries with at least one component, not selected, not excluded, and whose
/// every direct component is in `components`.
#[must_use]
pub fn filter_buildable<'c>(
    corpus: &'c Corpus,
    components: &KnownSet,
    selection: &HashSet<&str>,
    excluded: &HashSet<&str>,
) -> Vec<&'c Entry> {
    corpus
        .iter()
        .filter(|entry| {
            !entry.is_primitive()
                && !selection.contains(entry.symbol.as_str())
                && !excluded.contains(entry.symbol.as_str())
                && entry
                    .components
                    .iter()
                    .all(|component| components.contains(component))
        })
        .collect()
}

/// Expand `selection` and filter the corpus against the closure.
#[must_use]
pub fn compute_buildable<'c, S, E>(
    corpus: &'c Corpus,
    selection: &[S],
    excluded: &[E],
) -> BuildResult<'c>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let selection: Vec<&str> = selection.iter().map(AsRef::as_ref).collect();
    let excluded: HashSet<&str> = excluded.iter().map(AsRef::as_ref).collect();
    build(corpus, &selection, &excluded)
}

pub(crate) fn build<'c>(
    corpus: &'c Corpus,
    selection: &[&str],
    excluded: &HashSet<&str>,
) -> BuildResult<'c> {
    let components = expand(corpus, selection);
    let selection_set: HashSet<&str> = selection.iter().copied().collect();
    let buildable = filter_buildable(corpus, &components, &selection_set, excluded);
    BuildResult {
        components,
        buildable,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use kumi_core::{Corpus, Entry, KnownSet};
    use pretty_assertions::assert_eq;

    use super::{compute_buildable, filter_buildable};

    const NONE: [&str; 0] = [];

    fn corpus() -> Corpus {
        Corpus::from_entries([
            Entry::primitive("日").with_labels(["day"]),
            Entry::primitive("月").with_labels(["month"]),
            Entry::new("明", ["日", "月"]).with_labels(["bright"]),
            Entry::new("昌", ["日", "日"]).with_labels(["prosperous"]),
            Entry::new("朝", ["十", "日", "十", "月"]),
        ])
    }

    fn symbols(result: &[&Entry]) -> Vec<String> {
        result.iter().map(|entry| entry.symbol.clone()).collect()
    }

    #[test]
    fn day_and_month_build_bright() {
        let corpus = corpus();
        let result = compute_buildable(&corpus, &["日", "月"], &NONE);
        assert!(result.buildable.iter().any(|entry| entry.symbol == "明"));
        assert_eq!(symbols(&result.buildable), vec!["明", "昌"]);
    }

    #[test]
    fn exclusion_removes_buildable_entry() {
        let corpus = corpus();
        let result = compute_buildable(&corpus, &["日", "月"], &["明"]);
        assert!(result.components.contains("日"));
        assert!(result.components.contains("月"));
        assert!(!result.buildable.iter().any(|entry| entry.symbol == "明"));
    }

    #[test]
    fn selected_entries_are_not_reported_as_buildable() {
        let corpus = corpus();
        let result = compute_buildable(&corpus, &["明"], &NONE);
        assert_eq!(symbols(&result.buildable), vec!["昌"]);
        assert_eq!(result.buildable_symbols(), HashSet::from(["昌"]));
    }

    #[test]
    fn primitives_are_never_buildable() {
        let corpus = corpus();
        let everything: KnownSet = ["日", "月", "十"].into_iter().collect();
        let buildable = filter_buildable(&corpus, &everything, &HashSet::new(), &HashSet::new());
        assert_eq!(symbols(&buildable), vec!["明", "昌", "朝"]);
    }

    #[test]
    fn missing_selection_symbols_still_act_as_primitives() {
        let corpus = corpus();
        let result = compute_buildable(&corpus, &["十", "日", "月"], &NONE);
        assert!(result.components.contains("十"));
        assert_eq!(symbols(&result.buildable), vec!["明", "昌", "朝"]);
    }
}
