//! Marginal-gain ranking of the next symbol or component to learn.
//!
//! A candidate's gain set is the buildable set of `selection ∪ {candidate}`
//! minus the baseline buildable set. Every candidate is evaluated with a full
//! closure and filter pass over the corpus. Evaluations are independent and may
//! run on the rayon pool; the final order comes only from the sort, so it does
//! not depend on how evaluation was scheduled.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use kumi_core::report::SuggestionRow;
use kumi_core::{Corpus, Entry};
use rayon::prelude::*;

use crate::buildable::{BuildResult, build};

/// External priority per symbol (e.g. school grade). Lower ranks first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Priorities {
    grades: HashMap<String, i64>,
}

impl Priorities {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: impl Into<String>, priority: i64) {
        self.grades.insert(symbol.into(), priority);
    }

    pub fn remove(&mut self, symbol: &str) {
        self.grades.remove(symbol);
    }

    #[must_use]
    pub fn get(&self, symbol: &str) -> Option<i64> {
        self.grades.get(symbol).copied()
    }

    /// Sort key: unknown priority sorts after every known one.
    #[must_use]
    pub fn rank_key(&self, symbol: &str) -> i64 {
        self.get(symbol).unwrap_or(i64::MAX)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Priorities {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        let mut priorities = Self::new();
        for (symbol, priority) in iter {
            priorities.insert(symbol, priority);
        }
        priorities
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Evaluate candidates on the rayon pool.
    pub parallel: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Ordering of component suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComponentOrder {
    /// Gain count descending.
    #[default]
    Gain,
    /// Summed weight of the gained entries descending, then gain count.
    Weight,
}

/// Points an entry of grade `g` contributes to a grade score: `CEILING - g`,
/// clamped to `1..=CEILING`. Ungraded entries earn one point.
pub const GRADE_POINT_CEILING: i64 = 10;

/// A candidate and the entries it would newly make buildable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<'c> {
    pub candidate: String,
    /// Gained entries in corpus order.
    pub gained: Vec<&'c Entry>,
}

impl Suggestion<'_> {
    #[must_use]
    pub fn gain(&self) -> usize {
        self.gained.len()
    }

    #[must_use]
    pub fn weight(&self) -> u64 {
        self.gained.iter().map(|entry| u64::from(entry.weight)).sum()
    }

    /// Sum of grade points over the gained entries; earlier school grades are
    /// worth more.
    #[must_use]
    pub fn grade_score(&self, priorities: &Priorities) -> u64 {
        self.gained
            .iter()
            .map(|entry| {
                priorities.get(&entry.symbol).map_or(1, |grade| {
                    GRADE_POINT_CEILING
                        .saturating_sub(grade)
                        .clamp(1, GRADE_POINT_CEILING)
                        .unsigned_abs()
                })
            })
            .sum()
    }

    #[must_use]
    pub fn to_row(&self) -> SuggestionRow {
        SuggestionRow {
            candidate: self.candidate.clone(),
            gain: self.gain(),
            weight: self.weight(),
            gained: self.gained.iter().map(|entry| entry.symbol.clone()).collect(),
        }
    }
}

/// Rank every corpus symbol not already selected or excluded.
///
/// Order: priority ascending (unknown last), gain descending, symbol ascending.
/// Candidates with an empty gain set are dropped.
#[must_use]
pub fn rank_next_symbol<'c, S, E>(
    corpus: &'c Corpus,
    selection: &[S],
    excluded: &[E],
    baseline: Option<&BuildResult<'c>>,
    priorities: &Priorities,
    options: RankOptions,
) -> Vec<Suggestion<'c>>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let ctx = RankContext::new(corpus, selection, excluded, baseline);
    let selected: HashSet<&str> = ctx.selection.iter().copied().collect();
    let candidates: Vec<&str> = corpus
        .iter()
        .map(|entry| entry.symbol.as_str())
        .filter(|symbol| !selected.contains(symbol) && !ctx.excluded.contains(symbol))
        .collect();

    let mut suggestions = ctx.evaluate_all(&candidates, options);
    suggestions.sort_by(|a, b| {
        priorities
            .rank_key(&a.candidate)
            .cmp(&priorities.rank_key(&b.candidate))
            .then_with(|| b.gain().cmp(&a.gain()))
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    tracing::debug!(
        candidates = candidates.len(),
        suggestions = suggestions.len(),
        "ranked next symbols"
    );
    suggestions
}

/// Rank every direct component in the corpus that is not in the baseline
/// closure.
///
/// Candidates with an empty gain set are dropped; ties always resolve by
/// candidate string.
#[must_use]
pub fn rank_next_component<'c, S, E>(
    corpus: &'c Corpus,
    selection: &[S],
    excluded: &[E],
    baseline: Option<&BuildResult<'c>>,
    order: ComponentOrder,
    options: RankOptions,
) -> Vec<Suggestion<'c>>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let ctx = RankContext::new(corpus, selection, excluded, baseline);
    let pool = corpus.distinct_components();
    let candidates: Vec<&str> = pool
        .iter()
        .map(String::as_str)
        .filter(|component| !ctx.baseline.components.contains(component))
        .collect();

    let mut suggestions = ctx.evaluate_all(&candidates, options);
    suggestions.sort_by(|a, b| compare_components(a, b, order));
    tracing::debug!(
        candidates = candidates.len(),
        suggestions = suggestions.len(),
        ?order,
        "ranked next components"
    );
    suggestions
}

fn compare_components(
    a: &Suggestion<'_>,
    b: &Suggestion<'_>,
    order: ComponentOrder,
) -> Ordering {
    let primary = match order {
        ComponentOrder::Gain => Ordering::Equal,
        ComponentOrder::Weight => b.weight().cmp(&a.weight()),
    };
    primary
        .then_with(|| b.gain().cmp(&a.gain()))
        .then_with(|| a.candidate.cmp(&b.candidate))
}

/// Rank components by the grade score of what they unlock.
///
/// Order: grade score descending, gain descending, candidate ascending.
#[must_use]
pub fn rank_next_component_by_grade<'c, S, E>(
    corpus: &'c Corpus,
    selection: &[S],
    excluded: &[E],
    baseline: Option<&BuildResult<'c>>,
    priorities: &Priorities,
    options: RankOptions,
) -> Vec<Suggestion<'c>>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let ranked = rank_next_component(
        corpus,
        selection,
        excluded,
        baseline,
        ComponentOrder::Gain,
        options,
    );
    let mut scored: Vec<(u64, Suggestion<'c>)> = ranked
        .into_iter()
        .map(|suggestion| (suggestion.grade_score(priorities), suggestion))
        .collect();
    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| b.gain().cmp(&a.gain()))
            .then_with(|| a.candidate.cmp(&b.candidate))
    });
    scored.into_iter().map(|(_, suggestion)| suggestion).collect()
}

/// Inputs shared by every candidate evaluation of one ranking call.
struct RankContext<'c, 's> {
    corpus: &'c Corpus,
    selection: Vec<&'s str>,
    excluded: HashSet<&'s str>,
    baseline: BuildResult<'c>,
    baseline_symbols: HashSet<&'c str>,
}

impl<'c, 's> RankContext<'c, 's> {
    fn new<S, E>(
        corpus: &'c Corpus,
        selection: &'s [S],
        excluded: &'s [E],
        baseline: Option<&BuildResult<'c>>,
    ) -> Self
    where
        S: AsRef<str>,
        E: AsRef<str>,
    {
        let selection: Vec<&str> = selection.iter().map(AsRef::as_ref).collect();
        let excluded: HashSet<&str> = excluded.iter().map(AsRef::as_ref).collect();
        let baseline =
            baseline.map_or_else(|| build(corpus, &selection, &excluded), Clone::clone);
        let baseline_symbols = baseline.buildable_symbols();
        Self {
            corpus,
            selection,
            excluded,
            baseline,
            baseline_symbols,
        }
    }

    fn evaluate_all(&self, candidates: &[&str], options: RankOptions) -> Vec<Suggestion<'c>> {
        if options.parallel {
            candidates
                .par_iter()
                .filter_map(|candidate| self.evaluate(candidate))
                .collect()
        } else {
            candidates
                .iter()
                .filter_map(|candidate| self.evaluate(candidate))
                .collect()
        }
    }

    fn evaluate(&self, candidate: &str) -> Option<Suggestion<'c>> {
        let mut seed = self.selection.clone();
        seed.push(candidate);
        let result = build(self.corpus, &seed, &self.excluded);
        let gained: Vec<&'c Entry> = result
            .buildable
            .into_iter()
            .filter(|entry| !self.baseline_symbols.contains(entry.symbol.as_str()))
            .collect();
        if gained.is_empty() {
            return None;
        }
        Some(Suggestion {
            candidate: candidate.to_string(),
            gained,
        })
    }
}
