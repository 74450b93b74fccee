//! Greedy curriculum scheduling.
//!
//! The scheduler alternates between two phases:
//!
//! ```text
//! flush ──(nothing buildable)──▶ select ──(component introduced)──▶ flush
//!   │                              │
//!   └──(nothing remaining)──▶ done ◀──(no candidate unlocks anything)
//! ```
//!
//! `flush` drains every remaining entry whose direct components have all been
//! introduced, sorted by weight descending, then label, then symbol. `select`
//! introduces the single component that unlocks the highest total weight of
//! remaining entries, breaking ties by unlocked count and then by component.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use kumi_core::level::display_level;
use kumi_core::report::{INITIAL_BATCH, IntroductionRecord, ScheduleRow, join_components};
use kumi_core::{ComponentUsage, Corpus, Entry};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    /// Evaluate select-phase candidates on the rayon pool.
    pub parallel: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// An entry placed in the learning order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEntry<'c> {
    /// 1-based.
    pub position: usize,
    pub entry: &'c Entry,
    /// Component whose introduction released this entry, [`INITIAL_BATCH`]
    /// for the first flush.
    pub introduced_by: String,
}

impl ScheduledEntry<'_> {
    #[must_use]
    pub fn to_row(&self) -> ScheduleRow {
        ScheduleRow {
            position: self.position,
            symbol: self.entry.symbol.clone(),
            label: self.entry.primary_label().to_string(),
            level: display_level(&self.entry.level).to_string(),
            weight: self.entry.weight,
            introduced_by: self.introduced_by.clone(),
            components: join_components(&self.entry.components),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule<'c> {
    pub entries: Vec<ScheduledEntry<'c>>,
    pub introductions: Vec<IntroductionRecord>,
    /// Entries that could not be ordered, sorted by symbol.
    pub residual: Vec<&'c Entry>,
}

impl Schedule<'_> {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.residual.is_empty()
    }

    #[must_use]
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.entries.iter().map(ScheduledEntry::to_row).collect()
    }

    #[must_use]
    pub fn residual_symbols(&self) -> Vec<&str> {
        self.residual.iter().map(|entry| entry.symbol.as_str()).collect()
    }
}

/// Order every corpus entry, introducing components one at a time.
#[must_use]
pub fn build_schedule(corpus: &Corpus, options: ScheduleOptions) -> Schedule<'_> {
    let usage = corpus.component_usage();
    let mut scheduler = Scheduler::new(corpus, &usage, options);
    let mut phase = Phase::Flush;

    while !scheduler.remaining.is_empty() {
        phase = match phase {
            Phase::Flush => {
                if scheduler.flush() == 0 {
                    Phase::Select
                } else {
                    Phase::Flush
                }
            }
            Phase::Select => match scheduler.select() {
                Some(candidate) => {
                    scheduler.introduce(candidate);
                    Phase::Flush
                }
                None => break,
            },
        };
    }

    scheduler.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Flush,
    Select,
}

#[derive(Debug)]
struct Candidate<'u> {
    component: &'u str,
    unlocked: Vec<usize>,
    total_weight: u64,
}

/// Best candidate first: weight desc, unlocked count desc, component asc.
fn rank_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.total_weight
        .cmp(&a.total_weight)
        .then_with(|| b.unlocked.len().cmp(&a.unlocked.len()))
        .then_with(|| a.component.cmp(b.component))
}

struct Scheduler<'c, 'u> {
    corpus: &'c Corpus,
    usage: &'u ComponentUsage,
    options: ScheduleOptions,
    introduced: HashSet<&'u str>,
    remaining: BTreeSet<usize>,
    batch_label: Option<String>,
    entries: Vec<ScheduledEntry<'c>>,
    introductions: Vec<IntroductionRecord>,
}

impl<'c, 'u> Scheduler<'c, 'u> {
    fn new(corpus: &'c Corpus, usage: &'u ComponentUsage, options: ScheduleOptions) -> Self {
        Self {
            corpus,
            usage,
            options,
            introduced: HashSet::new(),
            remaining: (0..corpus.len()).collect(),
            batch_label: Some(INITIAL_BATCH.to_string()),
            entries: Vec::with_capacity(corpus.len()),
            introductions: Vec::new(),
        }
    }

    fn entry(&self, position: usize) -> &'c Entry {
        &self.corpus.entries()[position]
    }

    /// Drain every remaining entry that is satisfied by the introduced set.
    /// Returns the number drained.
    fn flush(&mut self) -> usize {
        let mut available: Vec<usize> = self
            .remaining
            .iter()
            .copied()
            .filter(|&position| {
                self.entry(position)
                    .components
                    .iter()
                    .all(|component| self.introduced.contains(component.as_str()))
            })
            .collect();
        if available.is_empty() {
            return 0;
        }

        available.sort_by(|&a, &b| {
            let (a, b) = (self.entry(a), self.entry(b));
            b.weight
                .cmp(&a.weight)
                .then_with(|| a.primary_label().cmp(b.primary_label()))
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        let introduced_by = self.batch_label.take().unwrap_or_default();
        for &position in &available {
            self.remaining.remove(&position);
            let entry = self.entry(position);
            let scheduled_at = self.entries.len() + 1;
            self.entries.push(ScheduledEntry {
                position: scheduled_at,
                entry,
                introduced_by: introduced_by.clone(),
            });
        }
        tracing::debug!(
            batch = %introduced_by,
            drained = available.len(),
            remaining = self.remaining.len(),
            "flushed buildable entries"
        );
        available.len()
    }

    /// The best component to introduce next, if any unlocks an entry.
    fn select(&self) -> Option<Candidate<'u>> {
        let unused: Vec<&'u str> = self
            .usage
            .components()
            .filter(|component| !self.introduced.contains(component))
            .collect();

        if self.options.parallel {
            unused
                .par_iter()
                .filter_map(|&component| self.evaluate(component))
                .min_by(rank_candidates)
        } else {
            unused
                .iter()
                .filter_map(|&component| self.evaluate(component))
                .min_by(rank_candidates)
        }
    }

    fn evaluate(&self, component: &'u str) -> Option<Candidate<'u>> {
        let users = self.usage.users_of(component)?;
        let unlocked: Vec<usize> = users
            .iter()
            .copied()
            .filter(|position| self.remaining.contains(position))
            .filter(|&position| {
                self.entry(position)
                    .components
                    .iter()
                    .all(|c| c == component || self.introduced.contains(c.as_str()))
            })
            .collect();
        if unlocked.is_empty() {
            return None;
        }
        let total_weight = unlocked
            .iter()
            .map(|&position| u64::from(self.entry(position).weight))
            .sum();
        Some(Candidate {
            component,
            unlocked,
            total_weight,
        })
    }

    fn introduce(&mut self, candidate: Candidate<'u>) {
        let record = IntroductionRecord {
            order: self.introductions.len() + 1,
            component: candidate.component.to_string(),
            total_weight: candidate.total_weight,
            unlocked_count: candidate.unlocked.len(),
        };
        tracing::debug!(
            order = record.order,
            component = %record.component,
            total_weight = record.total_weight,
            unlocked = record.unlocked_count,
            "introduced component"
        );
        self.introduced.insert(candidate.component);
        self.batch_label = Some(record.component.clone());
        self.introductions.push(record);
    }

    fn finish(self) -> Schedule<'c> {
        let mut residual: Vec<&'c Entry> = self
            .remaining
            .iter()
            .map(|&position| self.entry(position))
            .collect();
        residual.sort_by(|a, b| a.symbol.cmp(&b.symbol));

        if !residual.is_empty() {
            let symbols = residual
                .iter()
                .map(|entry| entry.symbol.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                count = residual.len(),
                %symbols,
                "unable to resolve ordering for remaining entries"
            );
        }

        Schedule {
            entries: self.entries,
            introductions: self.introductions,
            residual,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use kumi_core::{Corpus, Entry, WeightTable};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{ScheduleOptions, build_schedule};

    fn table() -> WeightTable {
        WeightTable::default()
    }

    fn kanji() -> Corpus {
        let t = table();
        Corpus::from_entries([
            Entry::primitive("日").with_labels(["day"]).with_level("N5", &t),
            Entry::primitive("月").with_labels(["month"]).with_level("N5", &t),
            Entry::new("明", ["日", "月"]).with_labels(["bright"]).with_level("N4", &t),
            Entry::new("昌", ["日", "日"])
                .with_labels(["prosperous"])
                .with_level("N1", &t),
            Entry::new("朝", ["十", "日", "十", "月"])
                .with_labels(["morning"])
                .with_level("N3", &t),
            Entry::new("早", ["日", "十"]).with_labels(["early"]).with_level("N4", &t),
        ])
    }

    fn order(corpus: &Corpus, parallel: bool) -> Vec<(String, String)> {
        build_schedule(corpus, ScheduleOptions { parallel })
            .entries
            .iter()
            .map(|item| (item.entry.symbol.clone(), item.introduced_by.clone()))
            .collect()
    }

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn interleaves_introductions_and_flushes(#[case] parallel: bool) {
        let corpus = kanji();
        let schedule = build_schedule(&corpus, ScheduleOptions { parallel });

        // Primitives have no components and drain first; 日 and 月 tie on
        // weight and sort by label.
        let expected = vec![
            ("日", "INITIAL"),
            ("月", "INITIAL"),
            ("昌", "日"),
            ("早", "十"),
            ("明", "月"),
            ("朝", "月"),
        ];
        let actual: Vec<(&str, &str)> = schedule
            .entries
            .iter()
            .map(|item| (item.entry.symbol.as_str(), item.introduced_by.as_str()))
            .collect();
        assert_eq!(actual, expected);

        let log: Vec<(&str, u64, usize)> = schedule
            .introductions
            .iter()
            .map(|r| (r.component.as_str(), r.total_weight, r.unlocked_count))
            .collect();
        // 十 and 月 tie at 70/1 in the second round; 十 sorts first.
        assert_eq!(log, vec![("日", 10, 1), ("十", 70, 1), ("月", 110, 2)]);
        assert!(schedule.is_complete());
    }

    #[test]
    fn positions_are_one_based_and_contiguous() {
        let corpus = kanji();
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        let positions: Vec<usize> = schedule.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, (1..=corpus.len()).collect::<Vec<_>>());
    }

    #[test]
    fn every_entry_scheduled_exactly_once() {
        let corpus = kanji();
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        let symbols: HashSet<&str> = schedule
            .entries
            .iter()
            .map(|e| e.entry.symbol.as_str())
            .collect();
        assert_eq!(symbols.len(), corpus.len());
        assert_eq!(schedule.entries.len(), corpus.len());
    }

    #[test]
    fn introduced_by_precedes_entry_in_log() {
        let corpus = kanji();
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        for item in &schedule.entries {
            if item.introduced_by == "INITIAL" {
                continue;
            }
            let introduced_at = schedule
                .introductions
                .iter()
                .position(|r| r.component == item.introduced_by)
                .expect("tag must name a logged component");
            for component in &item.entry.components {
                let at = schedule
                    .introductions
                    .iter()
                    .position(|r| &r.component == component)
                    .expect("every component is introduced");
                assert!(at <= introduced_at);
            }
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let corpus = kanji();
        assert_eq!(order(&corpus, true), order(&corpus, true));
        assert_eq!(order(&corpus, true), order(&corpus, false));
    }

    #[test]
    fn weight_outranks_unlocked_count() {
        let corpus = Corpus::from_entries([
            Entry::new("heavy", ["H"]).with_weight(100),
            Entry::new("l1", ["L"]).with_weight(10),
            Entry::new("l2", ["L"]).with_weight(10),
            Entry::new("l3", ["L"]).with_weight(10),
        ]);
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        assert_eq!(schedule.introductions[0].component, "H");
        assert_eq!(schedule.introductions[1].component, "L");
        assert_eq!(schedule.introductions[1].total_weight, 30);
        assert_eq!(schedule.introductions[1].unlocked_count, 3);
    }

    #[test]
    fn count_then_component_break_weight_ties() {
        let corpus = Corpus::from_entries([
            Entry::new("one", ["Q"]).with_weight(20),
            Entry::new("two_a", ["P"]).with_weight(10),
            Entry::new("two_b", ["P"]).with_weight(10),
            Entry::new("z_one", ["Z"]).with_weight(5),
            Entry::new("y_one", ["Y"]).with_weight(5),
        ]);
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        let components: Vec<&str> = schedule
            .introductions
            .iter()
            .map(|r| r.component.as_str())
            .collect();
        assert_eq!(components, vec!["P", "Q", "Y", "Z"]);
    }

    #[test]
    fn cycles_resolve_through_single_introductions() {
        let corpus = Corpus::from_entries([
            Entry::new("A", ["B"]),
            Entry::new("B", ["A"]),
            Entry::new("X", ["X"]),
        ]);
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        assert!(schedule.is_complete());
        assert_eq!(schedule.entries.len(), 3);
    }

    #[test]
    fn unreachable_entries_are_left_as_residual() {
        let corpus = Corpus::from_entries([
            Entry::primitive("日"),
            Entry::new("明", ["日"]),
            Entry::new("謎", ["P", "Q"]),
            Entry::new("秘", ["R", "S"]),
        ]);
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        assert!(!schedule.is_complete());
        assert_eq!(schedule.residual_symbols(), vec!["秘", "謎"]);
        let scheduled: Vec<&str> = schedule
            .entries
            .iter()
            .map(|e| e.entry.symbol.as_str())
            .collect();
        assert_eq!(scheduled, vec!["日", "明"]);
        assert_eq!(schedule.introductions.len(), 1);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn residual_entries_are_logged_as_a_warning() {
        let corpus = Corpus::from_entries([
            Entry::primitive("日"),
            Entry::new("謎", ["P", "Q"]),
            Entry::new("秘", ["R", "S"]),
        ]);
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            build_schedule(&corpus, ScheduleOptions { parallel: false })
        });

        let logs = String::from_utf8(captured.0.lock().expect("log buffer").clone())
            .expect("utf-8 logs");
        assert!(logs.contains("WARN"));
        assert!(logs.contains("unable to resolve ordering"));
        assert!(logs.contains("count=2"));
        assert!(logs.contains("symbols=秘, 謎"));
    }

    #[test]
    fn complete_schedule_logs_no_warning() {
        let corpus = kanji();
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::WARN)
            .finish();

        let schedule = tracing::subscriber::with_default(subscriber, || {
            build_schedule(&corpus, ScheduleOptions { parallel: false })
        });

        assert!(schedule.is_complete());
        assert!(captured.0.lock().expect("log buffer").is_empty());
    }

    #[test]
    fn rows_flatten_for_writers() {
        let corpus = kanji();
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        let row = schedule
            .rows()
            .into_iter()
            .find(|row| row.symbol == "朝")
            .expect("朝 is scheduled");
        assert_eq!(row.label, "morning");
        assert_eq!(row.level, "N3");
        assert_eq!(row.weight, 40);
        assert_eq!(row.components, "十; 日; 十; 月");
    }

    #[test]
    fn blank_level_renders_as_none() {
        let corpus = Corpus::from_entries([Entry::primitive("日")]);
        let schedule = build_schedule(&corpus, ScheduleOptions::default());
        assert_eq!(schedule.rows()[0].level, "None");
        assert_eq!(schedule.rows()[0].introduced_by, "INITIAL");
    }
}
