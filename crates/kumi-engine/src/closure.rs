//! Transitive component closure.
//!
//! Symbols absent from the corpus, and corpus entries without components, are
//! primitives and land in the closure themselves. Composite symbols contribute
//! their direct components and everything reachable from those.
//!
//! Expansion walks an explicit stack of frames. Each top-level call owns its
//! visited set, so a symbol is expanded at most once per call and cyclic
//! decompositions terminate.

use std::collections::HashSet;

use kumi_core::{Corpus, Entry, KnownSet};

/// Whether entry labels are collected into the closure alongside components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Labels of every expanded entry join the closure.
    #[default]
    Merge,
    /// Only components and primitives join the closure.
    Skip,
}

/// Closure of `seed` with labels merged in.
#[must_use]
pub fn expand<S: AsRef<str>>(corpus: &Corpus, seed: &[S]) -> KnownSet {
    expand_with(corpus, seed, LabelPolicy::Merge)
}

/// Closure of `seed` under the given label policy.
#[must_use]
pub fn expand_with<S: AsRef<str>>(corpus: &Corpus, seed: &[S], policy: LabelPolicy) -> KnownSet {
    let mut expander = Expander {
        corpus,
        policy,
        visited: HashSet::new(),
        out: KnownSet::new(),
    };
    for symbol in seed {
        expander.expand_from(symbol.as_ref());
    }
    expander.out
}

struct Frame<'c> {
    components: &'c [String],
    next: usize,
}

struct Expander<'c> {
    corpus: &'c Corpus,
    policy: LabelPolicy,
    visited: HashSet<String>,
    out: KnownSet,
}

impl<'c> Expander<'c> {
    fn expand_from(&mut self, symbol: &str) {
        if symbol.trim().is_empty() || !self.visited.insert(symbol.to_string()) {
            return;
        }
        let Some(root) = self.enter(symbol) else {
            return;
        };

        let mut stack = vec![root];
        while let Some(frame) = stack.last_mut() {
            let components = frame.components;
            let Some(component) = components.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            if component.trim().is_empty() {
                continue;
            }
            self.out.insert(component.as_str());
            if self.visited.insert(component.clone())
                && let Some(child) = self.enter(component)
            {
                stack.push(child);
            }
        }
    }

    /// Record what `symbol` contributes on its own and return a frame for its
    /// components, if it has any.
    fn enter(&mut self, symbol: &str) -> Option<Frame<'c>> {
        let corpus = self.corpus;
        let Some(entry) = corpus.get(symbol) else {
            self.out.insert(symbol);
            return None;
        };
        if self.policy == LabelPolicy::Merge {
            merge_labels(entry, &mut self.out);
        }
        if entry.is_primitive() {
            self.out.insert(symbol);
            return None;
        }
        Some(Frame {
            components: &entry.components,
            next: 0,
        })
    }
}

/// Labels are glosses, not components, but downstream membership tests have
/// always seen them in the same set.
fn merge_labels(entry: &Entry, out: &mut KnownSet) {
    for label in &entry.labels {
        if !label.trim().is_empty() {
            out.insert(label.as_str());
        }
    }
}
