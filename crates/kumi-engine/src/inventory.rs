//! Component inventory of a target list, and what one more component unlocks.
//!
//! Closures here leave labels out: the inventory lists components only.

use kumi_core::{CoreError, Corpus, Entry, KnownSet};

use crate::closure::{LabelPolicy, expand_with};

/// Per-target component closures and their union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub per_target: Vec<(String, KnownSet)>,
    /// Union of every target closure, in first-seen order.
    pub all: KnownSet,
}

/// Result of adding one component on top of an [`Inventory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unlock<'c> {
    pub new_component: String,
    pub allowed: KnownSet,
    /// Entries constructible from `allowed`, corpus order.
    pub buildable: Vec<&'c Entry>,
}

/// Build the inventory of `targets`.
///
/// # Errors
///
/// Returns [`CoreError::UnknownSymbols`] when any target is absent from the
/// corpus.
pub fn component_inventory<S: AsRef<str>>(
    corpus: &Corpus,
    targets: &[S],
) -> Result<Inventory, CoreError> {
    let missing = corpus.missing(targets);
    if !missing.is_empty() {
        return Err(CoreError::UnknownSymbols {
            symbols: missing.into_iter().map(ToString::to_string).collect(),
        });
    }

    let mut per_target = Vec::with_capacity(targets.len());
    let mut all = KnownSet::new();
    for target in targets {
        let target = target.as_ref();
        let closure = expand_with(corpus, &[target], LabelPolicy::Skip);
        all.extend(closure.iter().map(String::as_str));
        if closure.is_empty() {
            all.insert(target);
        }
        per_target.push((target.to_string(), closure));
    }

    Ok(Inventory { per_target, all })
}

impl Inventory {
    /// Allow `component` (and its own closure) on top of the inventory and list
    /// what becomes buildable.
    #[must_use]
    pub fn with_component<'c>(&self, corpus: &'c Corpus, component: &str) -> Unlock<'c> {
        let mut allowed = self.all.clone();
        allowed.insert(component);
        allowed.extend(
            expand_with(corpus, &[component], LabelPolicy::Skip)
                .iter()
                .map(String::as_str),
        );
        let buildable = buildable_with(corpus, &allowed);
        Unlock {
            new_component: component.to_string(),
            allowed,
            buildable,
        }
    }
}

/// Entries whose components are all allowed. An entry with no components
/// counts when its own symbol is allowed.
fn buildable_with<'c>(corpus: &'c Corpus, allowed: &KnownSet) -> Vec<&'c Entry> {
    corpus
        .iter()
        .filter(|entry| {
            if entry.is_primitive() {
                allowed.contains(&entry.symbol)
            } else {
                entry
                    .components
                    .iter()
                    .all(|component| !component.trim().is_empty() && allowed.contains(component))
            }
        })
        .collect()
}
