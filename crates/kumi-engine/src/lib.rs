//! # kumi-engine
//!
//! The computations kumi runs over a loaded [`Corpus`](kumi_core::Corpus):
//! - [`closure`]: components transitively reachable from a seed set
//! - [`buildable`]: corpus entries fully constructible from a known set
//! - [`rank`]: marginal gain of adding one more symbol or component
//! - [`schedule`]: greedy learning order that introduces one component at a time
//! - [`inventory`]: per-target component listings and single-component unlocks
//!
//! Every computation re-derives its state from the corpus and owns it for the
//! duration of the call. Nothing is cached between calls.

pub mod buildable;
pub mod closure;
pub mod inventory;
pub mod rank;
pub mod schedule;

pub use buildable::{BuildResult, compute_buildable, filter_buildable};
pub use closure::{LabelPolicy, expand, expand_with};
pub use inventory::{Inventory, Unlock, component_inventory};
pub use rank::{
    ComponentOrder, GRADE_POINT_CEILING, Priorities, RankOptions, Suggestion,
    rank_next_component, rank_next_component_by_grade, rank_next_symbol,
};
pub use schedule::{Schedule, ScheduleOptions, ScheduledEntry, build_schedule};
