//! # kumi-core
//!
//! Core types shared across all kumi crates.
//!
//! This crate provides the foundational types the engine, record adapters and
//! CLI agree on:
//! - [`Entry`] records and the [`Corpus`] lookup built from them
//! - [`KnownSet`], the insertion-ordered set used for closures
//! - The level/weight table used to value entries
//! - Report rows and CLI response types
//! - Cross-cutting error types

pub mod corpus;
pub mod entry;
pub mod errors;
pub mod known_set;
pub mod level;
pub mod report;
pub mod responses;

pub use corpus::{ComponentUsage, Corpus};
pub use entry::Entry;
pub use errors::CoreError;
pub use known_set::KnownSet;
pub use level::WeightTable;
