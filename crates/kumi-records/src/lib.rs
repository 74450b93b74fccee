//! # kumi-records
//!
//! CSV adapters between files on disk and the kumi core types.
//!
//! Readers accept a header row, UTF-8, ragged rows and padded cells. Writers
//! quote a field only when it contains a delimiter, quote or newline.

pub mod corpus;
pub mod error;
pub mod lists;
pub mod writers;

pub use corpus::{read_corpus, read_corpus_from};
pub use error::RecordsError;
pub use lists::{read_exclusions, read_grades, read_selection};
pub use writers::{
    LOG_HEADER, ORDER_HEADER, write_introductions, write_introductions_to, write_schedule,
    write_schedule_to,
};
