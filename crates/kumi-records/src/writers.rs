//! Schedule and introduction-log writers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use kumi_core::report::{IntroductionRecord, ScheduleRow};

use crate::error::RecordsError;

pub const ORDER_HEADER: [&str; 7] = [
    "position",
    "kanji",
    "keyword_6th_ed",
    "jlpt",
    "weight",
    "introduced_by_component",
    "components",
];

pub const LOG_HEADER: [&str; 4] = ["order", "component", "total_weight", "unlocked_kanji"];

fn writer<W: Write>(sink: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(sink)
}

fn create(path: &Path) -> Result<File, RecordsError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(RecordsError::io(parent))?;
    }
    File::create(path).map_err(RecordsError::io(path))
}

/// Write the learning order to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an I/O or CSV error.
pub fn write_schedule(path: &Path, rows: &[ScheduleRow]) -> Result<(), RecordsError> {
    write_schedule_to(create(path)?, path, rows)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote learning order");
    Ok(())
}

/// Write the learning order to any sink; `path` only names it in errors.
///
/// # Errors
///
/// Returns a CSV error.
pub fn write_schedule_to<W: Write>(
    sink: W,
    path: &Path,
    rows: &[ScheduleRow],
) -> Result<(), RecordsError> {
    let mut out = writer(sink);
    out.write_record(ORDER_HEADER).map_err(RecordsError::csv(path))?;
    for row in rows {
        out.write_record([
            row.position.to_string(),
            row.symbol.clone(),
            row.label.clone(),
            row.level.clone(),
            row.weight.to_string(),
            row.introduced_by.clone(),
            row.components.clone(),
        ])
        .map_err(RecordsError::csv(path))?;
    }
    out.flush().map_err(RecordsError::io(path))
}

/// Write the component introduction log to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an I/O or CSV error.
pub fn write_introductions(
    path: &Path,
    records: &[IntroductionRecord],
) -> Result<(), RecordsError> {
    write_introductions_to(create(path)?, path, records)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "wrote introduction log");
    Ok(())
}

/// Write the introduction log to any sink; `path` only names it in errors.
///
/// # Errors
///
/// Returns a CSV error.
pub fn write_introductions_to<W: Write>(
    sink: W,
    path: &Path,
    records: &[IntroductionRecord],
) -> Result<(), RecordsError> {
    let mut out = writer(sink);
    out.write_record(LOG_HEADER).map_err(RecordsError::csv(path))?;
    for record in records {
        out.write_record([
            record.order.to_string(),
            record.component.clone(),
            record.total_weight.to_string(),
            record.unlocked_count.to_string(),
        ])
        .map_err(RecordsError::csv(path))?;
    }
    out.flush().map_err(RecordsError::io(path))
}
