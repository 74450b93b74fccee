//! Corpus reader.
//!
//! Required columns: `kanji` and `components`. Labels come from
//! `keyword_6th_ed` (or `keyword`) followed by `keyword_5th_ed`; the level
//! comes from `jlpt`. Every other column is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use kumi_core::{Corpus, Entry, WeightTable};

use crate::error::RecordsError;

/// Separator between components inside the `components` cell.
pub const COMPONENT_DELIMITER: char = ';';

struct Columns {
    symbol: usize,
    components: usize,
    primary_label: Option<usize>,
    secondary_label: Option<usize>,
    level: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord, path: &Path) -> Result<Self, RecordsError> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let required = |column: &'static str| {
            find(column).ok_or_else(|| RecordsError::MissingColumn {
                column,
                path: path.to_path_buf(),
            })
        };
        Ok(Self {
            symbol: required("kanji")?,
            components: required("components")?,
            primary_label: find("keyword_6th_ed").or_else(|| find("keyword")),
            secondary_label: find("keyword_5th_ed"),
            level: find("jlpt"),
        })
    }

    fn entry(&self, record: &StringRecord, weights: &WeightTable) -> Option<Entry> {
        let cell = |idx: usize| record.get(idx).map_or("", str::trim);
        let symbol = cell(self.symbol);
        if symbol.is_empty() {
            return None;
        }
        let components = cell(self.components)
            .split(COMPONENT_DELIMITER)
            .map(str::trim)
            .filter(|component| !component.is_empty());
        let labels = [self.primary_label, self.secondary_label]
            .into_iter()
            .flatten()
            .map(cell);
        let level = self.level.map_or("", cell);
        Some(
            Entry::new(symbol, components)
                .with_labels(labels)
                .with_level(level, weights),
        )
    }
}

/// Read the corpus file at `path`.
///
/// # Errors
///
/// Returns [`RecordsError::MissingColumn`] when `kanji` or `components` is
/// absent from the header, or an I/O or CSV error.
pub fn read_corpus(path: &Path, weights: &WeightTable) -> Result<Corpus, RecordsError> {
    let file = File::open(path).map_err(RecordsError::io(path))?;
    read_corpus_from(file, path, weights)
}

/// Read a corpus from any reader; `path` only names the source in errors.
///
/// # Errors
///
/// Same as [`read_corpus`].
pub fn read_corpus_from<R: Read>(
    reader: R,
    path: &Path,
    weights: &WeightTable,
) -> Result<Corpus, RecordsError> {
    let mut reader = crate::lists::reader_builder().from_reader(reader);
    let headers = reader.headers().map_err(RecordsError::csv(path))?.clone();
    let columns = Columns::locate(&headers, path)?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(RecordsError::csv(path))?;
        if let Some(entry) = columns.entry(&record, weights) {
            entries.push(entry);
        }
    }
    let corpus = Corpus::from_entries(entries);
    tracing::debug!(path = %path.display(), entries = corpus.len(), "loaded corpus");
    Ok(corpus)
}
