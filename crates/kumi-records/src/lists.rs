//! Selection, exclusion and grade list readers.
//!
//! Selection and exclusion lists fall back to a sample file when the primary
//! file does not exist, and to an empty list when neither does.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use kumi_engine::Priorities;

use crate::error::RecordsError;

pub(crate) fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.flexible(true).trim(Trim::All);
    builder
}

fn resolve<'p>(path: &'p Path, sample: Option<&'p Path>) -> Option<&'p Path> {
    if path.exists() {
        return Some(path);
    }
    let sample = sample.filter(|sample| sample.exists())?;
    tracing::debug!(
        path = %path.display(),
        sample = %sample.display(),
        "list file missing, using sample"
    );
    Some(sample)
}

fn open(path: &Path) -> Result<File, RecordsError> {
    File::open(path).map_err(RecordsError::io(path))
}

/// Symbols from the `kanji` column of the selection file.
///
/// # Errors
///
/// Returns [`RecordsError::MissingColumn`] when the resolved file has a header
/// without a `kanji` column, or an I/O or CSV error.
pub fn read_selection(path: &Path, sample: Option<&Path>) -> Result<Vec<String>, RecordsError> {
    let Some(resolved) = resolve(path, sample) else {
        return Ok(Vec::new());
    };
    let mut reader = reader_builder().from_reader(open(resolved)?);
    let headers = reader.headers().map_err(RecordsError::csv(resolved))?;
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    let column = headers
        .iter()
        .position(|header| header == "kanji")
        .ok_or_else(|| RecordsError::MissingColumn {
            column: "kanji",
            path: resolved.to_path_buf(),
        })?;

    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record.map_err(RecordsError::csv(resolved))?;
        if let Some(symbol) = record.get(column).filter(|cell| !cell.is_empty()) {
            symbols.push(symbol.to_string());
        }
    }
    Ok(symbols)
}

/// First cell of every line of the exclusion file, without a leading `kanji`
/// header cell.
///
/// # Errors
///
/// Returns an I/O or CSV error.
pub fn read_exclusions(path: &Path, sample: Option<&Path>) -> Result<Vec<String>, RecordsError> {
    let Some(resolved) = resolve(path, sample) else {
        return Ok(Vec::new());
    };
    let mut reader = reader_builder()
        .has_headers(false)
        .from_reader(open(resolved)?);

    let mut symbols = Vec::new();
    for record in reader.records() {
        let record = record.map_err(RecordsError::csv(resolved))?;
        if let Some(symbol) = record.get(0).filter(|cell| !cell.is_empty()) {
            symbols.push(symbol.to_string());
        }
    }
    if symbols
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("kanji"))
    {
        symbols.remove(0);
    }
    Ok(symbols)
}

/// Grade lookup from the `kanji` and `grade` columns.
///
/// A missing file, a missing column or an empty file yields no priorities.
/// Grades that are not integers leave the symbol without a priority.
///
/// # Errors
///
/// Returns an I/O or CSV error.
pub fn read_grades(path: &Path) -> Result<Priorities, RecordsError> {
    if !path.exists() {
        return Ok(Priorities::new());
    }
    let mut reader = reader_builder().from_reader(open(path)?);
    let headers = reader.headers().map_err(RecordsError::csv(path))?;
    let find = |name: &str| headers.iter().position(|header| header == name);
    let (Some(symbol_column), Some(grade_column)) = (find("kanji"), find("grade")) else {
        tracing::debug!(path = %path.display(), "grade file lacks kanji/grade columns");
        return Ok(Priorities::new());
    };

    let mut priorities = Priorities::new();
    for record in reader.records() {
        let record = record.map_err(RecordsError::csv(path))?;
        let symbol = record.get(symbol_column).unwrap_or_default();
        if symbol.is_empty() {
            continue;
        }
        match record.get(grade_column).map(str::parse::<i64>) {
            Some(Ok(grade)) => priorities.insert(symbol, grade),
            _ => priorities.remove(symbol),
        }
    }
    Ok(priorities)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::{read_exclusions, read_grades, read_selection};
    use crate::error::RecordsError;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn selection_reads_kanji_column() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "selection.csv", "note,kanji\nfirst,日\n,\nsecond, 月 \n");
        assert_eq!(read_selection(&path, None).expect("readable"), vec!["日", "月"]);
    }

    #[test]
    fn selection_falls_back_to_sample() {
        let dir = TempDir::new().expect("tempdir");
        let sample = write(&dir, "selection.sample.csv", "kanji\n十\n");
        let missing = dir.path().join("selection.csv");
        let selection = read_selection(&missing, Some(sample.as_path())).expect("readable");
        assert_eq!(selection, vec!["十"]);
        assert!(read_selection(&missing, None).expect("readable").is_empty());
    }

    #[test]
    fn selection_without_kanji_header_is_fatal() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "selection.csv", "symbol\n日\n");
        let err = read_selection(&path, None).expect_err("kanji column is required");
        assert!(matches!(err, RecordsError::MissingColumn { column: "kanji", .. }));
    }

    #[test]
    fn empty_selection_file_is_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "selection.csv", "");
        assert!(read_selection(&path, None).expect("readable").is_empty());
    }

    #[test]
    fn exclusions_drop_header_cell() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "exclusions.csv", "Kanji,why\n朝,later\n\n明\n");
        assert_eq!(read_exclusions(&path, None).expect("readable"), vec!["朝", "明"]);
    }

    #[test]
    fn exclusions_without_header_keep_first_line() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "exclusions.csv", "朝\n明\n");
        assert_eq!(read_exclusions(&path, None).expect("readable"), vec!["朝", "明"]);
    }

    #[test]
    fn grades_parse_integers_only() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "grades.csv", "kanji,grade\n日,1\n月,x\n十,2\n,3\n");
        let grades = read_grades(&path).expect("readable");
        assert_eq!(grades.get("日"), Some(1));
        assert_eq!(grades.get("月"), None);
        assert_eq!(grades.get("十"), Some(2));
        assert_eq!(grades.len(), 2);
    }

    #[test]
    fn grades_missing_file_or_column_are_empty() {
        let dir = TempDir::new().expect("tempdir");
        assert!(read_grades(&dir.path().join("grades.csv")).expect("readable").is_empty());
        let path = write(&dir, "grades.csv", "kanji,level\n日,1\n");
        assert!(read_grades(&path).expect("readable").is_empty());
    }
}
