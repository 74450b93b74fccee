//! Record adapter error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV, or a failed write through the CSV writer.
    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} must have a '{column}' column", path.display())]
    MissingColumn { column: &'static str, path: PathBuf },
}

impl RecordsError {
    pub(crate) fn csv(path: impl Into<PathBuf>) -> impl FnOnce(csv::Error) -> Self {
        let path = path.into();
        move |source| Self::Csv { path, source }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::RecordsError;

    #[test]
    fn missing_column_names_file_and_column() {
        let err = RecordsError::MissingColumn {
            column: "kanji",
            path: PathBuf::from("heisig-kanjis.csv"),
        };
        assert_eq!(err.to_string(), "heisig-kanjis.csv must have a 'kanji' column");
    }
}
