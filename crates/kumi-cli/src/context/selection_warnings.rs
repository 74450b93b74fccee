use std::path::Path;

use kumi_core::Corpus;

/// Warn once per selection symbol that the corpus does not contain.
pub fn warn_missing<S: AsRef<str>>(corpus: &Corpus, selection: &[S], corpus_path: &Path) {
    for message in missing_warnings(corpus, selection, corpus_path) {
        tracing::warn!("{message}");
    }
}

fn missing_warnings<S: AsRef<str>>(
    corpus: &Corpus,
    selection: &[S],
    corpus_path: &Path,
) -> Vec<String> {
    corpus
        .missing(selection)
        .into_iter()
        .map(|symbol| format!("kanji '{symbol}' not found in {}", corpus_path.display()))
        .collect()
}
