use kumi_core::responses::SuggestionsResponse;
use kumi_engine::Suggestion;

/// Flatten ranked suggestions, keeping the first `limit`.
#[must_use]
pub fn suggestions_response(suggestions: &[Suggestion<'_>], limit: usize) -> SuggestionsResponse {
    SuggestionsResponse {
        total: suggestions.len(),
        suggestions: suggestions.iter().take(limit).map(Suggestion::to_row).collect(),
    }
}
