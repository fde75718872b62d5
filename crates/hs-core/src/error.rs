use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Failures surfaced by `MatchAnalyzer::analyze`. Nothing is retried
/// internally and no error is converted to a default score.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// An input text is empty or whitespace-only after trimming.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The embedding collaborator could not produce a similarity.
    #[error("embedding service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<EmbeddingError> for AnalyzeError {
    fn from(value: EmbeddingError) -> Self {
        AnalyzeError::ServiceUnavailable(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedding_failures_map_to_service_unavailable() {
        let err: AnalyzeError = EmbeddingError::Unavailable("model offline".into()).into();
        assert!(matches!(err, AnalyzeError::ServiceUnavailable(_)));
        assert!(err.to_string().contains("model offline"));
    }
}
