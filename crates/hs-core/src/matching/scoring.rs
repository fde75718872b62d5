use tracing::debug;

use crate::embedding::{cosine_similarity, TextEmbedder};
use crate::error::AnalyzeError;

/// Thin adapter turning two raw texts into a single similarity percentage
/// through the embedding collaborator.
pub struct SimilarityScorer {
    embedder: Box<dyn TextEmbedder>,
}

impl SimilarityScorer {
    pub fn new(embedder: Box<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    /// Cosine similarity of the two embeddings rescaled to a percentage,
    /// rounded to two decimals. Cosine is bounded by [-1, 1], so the
    /// result lies in [-100, 100]; a negative percentage is an accepted
    /// edge case, not special-cased. Callers must pass non-empty texts.
    ///
    /// Any collaborator failure surfaces as `ServiceUnavailable`; this
    /// adapter never substitutes a default score.
    pub fn score(&self, resume_text: &str, jd_text: &str) -> Result<f64, AnalyzeError> {
        let resume_vec = self.embedder.embed(resume_text)?;
        let jd_vec = self.embedder.embed(jd_text)?;
        let similarity = cosine_similarity(&resume_vec, &jd_vec)?;
        let score = (f64::from(similarity) * 10_000.0).round() / 100.0;

        debug!(
            embedder = self.embedder.name(),
            version = self.embedder.version(),
            score,
            "similarity scored"
        );
        Ok(score)
    }
}
