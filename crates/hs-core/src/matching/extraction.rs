use tracing::debug;

use crate::normalize::normalize_for_matching;
use crate::vocabulary::SkillVocabulary;

/// Scans text for vocabulary skills using whole-token matching.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
}

impl SkillExtractor {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extract every vocabulary skill present in `text` at least once.
    ///
    /// The text is normalized once, then each entry is tested as a whole
    /// token (`java` never matches inside `javascript`; multi-word entries
    /// match as exact single-space phrases). Returns canonical forms in
    /// vocabulary order, deduplicated by construction. Total: empty input
    /// or no matches yields an empty vec, never an error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = normalize_for_matching(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let found: Vec<String> = self
            .vocabulary
            .entries()
            .iter()
            .filter(|entry| entry.matches(&normalized))
            .map(|entry| entry.canonical().to_string())
            .collect();

        debug!(found = found.len(), vocabulary = self.vocabulary.len(), "skills extracted");
        found
    }
}
