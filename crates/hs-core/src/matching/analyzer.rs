use std::collections::HashSet;

use serde::Serialize;
use tracing::info;

use super::extraction::SkillExtractor;
use super::scoring::SimilarityScorer;
use crate::error::AnalyzeError;

/// Default suitability cut-off, in percent.
pub const DEFAULT_SUITABILITY_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub suitability_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            suitability_threshold: DEFAULT_SUITABILITY_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        Self {
            suitability_threshold: std::env::var("HS_SUITABILITY_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SUITABILITY_THRESHOLD),
        }
    }
}

/// Outcome of one analysis call. Constructed once, immutable.
///
/// `matched_skills` and `missing_skills` always partition `jd_skills`:
/// their union is `jd_skills` and they are disjoint. Resume-only skills
/// appear in `resume_skills` but never in the partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suitable: bool,
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
}

/// Top-level orchestrator and the sole decision point of the engine:
/// similarity scoring, skill extraction on both texts, skill-set
/// differencing, and the suitability verdict.
///
/// Stateless across calls; vocabulary and threshold are injected at
/// construction, never read from hidden globals.
pub struct MatchAnalyzer {
    extractor: SkillExtractor,
    scorer: SimilarityScorer,
    config: AnalyzerConfig,
}

impl MatchAnalyzer {
    pub fn new(extractor: SkillExtractor, scorer: SimilarityScorer, config: AnalyzerConfig) -> Self {
        Self {
            extractor,
            scorer,
            config,
        }
    }

    /// Compare a resume against a job description.
    ///
    /// Fails with `InvalidInput` when either text is empty after trimming
    /// and with `ServiceUnavailable` when the embedding collaborator
    /// errors. The skill-extraction half never fails.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<MatchResult, AnalyzeError> {
        if resume_text.trim().is_empty() {
            return Err(AnalyzeError::InvalidInput("resume text is empty".into()));
        }
        if jd_text.trim().is_empty() {
            return Err(AnalyzeError::InvalidInput(
                "job description text is empty".into(),
            ));
        }

        let score = self.scorer.score(resume_text, jd_text)?;

        let resume_skills = self.extractor.extract(resume_text);
        let jd_skills = self.extractor.extract(jd_text);

        // Partition of the jd skill set, in jd extraction order; resume-only
        // skills never leak into matched/missing.
        let resume_set: HashSet<&str> = resume_skills.iter().map(String::as_str).collect();
        let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = jd_skills
            .iter()
            .cloned()
            .partition(|skill| resume_set.contains(skill.as_str()));

        let suitable = score >= self.config.suitability_threshold;

        info!(
            score,
            suitable,
            matched = matched_skills.len(),
            missing = missing_skills.len(),
            "match analyzed"
        );

        Ok(MatchResult {
            score,
            matched_skills,
            missing_skills,
            suitable,
            resume_skills,
            jd_skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{EmbeddingError, TextEmbedder};
    use crate::vocabulary::SkillVocabulary;

    /// Returns one fixed vector for texts tagged "resume:" and another for
    /// everything else, making the similarity score exact.
    struct PairStub {
        resume_vec: Vec<f32>,
        jd_vec: Vec<f32>,
    }

    impl TextEmbedder for PairStub {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn version(&self) -> &str {
            "test"
        }
        fn dimension(&self) -> usize {
            self.resume_vec.len()
        }
        fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
            if text.starts_with("resume:") {
                Ok(self.resume_vec.clone())
            } else {
                Ok(self.jd_vec.clone())
            }
        }
    }

    fn analyzer_with_similarity(resume_vec: Vec<f32>, jd_vec: Vec<f32>) -> MatchAnalyzer {
        MatchAnalyzer::new(
            SkillExtractor::new(SkillVocabulary::builtin().clone()),
            SimilarityScorer::new(Box::new(PairStub { resume_vec, jd_vec })),
            AnalyzerConfig::default(),
        )
    }

    #[test]
    fn config_from_env_parses_threshold_and_falls_back() {
        std::env::remove_var("HS_SUITABILITY_THRESHOLD");
        assert_eq!(
            AnalyzerConfig::from_env().suitability_threshold,
            DEFAULT_SUITABILITY_THRESHOLD
        );

        std::env::set_var("HS_SUITABILITY_THRESHOLD", "75.5");
        assert_eq!(AnalyzerConfig::from_env().suitability_threshold, 75.5);

        std::env::set_var("HS_SUITABILITY_THRESHOLD", "not-a-number");
        assert_eq!(
            AnalyzerConfig::from_env().suitability_threshold,
            DEFAULT_SUITABILITY_THRESHOLD
        );

        std::env::remove_var("HS_SUITABILITY_THRESHOLD");
    }

    #[test]
    fn rejects_empty_resume() {
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![1.0, 0.0]);
        let err = analyzer.analyze("", "jd: python role").unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidInput(_)));
    }

    #[test]
    fn rejects_whitespace_only_job_description() {
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![1.0, 0.0]);
        let err = analyzer.analyze("resume: python dev", "   \n\t ").unwrap_err();
        assert!(matches!(err, AnalyzeError::InvalidInput(_)));
    }

    #[test]
    fn score_of_exactly_sixty_is_suitable() {
        // cosine([1,0],[0.6,0.8]) == 0.6 -> score 60.0
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![0.6, 0.8]);
        let result = analyzer.analyze("resume: python", "jd: python").unwrap();
        assert_eq!(result.score, 60.0);
        assert!(result.suitable);
    }

    #[test]
    fn score_just_below_sixty_is_not_suitable() {
        // cosine 0.5999 -> score 59.99
        let y = (1.0f32 - 0.5999f32 * 0.5999f32).sqrt();
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![0.5999, y]);
        let result = analyzer.analyze("resume: python", "jd: python").unwrap();
        assert_eq!(result.score, 59.99);
        assert!(!result.suitable);
    }

    #[test]
    fn matched_and_missing_partition_the_jd_skills() {
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![1.0, 0.0]);
        let result = analyzer
            .analyze(
                "resume: Python developer with Docker, AWS and GraphQL",
                "jd: Python engineer familiar with Docker, Kubernetes, and AWS",
            )
            .unwrap();

        let mut rebuilt: Vec<&String> = result
            .matched_skills
            .iter()
            .chain(result.missing_skills.iter())
            .collect();
        rebuilt.sort();
        let mut jd: Vec<&String> = result.jd_skills.iter().collect();
        jd.sort();
        assert_eq!(rebuilt, jd);

        for skill in &result.matched_skills {
            assert!(!result.missing_skills.contains(skill));
        }
        // Resume-only skills stay out of the partition.
        assert!(result.resume_skills.contains(&"graphql".to_string()));
        assert!(!result.matched_skills.contains(&"graphql".to_string()));
        assert!(!result.missing_skills.contains(&"graphql".to_string()));
    }

    #[test]
    fn custom_threshold_is_honored() {
        let analyzer = MatchAnalyzer::new(
            SkillExtractor::new(SkillVocabulary::builtin().clone()),
            SimilarityScorer::new(Box::new(PairStub {
                resume_vec: vec![1.0, 0.0],
                jd_vec: vec![0.6, 0.8],
            })),
            AnalyzerConfig {
                suitability_threshold: 75.0,
            },
        );
        let result = analyzer.analyze("resume: python", "jd: python").unwrap();
        assert_eq!(result.score, 60.0);
        assert!(!result.suitable);
    }

    #[test]
    fn result_serializes_to_json() {
        let analyzer = analyzer_with_similarity(vec![1.0, 0.0], vec![1.0, 0.0]);
        let result = analyzer
            .analyze("resume: rust developer", "jd: rust and docker")
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["score"], 100.0);
        assert_eq!(json["suitable"], true);
        assert!(json["missing_skills"]
            .as_array()
            .unwrap()
            .contains(&serde_json::json!("docker")));
    }
}
