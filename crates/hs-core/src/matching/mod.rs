pub mod analyzer;
pub mod extraction;
pub mod scoring;

pub use analyzer::{AnalyzerConfig, MatchAnalyzer, MatchResult, DEFAULT_SUITABILITY_THRESHOLD};
pub use extraction::SkillExtractor;
pub use scoring::SimilarityScorer;
