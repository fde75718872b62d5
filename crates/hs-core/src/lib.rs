//! Resume / job-description matching and skill-gap analysis engine.
//!
//! `MatchAnalyzer` is the caller-facing entry point: it combines a
//! semantic-similarity percentage (via an injected [`embedding::TextEmbedder`])
//! with explicit skill-set differencing against a [`vocabulary::SkillVocabulary`]
//! into one immutable [`matching::MatchResult`]. Everything else in the
//! crate is a pure computation or an adapter.

pub mod embedding;
pub mod error;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod vocabulary;

pub use error::AnalyzeError;
pub use matching::{AnalyzerConfig, MatchAnalyzer, MatchResult, SimilarityScorer, SkillExtractor};
pub use vocabulary::SkillVocabulary;
