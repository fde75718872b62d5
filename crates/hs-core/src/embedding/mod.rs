pub mod hash;
pub mod similarity;

pub use hash::HashEmbedder;
pub use similarity::cosine_similarity;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding backend unavailable: {0}")]
    Unavailable(String),
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// Embedding collaborator seam.
///
/// The analyzer depends only on this two-function contract (`embed` plus
/// the paired `cosine_similarity`), not on any particular model. Tests
/// inject deterministic stubs; `HashEmbedder` is the model-free default.
pub trait TextEmbedder: Send + Sync {
    /// Implementation name ("hash", ...).
    fn name(&self) -> &'static str;

    /// Version tag; bump whenever the produced vectors change.
    fn version(&self) -> &str;

    /// Output dimensionality, fixed per instance.
    fn dimension(&self) -> usize;

    /// Embed one text into a vector of `dimension()` components.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Default output dimensionality for embedders driven by `EmbedderConfig`.
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 256;

#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    pub dimension: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_EMBEDDING_DIMENSION,
        }
    }
}

impl EmbedderConfig {
    /// Reads `HS_EMBEDDER_DIMENSION`; unset or unparseable values fall
    /// back to the default.
    pub fn from_env() -> Self {
        Self {
            dimension: std::env::var("HS_EMBEDDER_DIMENSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EMBEDDING_DIMENSION),
        }
    }
}

/// Embedder factory. Unknown names fall back to the hash embedder.
pub fn create_embedder(name: &str, config: EmbedderConfig) -> Box<dyn TextEmbedder> {
    match name {
        "hash" => Box::new(HashEmbedder::new(config)),
        other => {
            tracing::warn!(embedder = other, "unknown embedder name; falling back to hash");
            Box::new(HashEmbedder::new(config))
        }
    }
}
