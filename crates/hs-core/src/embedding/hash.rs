use std::hash::{Hash, Hasher};

use siphasher::sip::SipHasher13;

use super::{EmbedderConfig, EmbeddingError, TextEmbedder};
use crate::normalize::normalize_for_matching;

/// Fixed seeds for deterministic hashing. Changing either value changes
/// every produced vector; bump `version()` when touching them.
const HASH_SEED_K0: u64 = 0x6869_7265_7369_6768;
const HASH_SEED_K1: u64 = 0x7632_0d5f_a11c_e5e1;

/// Feature-hashing text embedder.
///
/// Tokenizes normalized text on spaces and folds each token into a fixed
/// dimension via SipHash13 with sign hashing, then L2-normalizes. Needs no
/// model artifacts, which makes it the default backend for tests and the
/// CLI; a real inference service plugs in behind the same trait.
pub struct HashEmbedder {
    config: EmbedderConfig,
}

impl HashEmbedder {
    pub fn new(config: EmbedderConfig) -> Self {
        let mut cfg = config;
        cfg.dimension = cfg.dimension.max(1);
        Self { config: cfg }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.config.dimension
    }

    /// Sign hashing: even hash of the salted token adds, odd subtracts.
    fn sign(&self, token: &str) -> f32 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        format!("{token}_sign").hash(&mut hasher);
        if hasher.finish() % 2 == 0 { 1.0 } else { -1.0 }
    }
}

impl TextEmbedder for HashEmbedder {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.config.dimension
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let normalized = normalize_for_matching(text);
        let mut vector = vec![0.0f32; self.config.dimension];

        for token in normalized.split(' ').filter(|t| !t.is_empty()) {
            let idx = self.hash_token(token);
            vector[idx] += self.sign(token);
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Ok(vector)
    }
}
