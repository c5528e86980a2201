//! Configuration errors raised while building a scorer.

use thiserror::Error;

/// Errors raised when configuring a [`PreferenceScorer`](crate::PreferenceScorer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScorerConfigError {
    /// Like/dislike weights were unusable.
    #[error("score weights must be finite and non-negative with a positive liked weight")]
    InvalidWeights,
    /// Feature block weights were unusable.
    #[error("feature weights must be finite, non-negative and not all zero")]
    InvalidFeatureWeights,
}
