/// Crate-wide result alias.
pub type PromoResult<T> = Result<T, PromoError>;

/// Error taxonomy for the timing model.
///
/// `Configuration` covers malformed inputs (non-increasing breakpoints,
/// mismatched array lengths, invalid durations). `Asset` covers references to
/// resources the composition does not declare. Both are fatal at this layer;
/// there are no retry semantics.
#[derive(thiserror::Error, Debug)]
pub enum PromoError {
    /// Invalid configuration supplied by the caller.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A referenced asset is missing from the composition.
    #[error("missing asset: {0}")]
    Asset(String),

    /// Frame evaluation failed (e.g. frame out of bounds).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Serialization/deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other underlying error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PromoError {
    /// Build a `Configuration` error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an `Asset` error.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an `Evaluation` error.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a `Serde` error.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
