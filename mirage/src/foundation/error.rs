/// Result alias used across the crate.
pub type MirageResult<T> = Result<T, MirageError>;

/// Errors produced by the dual-appearance pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MirageError {
    /// A source could not be read or decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Zero-area images, mismatched buffers or rejected options.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The composite could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MirageError {
    /// Build a [`MirageError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MirageError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`MirageError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
