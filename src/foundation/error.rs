/// Convenience result type used across Glissade.
pub type GlissadeResult<T> = Result<T, GlissadeError>;

/// Top-level error taxonomy used by the transition APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlissadeError {
    /// Invalid caller-provided data: mismatched frame dimensions, progress
    /// outside [0, 1], malformed pixel buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal contract breaches in the compositing path.
    #[error("render error: {0}")]
    Render(String),

    /// Resource exhaustion while allocating renderer scratch state.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlissadeError {
    /// Build a [`GlissadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlissadeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlissadeError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }
}
