/// Convenience result type used across the timeline crate.
pub type WavyteResult<T> = Result<T, WavyteError>;

/// Top-level error taxonomy used by frame operations.
#[derive(thiserror::Error, Debug)]
pub enum WavyteError {
    /// Invalid frame configuration supplied by the caller.
    #[error("validation error: {0}")]
    Validation(String),

    /// A segment could not be entered, e.g. the next frame is of another kind.
    #[error("animation error: {0}")]
    Animation(String),

    /// A node-mutating frame ran without a live node attached.
    #[error("detached frame: {0}")]
    Detached(String),

    /// Errors while writing evaluated values to a node.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WavyteError {
    /// Build a [`WavyteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WavyteError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`WavyteError::Detached`] value.
    pub fn detached(msg: impl Into<String>) -> Self {
        Self::Detached(msg.into())
    }

    /// Build a [`WavyteError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
