/// Result alias used throughout the crate.
pub type SvdVizResult<T> = Result<T, SvdVizError>;

/// Error type shared by the library and the command-line tools.
#[derive(thiserror::Error, Debug)]
pub enum SvdVizError {
    /// Input or configuration rejected before any work started.
    #[error("validation error: {0}")]
    Validation(String),

    /// An external executable or backend is not available.
    #[error("missing dependency: {0}")]
    MissingDependency(String),

    /// A required input file does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Encoded data could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Frames or assets could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// Anything else, usually IO with attached context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SvdVizError {
    /// Build a [`SvdVizError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SvdVizError::MissingDependency`].
    pub fn missing_dependency(msg: impl Into<String>) -> Self {
        Self::MissingDependency(msg.into())
    }

    /// Build a [`SvdVizError::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`SvdVizError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SvdVizError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SvdVizError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
