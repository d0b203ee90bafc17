/// Convenience result type used across Seamweld.
pub type SeamweldResult<T> = Result<T, SeamweldError>;

/// Top-level error taxonomy used by the compositing APIs.
#[derive(thiserror::Error, Debug)]
pub enum SeamweldError {
    /// Malformed or mutually inconsistent input buffers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Inputs that violate the square tile-grid geometry formula.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The seam solver found no overlap to cut. Non-fatal: the pipeline
    /// logs it and blends with the masks unchanged.
    #[error("degenerate seam graph: {0}")]
    DegenerateGraph(String),

    /// The configured seam-cut or blend capability cannot be constructed
    /// in this runtime. Fatal; retrying inside the same process cannot
    /// succeed because capability availability does not change.
    #[error("blend backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SeamweldError {
    /// Build a [`SeamweldError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`SeamweldError::InvalidGeometry`] value.
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    /// Build a [`SeamweldError::DegenerateGraph`] value.
    pub fn degenerate_graph(msg: impl Into<String>) -> Self {
        Self::DegenerateGraph(msg.into())
    }

    /// Build a [`SeamweldError::BackendUnavailable`] value.
    pub fn backend_unavailable(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
