use thiserror::Error;

/// Top-level error type for the Geolabel crate.
#[derive(Debug, Error)]
pub enum GeolabelError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric inputs.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate in {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GeolabelError`].
pub type Result<T> = std::result::Result<T, GeolabelError>;
