use thiserror::Error;

/// Error produced when a search fails or is misconfigured.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("No search result found")]
    NoResultFound,

    #[error("Problem does not provide an initial state")]
    NoInitialState,

    #[error("Depth limit must be positive, got {0}")]
    InvalidDepthLimit(usize),

    #[error("Maximum depth must be greater than one, got {0}")]
    InvalidMaximumDepth(usize),

    #[error("Temperature must be positive, got {0}")]
    InvalidTemperature(f64),

    #[error("Cooling factor must lie strictly between 0 and 1, got {0}")]
    InvalidCoolingFactor(f64),

    #[error("Patience must be positive, got {0}")]
    InvalidPatience(usize),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
