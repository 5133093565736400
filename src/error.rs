//! Error types for SOM configuration and map construction.

use thiserror::Error;

/// A rejected map or training configuration.
///
/// There is one variant per validation rule. Each variant carries the
/// offending value or name. Validators stop at the first violated rule, so a
/// record with several bad fields reports only the earliest one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Map dimensions must have exactly two elements.
    #[error("Incorrect number of dimensions supplied: {0}")]
    InvalidDimensionCount(usize),

    /// A map dimension is negative.
    #[error("Incorrect SOM dimensions supplied: {0:?}")]
    InvalidDimensions(Vec<i64>),

    /// Grid type is not in the coordinate generator registry.
    #[error("Unsupported SOM grid type: {0}")]
    UnsupportedGrid(String),

    /// No codebook initializer was attached to the map config.
    #[error("Missing codebook InitFunc")]
    MissingInitFunc,

    /// Unit shape is not in the unit shape registry.
    #[error("Unsupported SOM unit shape: {0}")]
    UnsupportedShape(String),

    /// Training method is not in the training method registry.
    #[error("Invalid SOM training method: {0}")]
    UnsupportedMethod(String),

    /// Initial radius is negative.
    #[error("Invalid SOM unit radius: {0}")]
    InvalidRadius(f64),

    /// Radius decay strategy is not in the decay registry.
    #[error("Unsupported radius decay strategy: {0}")]
    UnsupportedRadiusDecay(String),

    /// Neighborhood function is not in the neighborhood registry.
    #[error("Unsupported neighbourhood function: {0}")]
    UnsupportedNeighbFn(String),

    /// Initial learning rate is negative.
    #[error("Invalid SOM learning rate: {0}")]
    InvalidLearningRate(f64),

    /// Learning rate decay strategy is not in the decay registry.
    #[error("Unsupported learning rate decay strategy: {0}")]
    UnsupportedLearningRateDecay(String),
}

/// Payload-free tag for a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ErrorKind {
    InvalidDimensionCount,
    InvalidDimensions,
    UnsupportedGrid,
    MissingInitFunc,
    UnsupportedShape,
    UnsupportedMethod,
    InvalidRadius,
    UnsupportedRadiusDecay,
    UnsupportedNeighbFn,
    InvalidLearningRate,
    UnsupportedLearningRateDecay,
}

impl ValidationError {
    /// Returns the kind of this error without its detail.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensionCount(_) => ErrorKind::InvalidDimensionCount,
            Self::InvalidDimensions(_) => ErrorKind::InvalidDimensions,
            Self::UnsupportedGrid(_) => ErrorKind::UnsupportedGrid,
            Self::MissingInitFunc => ErrorKind::MissingInitFunc,
            Self::UnsupportedShape(_) => ErrorKind::UnsupportedShape,
            Self::UnsupportedMethod(_) => ErrorKind::UnsupportedMethod,
            Self::InvalidRadius(_) => ErrorKind::InvalidRadius,
            Self::UnsupportedRadiusDecay(_) => ErrorKind::UnsupportedRadiusDecay,
            Self::UnsupportedNeighbFn(_) => ErrorKind::UnsupportedNeighbFn,
            Self::InvalidLearningRate(_) => ErrorKind::InvalidLearningRate,
            Self::UnsupportedLearningRateDecay(_) => ErrorKind::UnsupportedLearningRateDecay,
        }
    }
}

/// The main error type for SOM operations.
#[derive(Error, Debug)]
pub enum SomError {
    /// Configuration rejected by a validator.
    #[error("Configuration error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error during grid coordinate generation.
    #[error("Grid error: {0}")]
    Grid(String),

    /// Error during codebook initialization.
    #[error("Codebook error: {0}")]
    Codebook(String),

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Vector length does not match the codebook dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected vector length.
        expected: usize,
        /// Actual vector length.
        actual: usize,
    },
}

/// Result type alias for SOM operations.
pub type Result<T> = std::result::Result<T, SomError>;

impl From<serde_json::Error> for SomError {
    fn from(err: serde_json::Error) -> Self {
        SomError::Serialization(err.to_string())
    }
}
