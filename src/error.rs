use thiserror::Error;

/// Top-level error type for symbol geometry synthesis.
#[derive(Debug, Error)]
pub enum TacgeoError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Toolkit(#[from] ToolkitError),
}

/// A generator received anchor points it cannot draw a symbol from.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("symbol {code} requires {required} anchor points, got {actual}")]
    TooFewPoints {
        code: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("symbol {code}: anchor points {first} and {second} coincide")]
    CoincidentPoints {
        code: &'static str,
        first: usize,
        second: usize,
    },

    #[error("symbol {code}: {reason}")]
    InvalidGeometry { code: &'static str, reason: String },
}

/// A construction step received a value it cannot build from.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} lies outside [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("cannot build shape: {0}")]
    Degenerate(String),

    #[error("direction of a zero-length segment is undefined")]
    ZeroVector,
}

/// Errors raised by boolean composition of geometries.
#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("degenerate boolean operand: {0}")]
    Degenerate(String),

    #[error("boolean operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`TacgeoError`].
pub type Result<T> = std::result::Result<T, TacgeoError>;
