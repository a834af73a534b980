#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a center count of zero is requested.
    #[error("invalid center count: k must be positive, got {k}")]
    InvalidCenterCount {
        /// The requested number of centers.
        k: usize,
    },

    /// Returned when edge preservation is requested with fewer than two centers.
    #[error("invalid center count: keep_edges reserves 2 centers but k is {k}")]
    EdgeBudget {
        /// The requested number of centers.
        k: usize,
    },

    /// Returned when a strategy name does not match any known strategy.
    #[error("unknown center sampling strategy '{0}'")]
    UnknownStrategy(String),

    /// Returned when a strategy needs more values than the input provides.
    #[error("cannot select {requested} centers from {available} values")]
    NotEnoughValues {
        /// The number of centers (or values) requested.
        requested: usize,
        /// The number of values available.
        available: usize,
    },

    /// Returned when 2-D input rows do not all have the same length.
    #[error("ragged input: row {row} has {got} values, expected {expected}")]
    Shape {
        /// The index of the offending row.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length of the offending row.
        got: usize,
    },

    /// Returned when a vector length does not match the mixture layout.
    #[error("dimension mismatch: expected {expected} values but got {got}")]
    DimensionMismatch {
        /// The expected length.
        expected: usize,
        /// The actual length.
        got: usize,
    },

    /// Returned when a reserved strategy is invoked.
    #[error("center sampling strategy '{0}' is not implemented")]
    NotImplemented(&'static str),

    /// Returned when the target vector is empty.
    #[error("targets cannot be empty")]
    EmptyTargets,

    /// Returned when a target value is NaN or infinite.
    #[error("non-finite target {value} at index {index}")]
    NonFiniteTarget {
        /// The position of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a mixture is built without any centers.
    #[error("kernel centers cannot be empty")]
    EmptyCenters,

    /// Returned when a kernel center is NaN or infinite.
    #[error("invalid center: {0} must be finite")]
    InvalidCenter(f64),

    /// Returned when the target range is not finite or has low above high.
    #[error("invalid target range: low ({low}) must be finite and not above high ({high})")]
    InvalidRange {
        /// The lower end of the range.
        low: f64,
        /// The upper end of the range.
        high: f64,
    },

    /// Returned when no kernel scales are given.
    #[error("kernel scales cannot be empty")]
    EmptyScales,

    /// Returned when a kernel scale is not a positive finite number.
    #[error("invalid scale: {0} must be positive and finite")]
    InvalidScale(f64),

    /// Returned when the number of samples per prediction is zero.
    #[error("invalid sample count: n_samples must be positive")]
    InvalidSampleCount,

    /// Returned when a density grid is requested with fewer than two points.
    #[error("invalid grid resolution: {0} must be at least 2")]
    InvalidResolution(usize),
}

pub type Result<T> = core::result::Result<T, Error>;
