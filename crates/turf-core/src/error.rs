//! Error types for Turf

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurfError {
    // Unit errors
    #[error("Invalid unit. '{unit}' is not a supported unit")]
    InvalidUnit { unit: String },

    #[error("Distance must be a non-negative number, given {distance}")]
    NegativeDistance { distance: f64 },

    // Assertion errors
    #[error("Type and name required")]
    TypeAndNameRequired,

    #[error("{function}() requires a name")]
    NameRequired { function: &'static str },

    #[error("Invalid input to {name}, Feature with geometry required")]
    FeatureRequired { name: String },

    #[error("Invalid input to {name}, FeatureCollection required")]
    FeatureCollectionRequired { name: String },

    #[error("Invalid input to {name}: must be a {expected}, given {given}")]
    InvalidInput {
        name: String,
        expected: String,
        given: String,
    },

    #[error("A feature with a Point geometry is required.")]
    PointRequired,

    // Line processing errors
    #[error("{operation} requires at least {required} coordinates, found {found}")]
    TooFewCoordinates {
        operation: &'static str,
        required: usize,
        found: usize,
    },

    #[error("Start and stop points in lineSlice cannot equal each other.")]
    SliceEndpointsEqual,

    #[error("Start and stop distance in lineSliceAlong cannot equal each other.")]
    SliceDistancesEqual,

    #[error("Stop distance {stop} in lineSliceAlong is before start distance {start}")]
    SliceDistancesReversed { start: f64, stop: f64 },

    #[error("Start position is beyond line: start {start}, line length {length}")]
    StartBeyondLine { start: f64, length: f64 },

    #[error("Expected {expected} segment distances, found {found}")]
    DistanceCountMismatch { expected: usize, found: usize },

    #[error("Circle requires at least one step, given {steps}")]
    InvalidSteps { steps: usize },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Interop errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, TurfError>;
