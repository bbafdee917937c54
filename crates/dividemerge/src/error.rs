use thiserror::Error;

/// Failures of the bottom-to-top chain walk.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    #[error("candidate at step {step} is horizontal (auxiliary pair shares x = {x})")]
    LevelCandidate { step: usize, x: f64 },

    #[error("candidate at step {step} has coincident auxiliary points")]
    DegenerateCandidate { step: usize },
}

/// Failures reported by `build_subdivision`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubdivisionError {
    #[error("insufficient data: need at least 2 points, got {0}")]
    InsufficientData(usize),

    #[error("too many points: got {got}, a single merge level supports at most {max}")]
    TooManyPoints { got: usize, max: usize },

    #[error("points are not sorted by (x, y) at index {0}")]
    Unsorted(usize),

    #[error("duplicate point at index {0}")]
    DuplicatePoint(usize),

    #[error("non-finite coordinate at index {0}")]
    NonFinite(usize),

    #[error("point {index} ({x}, {y}) lies outside the working region [0, {bound}]²")]
    OutOfRegion {
        index: usize,
        x: f64,
        y: f64,
        bound: f64,
    },

    #[error("invalid working region (bound {bound}, open extent {open_extent})")]
    InvalidRegion { bound: f64, open_extent: f64 },

    #[error("hyperplane chain failed: {0}")]
    Chain(#[from] ChainError),
}
