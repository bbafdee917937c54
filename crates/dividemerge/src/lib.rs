//! Divide-and-conquer proximity subdivision of small planar point sets.
//!
//! Pipeline
//! - `hull::base`: convex hull of each leaf (2–3 points) with edge bisectors
//!   trimmed at the leaf's pivot.
//! - `hull::merge`: side-test merge of the two leaf hulls.
//! - `chain`: bottom-to-top hyperplane chain separating the two halves,
//!   retiring bisectors as it crosses them.
//! - `subdivision`: input validation, split, assembly, step snapshots.
//!
//! All coordinates live in a bounded square working region (`RegionCfg`,
//! default `[0, 600]²`); unbounded bisectors are clipped to it.

pub mod api;
pub mod chain;
pub mod error;
pub mod geom2;
pub mod hull;
pub mod steps;
pub mod subdivision;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ChainError, SubdivisionError};
pub use geom2::{Point, RegionCfg};
pub use subdivision::{build_subdivision, build_subdivision_observed, sort_points, Subdivision};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chain::{build_chain, ChainOutcome, HyperplaneChain};
    pub use crate::error::{ChainError, SubdivisionError};
    pub use crate::geom2::rand::{draw_point_set, PointCount, PointSetCfg, ReplayToken};
    pub use crate::geom2::{
        intersect, orientation, perpendicular_bisector, Bisector, Half, HullEdge, IntersectMode,
        Point, RegionCfg, Segment, Side, Tip,
    };
    pub use crate::steps::{Primitive, StepLog, StepObserver};
    pub use crate::subdivision::{
        build_subdivision, build_subdivision_observed, sort_points, Subdivision, MAX_POINTS,
    };
}
