//! Curated surface for the CLI and experiments.
//!
//! Important
//! - Internal convenience only; names may move between modules without notice.
//! - Prefer these re-exports over deep paths in downstream crates.

// Driver
pub use crate::subdivision::{
    build_subdivision, build_subdivision_observed, sort_points, Subdivision, MAX_POINTS,
};
// Stages
pub use crate::chain::{build_chain, build_chain_observed, ChainOutcome, HyperplaneChain};
pub use crate::hull::{build_base_hull, merge_hulls, HalfSet, MergedHull, BASE_CASE_MAX};
// Sampling
pub use crate::geom2::rand::{draw_point_set, PointCount, PointSetCfg, ReplayToken};
// Snapshots
pub use crate::steps::{Primitive, StepLog, StepObserver};
