//! Convex hulls: leaf construction and pairwise merge.
//!
//! - `base`: hull edge lists for 2–3 points, each edge carrying its bisector,
//!   trimmed against the leaf's own pivot.
//! - `merge`: side-test merge of two x-separated leaf hulls into an outline,
//!   plus the inner edges and bisector sets the chain builder consumes.

pub mod base;
pub mod merge;

pub use base::{build_base_hull, hull_edges, BASE_CASE_MAX};
pub use merge::{merge_hulls, HalfSet, MergedHull};

#[cfg(test)]
mod tests;
