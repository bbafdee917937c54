//! 2D primitives for the proximity subdivision.
//!
//! Purpose
//! - Points, directed segments, clipped bisectors with explicit open/pinned tips.
//! - Exact predicates (orientation, two-mode intersection) and the bisector
//!   constructor shared by the hull builders and the chain walk.
//!
//! Conventions
//! - No epsilon in predicates; the only tolerance is `RegionCfg::snap_eps`,
//!   applied when trimming base-case bisectors.
//! - Every trim returns a new value; nothing here mutates a shared bisector.

pub mod bisector;
pub mod predicates;
pub mod rand;
mod types;

pub use bisector::{is_equidistant, perpendicular_bisector};
pub use predicates::{cross, intersect, orientation, IntersectMode};
pub use types::{
    hull_points, Bisector, Half, HullEdge, Point, RegionCfg, Segment, Side, Tip, DEFAULT_BOUND,
    DEFAULT_OPEN_EXTENT,
};
