//! Divide-and-conquer driver.
//!
//! Scope
//! - Leaves hold at most `BASE_CASE_MAX` points and only one merge level is
//!   performed, so inputs are capped at `MAX_POINTS = 2 * BASE_CASE_MAX`.
//!   Larger inputs are rejected instead of being truncated silently.
//!
//! Snapshots
//! - Every stage reports what it produced to a `StepObserver`: the sorted
//!   input, each leaf hull and its bisectors, the merged outline, each chain
//!   step, and the final picture. Observers never influence the result.

use serde::Serialize;

use crate::chain::{build_chain_observed, HyperplaneChain};
use crate::error::SubdivisionError;
use crate::geom2::{Bisector, HullEdge, Point, RegionCfg, Segment};
use crate::hull::{build_base_hull, merge_hulls, BASE_CASE_MAX};
use crate::steps::{self, Primitive, StepObserver};

/// Largest input a single merge level handles.
pub const MAX_POINTS: usize = 2 * BASE_CASE_MAX;

/// Hull, chain and bisectors of one point set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Subdivision {
    /// Leaf hull edges, or the merged outline when a merge happened.
    pub hull: Vec<Segment>,
    /// Empty when the input was a single leaf.
    pub chain: HyperplaneChain,
    pub bisectors: Vec<Bisector>,
}

impl Subdivision {
    /// Hull edges as integer-rounded `[x1, y1, x2, y2]`, sorted lexicographically.
    pub fn canonical_hull(&self) -> Vec<[i64; 4]> {
        let mut out: Vec<[i64; 4]> = self
            .hull
            .iter()
            .map(|e| {
                [
                    e.a.x.round() as i64,
                    e.a.y.round() as i64,
                    e.b.x.round() as i64,
                    e.b.y.round() as i64,
                ]
            })
            .collect();
        out.sort_unstable();
        out
    }
}

/// Sort by (x, y) ascending.
pub fn sort_points(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    out
}

/// Build hull, chain and bisectors for `points` (sorted, distinct, inside the region).
pub fn build_subdivision(
    points: &[Point],
    cfg: &RegionCfg,
) -> Result<Subdivision, SubdivisionError> {
    build_subdivision_observed(points, cfg, &mut ())
}

/// As `build_subdivision`, reporting stage snapshots to `obs`.
pub fn build_subdivision_observed(
    points: &[Point],
    cfg: &RegionCfg,
    obs: &mut dyn StepObserver,
) -> Result<Subdivision, SubdivisionError> {
    validate(points, cfg)?;
    obs.clear();
    obs.record(steps::points(points).collect());

    if points.len() <= BASE_CASE_MAX {
        let leaf = build_leaf(points, cfg, obs);
        return Ok(Subdivision {
            hull: leaf.iter().map(|he| he.edge).collect(),
            chain: HyperplaneChain::default(),
            bisectors: leaf.iter().map(|he| he.bisector).collect(),
        });
    }

    let (lo, hi) = points.split_at(points.len().div_ceil(2));
    let left = build_leaf(lo, cfg, obs);
    let right = build_leaf(hi, cfg, obs);
    let merged = merge_hulls(&left, &right);

    obs.clear();
    obs.record(merged.outline.iter().map(|e| Primitive::Point(e.a)).collect());
    obs.record(
        steps::segments(merged.outline.iter().copied())
            .chain(steps::segments(merged.left.bisectors.iter().map(Bisector::segment)))
            .chain(steps::segments(merged.right.bisectors.iter().map(Bisector::segment)))
            .collect(),
    );

    let outcome = build_chain_observed(&merged.left, &merged.right, cfg, obs)?;
    tracing::debug!(
        points = points.len(),
        links = outcome.chain.len(),
        bisectors = outcome.bisectors.len(),
        "subdivision merged"
    );

    obs.clear();
    obs.record(
        steps::points(points)
            .chain(steps::segments(outcome.chain.segments()))
            .chain(steps::segments(outcome.bisectors.iter().map(Bisector::segment)))
            .collect(),
    );

    Ok(Subdivision {
        hull: merged.outline,
        chain: outcome.chain,
        bisectors: outcome.bisectors,
    })
}

fn build_leaf(points: &[Point], cfg: &RegionCfg, obs: &mut dyn StepObserver) -> Vec<HullEdge> {
    obs.record(steps::points(points).collect());
    let hull = build_base_hull(points, cfg);
    obs.record(steps::segments(hull.iter().map(|he| he.edge)).collect());
    obs.record(
        steps::points(points)
            .chain(steps::segments(hull.iter().map(|he| he.bisector.segment())))
            .collect(),
    );
    hull
}

fn validate(points: &[Point], cfg: &RegionCfg) -> Result<(), SubdivisionError> {
    if !cfg.is_valid() {
        return Err(SubdivisionError::InvalidRegion {
            bound: cfg.bound,
            open_extent: cfg.open_extent,
        });
    }
    if points.len() < 2 {
        return Err(SubdivisionError::InsufficientData(points.len()));
    }
    if points.len() > MAX_POINTS {
        return Err(SubdivisionError::TooManyPoints {
            got: points.len(),
            max: MAX_POINTS,
        });
    }
    for (index, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(SubdivisionError::NonFinite(index));
        }
        if !cfg.contains(*p) {
            return Err(SubdivisionError::OutOfRegion {
                index,
                x: p.x,
                y: p.y,
                bound: cfg.bound,
            });
        }
    }
    for (i, w) in points.windows(2).enumerate() {
        if w[0] == w[1] {
            return Err(SubdivisionError::DuplicatePoint(i + 1));
        }
        if (w[0].x, w[0].y) > (w[1].x, w[1].y) {
            return Err(SubdivisionError::Unsorted(i + 1));
        }
    }
    Ok(())
}
