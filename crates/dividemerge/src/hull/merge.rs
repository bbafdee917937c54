//! Merge of two x-separated leaf hulls.
//!
//! This is a side-test heuristic rather than an exact upper/lower tangent
//! search: an edge that sees an opposite point on its right is either swung
//! onto that point (when it starts at the side's anchor height) or discarded.
//! It is only exercised on pairs of leaf hulls (at most 3 points each).

use serde::Serialize;

use crate::geom2::{hull_points, orientation, Bisector, HullEdge, Point, Segment, Side};

/// What one half hands to the chain builder.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HalfSet {
    /// Edges not absorbed into the merged outline, with their bisectors.
    pub inner: Vec<HullEdge>,
    /// Every bisector of the half's leaf hull.
    pub bisectors: Vec<Bisector>,
}

/// Merged outline plus the per-half leftovers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedHull {
    pub outline: Vec<Segment>,
    pub left: HalfSet,
    pub right: HalfSet,
}

/// Merge `left` and `right`, where every left point lies left of every right point.
///
/// Anchors: the left hull extends edges starting at its highest y, the right
/// hull edges starting at its lowest y.
pub fn merge_hulls(left: &[HullEdge], right: &[HullEdge]) -> MergedHull {
    let left_edges: Vec<Segment> = left.iter().map(|he| he.edge).collect();
    let right_edges: Vec<Segment> = right.iter().map(|he| he.edge).collect();
    let left_pts = hull_points(left_edges.iter());
    let right_pts = hull_points(right_edges.iter());

    let left_anchor = left_pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let right_anchor = right_pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);

    let left_kept = extend_toward(&left_edges, &right_pts, left_anchor);
    let right_kept = extend_toward(&right_edges, &left_pts, right_anchor);

    let mut outline: Vec<Segment> = Vec::with_capacity(left_kept.len() + right_kept.len());
    for e in left_kept.iter().chain(right_kept.iter()) {
        if !outline.iter().any(|o| o.same_as(e)) {
            outline.push(*e);
        }
    }
    tracing::debug!(
        outline = outline.len(),
        left_kept = left_kept.len(),
        right_kept = right_kept.len(),
        "merged hulls"
    );

    MergedHull {
        outline,
        left: half_set(left, &left_kept),
        right: half_set(right, &right_kept),
    }
}

/// Swing or drop edges that see an opposite point on their right.
///
/// A single edge is tested in both directions. Edges are revisited for every
/// opposite point, so an already swung edge may swing again.
fn extend_toward(edges: &[Segment], opposite: &[Point], anchor_y: f64) -> Vec<Segment> {
    let mut work: Vec<Option<Segment>> = edges.iter().copied().map(Some).collect();
    if let [only] = edges {
        work.push(Some(only.reversed()));
    }
    for &q in opposite {
        for slot in work.iter_mut() {
            let Some(e) = *slot else { continue };
            if orientation(&e, q) == Side::Right {
                *slot = (e.a.y == anchor_y).then(|| Segment::new(e.a, q));
            }
        }
    }
    work.into_iter().flatten().collect()
}

fn half_set(hull: &[HullEdge], kept: &[Segment]) -> HalfSet {
    let inner = if hull.len() > 2 {
        hull.iter()
            .filter(|he| !kept.iter().any(|k| k.same_as(&he.edge)))
            .copied()
            .collect()
    } else {
        hull.to_vec()
    };
    HalfSet {
        inner,
        bisectors: hull.iter().map(|he| he.bisector).collect(),
    }
}
