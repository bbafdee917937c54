//! Leaf hulls for 2 or 3 points and their trimmed bisectors.

use crate::geom2::{
    intersect, orientation, perpendicular_bisector, Bisector, HullEdge, IntersectMode, Point,
    RegionCfg, Segment, Side, Tip,
};

/// Largest subset the leaf builder accepts.
pub const BASE_CASE_MAX: usize = 3;

/// Hull edges of 2 or 3 points, before bisectors are attached.
///
/// Winding follows the sign of `(p1 − p0) × (p2 − p0)`:
/// - negative: `p0→p1, p1→p2, p2→p0`
/// - positive: `p0→p2, p2→p1, p1→p0`
/// - zero: `p0→p1, p1→p2` only; the collinear triple keeps two edges and the
///   middle point is not validated.
///
/// Any other length yields no edges.
pub fn hull_edges(points: &[Point]) -> Vec<Segment> {
    match *points {
        [p0, p1] => vec![Segment::new(p0, p1)],
        [p0, p1, p2] => {
            let d1 = p1 - p0;
            let d2 = p2 - p0;
            let order = d1.x * d2.y - d1.y * d2.x;
            if order < 0.0 {
                vec![
                    Segment::new(p0, p1),
                    Segment::new(p1, p2),
                    Segment::new(p2, p0),
                ]
            } else if order > 0.0 {
                vec![
                    Segment::new(p0, p2),
                    Segment::new(p2, p1),
                    Segment::new(p1, p0),
                ]
            } else {
                vec![Segment::new(p0, p1), Segment::new(p1, p2)]
            }
        }
        _ => Vec::new(),
    }
}

/// Hull of a leaf subset with one bisector per edge.
///
/// When the first two bisectors meet (the pivot, i.e. the circumcenter of a
/// proper triangle), every bisector is cut at the pivot on the side that would
/// cross into a sibling edge's territory.
pub fn build_base_hull(points: &[Point], cfg: &RegionCfg) -> Vec<HullEdge> {
    let edges: Vec<HullEdge> = hull_edges(points)
        .into_iter()
        .filter_map(|edge| {
            perpendicular_bisector(&edge, cfg).map(|bisector| HullEdge { edge, bisector })
        })
        .collect();
    if edges.len() < 2 {
        return edges;
    }
    let pivot = intersect(
        &edges[0].bisector.segment(),
        &edges[1].bisector.segment(),
        IntersectMode::Line,
    );
    let Some(pivot) = pivot else {
        tracing::trace!("leaf bisectors are parallel; no trim");
        return edges;
    };
    edges
        .into_iter()
        .map(|he| {
            let side = orientation(&he.edge, pivot);
            HullEdge {
                edge: he.edge,
                bisector: trim_past_pivot(&he.edge, &he.bisector, side, pivot, cfg),
            }
        })
        .collect()
}

/// Cut `bis` at `pivot`, dropping the part that points toward the region
/// boundary in the direction given by `side`.
///
/// The target point on the boundary is reached by walking from the edge
/// midpoint through the pivot (`Left`) or from the pivot through the midpoint
/// (`Right`). The bisector tip closer to that target becomes `Pinned(pivot)`.
/// Undefined slopes leave `bis` unchanged.
fn trim_past_pivot(
    edge: &Segment,
    bis: &Bisector,
    side: Side,
    pivot: Point,
    cfg: &RegionCfg,
) -> Bisector {
    let mut mid = edge.midpoint();
    if (mid.x - pivot.x).abs() < cfg.snap_eps {
        mid.x = pivot.x;
    }
    if (mid.y - pivot.y).abs() < cfg.snap_eps {
        mid.y = pivot.y;
    }
    let v = match side {
        Side::Left => pivot - mid,
        Side::Right => mid - pivot,
        Side::Collinear => Point::zeros(),
    };
    let e = edge.a - edge.b;

    // Line through pivot and midpoint as y = m x + c.
    let line = if pivot.x != mid.x {
        let m = (pivot.y - mid.y) / (pivot.x - mid.x);
        Some((m, pivot.y - m * pivot.x))
    } else if pivot.y == mid.y && e.y != 0.0 {
        // Pivot sits on the midpoint: fall back to the bisector's own slope.
        let m = -e.x / e.y;
        Some((m, pivot.y - m * pivot.x))
    } else {
        None
    };
    let on_line = |x: f64| line.map(|(m, c)| m * x + c);

    let target = if v.x != 0.0 {
        let x = if v.x > 0.0 { cfg.bound } else { 0.0 };
        let y = if v.y != 0.0 { on_line(x) } else { Some(pivot.y) };
        y.map(|y| Point::new(x, y))
    } else if v.y > 0.0 {
        Some(Point::new(pivot.x, cfg.bound))
    } else if v.y < 0.0 {
        Some(Point::new(pivot.x, 0.0))
    } else {
        let x = match (e.x > 0.0, e.x < 0.0, e.y > 0.0, e.y < 0.0) {
            (true, _, true, _) | (_, true, true, _) => 0.0,
            (true, _, _, true) | (_, true, _, true) => cfg.bound,
            _ => pivot.x,
        };
        on_line(x).map(|y| Point::new(x, y))
    };

    match target {
        Some(t) if t != pivot => {
            let d_start = (bis.start.point() - t).norm();
            let d_end = (bis.end.point() - t).norm();
            if d_start < d_end {
                bis.with_start(Tip::Pinned(pivot))
            } else {
                bis.with_end(Tip::Pinned(pivot))
            }
        }
        Some(_) => *bis,
        None => {
            tracing::trace!(?edge, "trim target undefined; bisector kept whole");
            *bis
        }
    }
}
