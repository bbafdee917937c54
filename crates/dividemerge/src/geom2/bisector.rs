//! Perpendicular bisectors clipped to the working region.

use super::types::{Bisector, Point, RegionCfg, Segment, Tip};

/// Perpendicular bisector of `seg`, clipped to `[0, B]` in x.
///
/// - Sloped or horizontal bisector: tips at `x = 0` and `x = B`.
/// - Vertical bisector (horizontal `seg`): tips at `y = ∓open_extent`.
///
/// Both tips come back `Open`. Returns `None` for a zero-length segment.
pub fn perpendicular_bisector(seg: &Segment, cfg: &RegionCfg) -> Option<Bisector> {
    if seg.is_degenerate() {
        return None;
    }
    let mid = seg.midpoint();
    let d = seg.direction();
    let (p, q) = if d.y != 0.0 {
        let m = -d.x / d.y;
        if m != 0.0 {
            let c = mid.y - m * mid.x;
            (Point::new(0.0, c), Point::new(cfg.bound, m * cfg.bound + c))
        } else {
            (Point::new(0.0, mid.y), Point::new(cfg.bound, mid.y))
        }
    } else {
        (
            Point::new(mid.x, -cfg.open_extent),
            Point::new(mid.x, cfg.open_extent),
        )
    };
    Some(Bisector {
        source: *seg,
        start: Tip::Open(p),
        end: Tip::Open(q),
    })
}

/// Distance-based equidistance check used by tests and debug assertions.
#[inline]
pub fn is_equidistant(p: Point, seg: &Segment, rel_tol: f64) -> bool {
    let da = (p - seg.a).norm();
    let db = (p - seg.b).norm();
    (da - db).abs() <= rel_tol * da.max(db).max(1.0)
}
