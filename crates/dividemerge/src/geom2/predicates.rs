//! Orientation and intersection predicates.
//!
//! No tolerances here: side tests compare the raw cross product with zero, and
//! parallel lines are reported as `None`.

use super::types::{Point, Segment, Side};

/// Cross product `(b − a) × (p − a)` for `seg = a → b`.
#[inline]
pub fn cross(seg: &Segment, p: Point) -> f64 {
    let d = seg.direction();
    let ap = p - seg.a;
    d.x * ap.y - d.y * ap.x
}

/// Side of `p` relative to `seg`. Positive cross is `Right`, negative is `Left`.
#[inline]
pub fn orientation(seg: &Segment, p: Point) -> Side {
    let c = cross(seg, p);
    if c > 0.0 {
        Side::Right
    } else if c < 0.0 {
        Side::Left
    } else {
        Side::Collinear
    }
}

/// How `intersect` treats its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntersectMode {
    /// Both segments extend to full lines.
    Line,
    /// The crossing must lie on both segments (parameters in `[0, 1]`).
    Bounded,
}

/// Intersection of `s` and `t`; `None` for parallel, collinear or non-finite input.
pub fn intersect(s: &Segment, t: &Segment, mode: IntersectMode) -> Option<Point> {
    let a = s.direction();
    let b = t.a - t.b;
    let c = s.a - t.a;
    let denom = a.y * b.x - a.x * b.y;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let na = (b.y * c.x - b.x * c.y) / denom;
    let p = s.a + a * na;
    if !(p.x.is_finite() && p.y.is_finite()) {
        return None;
    }
    if mode == IntersectMode::Bounded {
        let nb = (a.x * c.y - a.y * c.x) / denom;
        if !(0.0..=1.0).contains(&na) || !(0.0..=1.0).contains(&nb) {
            return None;
        }
    }
    Some(p)
}
