//! Basic 2D types and the working-region configuration.
//!
//! - `RegionCfg`: the bounded square `[0, B]²` plus the extent used for vertical lines.
//! - `Segment`: directed pair of points; identity checks ignore direction.
//! - `Tip`, `Bisector`: a clipped perpendicular bisector whose ends know whether
//!   they were cut (`Pinned`) or still run off to the region edge (`Open`).
//! - `HullEdge`: a hull edge paired with its bisector.

use nalgebra::Vector2;
use serde::Serialize;

/// Points are plain nalgebra column vectors.
pub type Point = Vector2<f64>;

/// Default side length `B` of the working region.
pub const DEFAULT_BOUND: f64 = 600.0;
/// Default half-extent used for vertical bisectors (must exceed the bound).
pub const DEFAULT_OPEN_EXTENT: f64 = 10_000.0;

/// Working-region configuration.
///
/// Invariants (checked by `is_valid`):
/// - `bound` is finite and positive.
/// - `open_extent > bound`, so a vertical bisector always reaches past the region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RegionCfg {
    pub bound: f64,
    pub open_extent: f64,
    /// Midpoint-to-pivot snapping distance used when trimming base-case bisectors.
    pub snap_eps: f64,
}

impl Default for RegionCfg {
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            open_extent: DEFAULT_OPEN_EXTENT,
            snap_eps: 0.01,
        }
    }
}

impl RegionCfg {
    /// Region of side `bound`; the open extent grows with it if needed.
    pub fn with_bound(bound: f64) -> Self {
        Self {
            bound,
            open_extent: DEFAULT_OPEN_EXTENT.max(bound * 16.0),
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bound.is_finite()
            && self.bound > 0.0
            && self.open_extent.is_finite()
            && self.open_extent > self.bound
            && self.snap_eps >= 0.0
    }

    /// Closed membership test for `[0, B]²`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.bound).contains(&p.x) && (0.0..=self.bound).contains(&p.y)
    }
}

/// Result of a side test against a directed segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
    Collinear,
}

/// Which half of a split point set something belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Half {
    Left,
    Right,
}

/// Directed segment `a → b`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.b - self.a
    }
    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.a + self.b) * 0.5
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
    /// Undirected identity: `a→b` and `b→a` are the same edge.
    #[inline]
    pub fn same_as(&self, other: &Segment) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// One end of a clipped line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Tip {
    /// The line runs on past this point (region edge or vertical extent).
    Open(Point),
    /// The line was cut here by another bisector or by the chain.
    Pinned(Point),
}

impl Tip {
    #[inline]
    pub fn point(&self) -> Point {
        match *self {
            Tip::Open(p) | Tip::Pinned(p) => p,
        }
    }
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, Tip::Open(_))
    }
}

/// Perpendicular bisector of `source`, clipped to the working region.
///
/// Values are never edited in place: trimming returns a new `Bisector`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bisector {
    pub source: Segment,
    pub start: Tip,
    pub end: Tip,
}

impl Bisector {
    /// The drawable segment between the two tips.
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start.point(), self.end.point())
    }
    #[inline]
    pub fn with_start(&self, start: Tip) -> Self {
        Self { start, ..*self }
    }
    #[inline]
    pub fn with_end(&self, end: Tip) -> Self {
        Self { end, ..*self }
    }
    /// Swap tips so that `start` has the smaller y.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            source: self.source,
            start: self.end,
            end: self.start,
        }
    }
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.start.point().x == self.end.point().x
    }
}

/// Convex-hull edge together with its bisector (`bisector.source == edge`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HullEdge {
    pub edge: Segment,
    pub bisector: Bisector,
}

/// Unique endpoints of `edges`, in edge order.
pub fn hull_points<'a, I>(edges: I) -> Vec<Point>
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut out: Vec<Point> = Vec::new();
    for e in edges {
        for p in [e.a, e.b] {
            if !out.contains(&p) {
                out.push(p);
            }
        }
    }
    out
}
