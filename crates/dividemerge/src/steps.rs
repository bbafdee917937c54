//! Step snapshots for an external viewer.
//!
//! The driver reports what each stage produced as an ordered list of
//! primitives. Observers only receive copies; nothing they do feeds back into
//! the computation.

use serde::Serialize;

use crate::geom2::{Point, Segment};

/// One drawable item, or the marker that tells a viewer to wipe the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Primitive {
    Point(Point),
    Segment(Segment),
    Clear,
}

/// Receiver of stage snapshots.
pub trait StepObserver {
    fn record(&mut self, snapshot: Vec<Primitive>);

    fn clear(&mut self) {
        self.record(vec![Primitive::Clear]);
    }
}

/// Discards everything.
impl StepObserver for () {
    #[inline]
    fn record(&mut self, _snapshot: Vec<Primitive>) {}
}

/// Collects snapshots in order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StepLog {
    pub snapshots: Vec<Vec<Primitive>>,
}

impl StepObserver for StepLog {
    fn record(&mut self, snapshot: Vec<Primitive>) {
        self.snapshots.push(snapshot);
    }
}

impl StepLog {
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

pub(crate) fn points(pts: &[Point]) -> impl Iterator<Item = Primitive> + '_ {
    pts.iter().copied().map(Primitive::Point)
}

pub(crate) fn segments<I>(segs: I) -> impl Iterator<Item = Primitive>
where
    I: IntoIterator<Item = Segment>,
{
    segs.into_iter().map(Primitive::Segment)
}
