//! Hyperplane chain between two merged halves.
//!
//! Walk
//! - Hull points of each half's inner edges are ordered by ascending y.
//! - Each step takes the auxiliary pair (right point, left point); its bisector,
//!   oriented upward and started where the previous link ended, is the next
//!   link candidate.
//! - The lowest hit of the candidate with any still-active bisector of either
//!   half (above the link start, below the region top) ends the link. The hit
//!   bisector is retired: trimmed to abut the chain and dropped from the active
//!   set. The touching half then advances to its next point.
//! - The walk ends at the last pair of points, when no bisector is hit, or when
//!   the touching half runs out of points.
//! - A miss while points remain on either half leaves the touch side
//!   undetermined. The walk still ends there, but the chain records the step
//!   in `stopped_early` so callers can tell it apart from a complete walk.

use serde::Serialize;

use crate::error::ChainError;
use crate::geom2::{
    hull_points, intersect, perpendicular_bisector, Bisector, Half, IntersectMode, Point,
    RegionCfg, Segment, Tip,
};
use crate::hull::HalfSet;
use crate::steps::{Primitive, StepObserver};

/// Ordered links; `links[i].end` is where `links[i + 1]` starts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct HyperplaneChain {
    /// Each link is the bisector of the auxiliary pair it was built from.
    pub links: Vec<Bisector>,
    /// Step at which no active bisector was hit although points remained.
    pub stopped_early: Option<usize>,
}

impl HyperplaneChain {
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
    /// Every auxiliary pair was visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.stopped_early.is_none()
    }
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.links.iter().map(Bisector::segment)
    }
    /// Exact continuity check between consecutive links.
    pub fn is_continuous(&self) -> bool {
        self.links
            .windows(2)
            .all(|w| w[0].end.point() == w[1].start.point())
    }
}

/// Chain plus the bisector set after the walk.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChainOutcome {
    pub chain: HyperplaneChain,
    /// Retired bisectors in walk order, then the untouched left and right ones.
    pub bisectors: Vec<Bisector>,
}

#[derive(Clone, Copy, Debug)]
struct Touch {
    half: Half,
    index: usize,
    at: Point,
}

/// Build the chain separating `left` from `right`.
pub fn build_chain(
    left: &HalfSet,
    right: &HalfSet,
    cfg: &RegionCfg,
) -> Result<ChainOutcome, ChainError> {
    build_chain_observed(left, right, cfg, &mut ())
}

/// As `build_chain`, reporting each auxiliary pair and each link to `obs`.
pub fn build_chain_observed(
    left: &HalfSet,
    right: &HalfSet,
    cfg: &RegionCfg,
    obs: &mut dyn StepObserver,
) -> Result<ChainOutcome, ChainError> {
    let left_pts = by_ascending_y(hull_points(left.inner.iter().map(|he| &he.edge)));
    let right_pts = by_ascending_y(hull_points(right.inner.iter().map(|he| &he.edge)));

    let mut active_left = left.bisectors.clone();
    let mut active_right = right.bisectors.clone();
    let mut links: Vec<Bisector> = Vec::new();
    let mut retired: Vec<Bisector> = Vec::new();
    let (mut il, mut ir) = (0usize, 0usize);
    let mut prev_end: Option<Point> = None;
    let mut stopped_early: Option<usize> = None;

    while il < left_pts.len() && ir < right_pts.len() {
        let step = links.len();
        let pair = Segment::new(right_pts[ir], left_pts[il]);
        obs.record(vec![Primitive::Segment(pair)]);

        let mut link = upward_candidate(&pair, cfg, step)?;
        if let Some(p) = prev_end {
            link = link.with_start(Tip::Pinned(p));
        }

        let terminal = il + 1 == left_pts.len() && ir + 1 == right_pts.len();
        let touch = if terminal {
            None
        } else {
            lowest_touch(&link, &active_left, &active_right, cfg)
        };
        tracing::debug!(step, il, ir, terminal, touch = ?touch.map(|t| t.half), "chain step");

        let Some(touch) = touch else {
            if !terminal {
                tracing::warn!(
                    step,
                    left_remaining = left_pts.len() - il - 1,
                    right_remaining = right_pts.len() - ir - 1,
                    "no bisector hit; touch side undetermined, chain stops early"
                );
                stopped_early = Some(step);
            }
            obs.record(vec![Primitive::Segment(link.segment())]);
            links.push(link);
            break;
        };
        link = link.with_end(Tip::Pinned(touch.at));
        obs.record(vec![Primitive::Segment(link.segment())]);
        links.push(link);
        prev_end = Some(touch.at);

        let active = match touch.half {
            Half::Left => &mut active_left,
            Half::Right => &mut active_right,
        };
        let hit = active.remove(touch.index);
        retired.push(retire(&hit, touch.half, touch.at, cfg));
        match touch.half {
            Half::Left => il += 1,
            Half::Right => ir += 1,
        }
    }

    let mut bisectors = retired;
    bisectors.extend(active_left);
    bisectors.extend(active_right);
    Ok(ChainOutcome {
        chain: HyperplaneChain {
            links,
            stopped_early,
        },
        bisectors,
    })
}

fn by_ascending_y(mut pts: Vec<Point>) -> Vec<Point> {
    pts.sort_by(|a, b| a.y.total_cmp(&b.y));
    pts
}

/// Bisector of the auxiliary pair with `start` below `end`.
fn upward_candidate(
    pair: &Segment,
    cfg: &RegionCfg,
    step: usize,
) -> Result<Bisector, ChainError> {
    let link =
        perpendicular_bisector(pair, cfg).ok_or(ChainError::DegenerateCandidate { step })?;
    let (y0, y1) = (link.start.point().y, link.end.point().y);
    if y0 > y1 {
        Ok(link.flipped())
    } else if y0 < y1 {
        Ok(link)
    } else {
        Err(ChainError::LevelCandidate { step, x: pair.a.x })
    }
}

/// Lowest crossing of `link` with an active bisector, strictly above the link
/// start and strictly below the region top. Left bisectors are scanned first
/// and win ties: a later hit replaces the best only when strictly lower.
fn lowest_touch(
    link: &Bisector,
    left: &[Bisector],
    right: &[Bisector],
    cfg: &RegionCfg,
) -> Option<Touch> {
    let cand = link.segment();
    let floor = link.start.point().y;
    let lowest_in = |half: Half, set: &[Bisector]| {
        let mut best: Option<Touch> = None;
        for (index, b) in set.iter().enumerate() {
            let Some(at) = intersect(&cand, &b.segment(), IntersectMode::Bounded) else {
                continue;
            };
            let ceiling = best.map_or(cfg.bound, |t| t.at.y);
            if at.y < ceiling && at.y > floor {
                best = Some(Touch { half, index, at });
            }
        }
        best
    };
    match (lowest_in(Half::Left, left), lowest_in(Half::Right, right)) {
        (Some(l), Some(r)) => Some(if r.at.y < l.at.y { r } else { l }),
        (l, r) => l.or(r),
    }
}

/// Trim a hit bisector so it ends on the chain.
///
/// Left bisectors lose their open tip on the right border (`x = B`), right
/// bisectors their open tip on the left border (`x = 0`). A vertical bisector
/// loses its start (left) or end (right). Anything else is retired as is.
fn retire(b: &Bisector, half: Half, at: Point, cfg: &RegionCfg) -> Bisector {
    let border_x = match half {
        Half::Left => cfg.bound,
        Half::Right => 0.0,
    };
    let on_border = |t: &Tip| t.is_open() && t.point().x == border_x;
    let pinned = Tip::Pinned(at);
    if on_border(&b.start) {
        b.with_start(pinned)
    } else if on_border(&b.end) {
        b.with_end(pinned)
    } else if b.is_vertical() {
        match half {
            Half::Left => b.with_start(pinned),
            Half::Right => b.with_end(pinned),
        }
    } else {
        tracing::debug!(?half, source = ?b.source, "retired bisector has no open border tip");
        *b
    }
}
