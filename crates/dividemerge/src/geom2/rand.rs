//! Random point sets inside the working region (seeded, replayable).
//!
//! Purpose
//! - Deterministic inputs for property tests, benches and the CLI `generate`
//!   command. Draws are sorted by (x, y) and free of duplicates, so they satisfy
//!   the driver's preconditions as-is.
//!
//! Model
//! - Coordinates are uniform in `[margin, B − margin]`, optionally snapped to an
//!   integer grid (the usual shape of hand-entered datasets).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, RegionCfg};
use crate::subdivision::sort_points;

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(2),
            PointCount::Uniform { min, max } => {
                let lo = min.max(2);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PointSetCfg {
    pub count: PointCount,
    /// Distance kept from the region border.
    pub margin: f64,
    /// Round coordinates to integers.
    pub integer_grid: bool,
}
impl Default for PointSetCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Uniform { min: 2, max: 6 },
            margin: 20.0,
            integer_grid: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a sorted, duplicate-free point set inside `region`.
///
/// Returns `None` when the margin leaves no room or the grid cannot hold the
/// requested number of distinct points.
pub fn draw_point_set(
    cfg: PointSetCfg,
    region: &RegionCfg,
    tok: ReplayToken,
) -> Option<Vec<Point>> {
    let lo = cfg.margin.max(0.0);
    let hi = region.bound - lo;
    if !(hi > lo) {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    if cfg.integer_grid {
        let side = (hi.floor() - lo.ceil() + 1.0).max(0.0);
        if side * side < n as f64 {
            return None;
        }
    }
    let mut pts: Vec<Point> = Vec::with_capacity(n);
    // Rejection on duplicates; bounded since the grid has room for n points.
    while pts.len() < n {
        let mut p = Point::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi));
        if cfg.integer_grid {
            let snap = |v: f64| v.round().clamp(lo.ceil(), hi.floor());
            p = Point::new(snap(p.x), snap(p.y));
        }
        if !pts.contains(&p) {
            pts.push(p);
        }
    }
    Some(sort_points(&pts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let region = RegionCfg::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = draw_point_set(PointSetCfg::default(), &region, tok).expect("points");
        let b = draw_point_set(PointSetCfg::default(), &region, tok).expect("points");
        assert_eq!(a, b);
    }

    #[test]
    fn draws_are_sorted_distinct_and_inside() {
        let region = RegionCfg::default();
        let cfg = PointSetCfg {
            count: PointCount::Fixed(6),
            ..PointSetCfg::default()
        };
        for index in 0..50 {
            let pts = draw_point_set(cfg, &region, ReplayToken { seed: 3, index }).unwrap();
            assert_eq!(pts.len(), 6);
            for w in pts.windows(2) {
                assert!((w[0].x, w[0].y) < (w[1].x, w[1].y));
            }
            assert!(pts.iter().all(|p| region.contains(*p)));
            assert!(pts.iter().all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
        }
    }

    #[test]
    fn margin_too_wide_is_rejected() {
        let region = RegionCfg::with_bound(10.0);
        let cfg = PointSetCfg {
            margin: 6.0,
            ..PointSetCfg::default()
        };
        assert!(draw_point_set(cfg, &region, ReplayToken { seed: 0, index: 0 }).is_none());
    }
}
