//! Walk-through of one full merge on two x-separated triangles.
//!
//! Purpose
//! - Show the hull outline, the hyperplane chain and the retired bisectors
//!   for a six-point input, plus how many snapshots a viewer would receive.
//!
//! References
//! - Code: crates/dividemerge/src/subdivision.rs::build_subdivision_observed

use dividemerge::prelude::*;

fn main() {
    let pts = sort_points(&[
        Point::new(18.0, 7.0),
        Point::new(0.0, 0.0),
        Point::new(5.0, 2.0),
        Point::new(2.0, 6.0),
        Point::new(20.0, 1.0),
        Point::new(15.0, 3.0),
    ]);
    let cfg = RegionCfg::default();
    let mut log = StepLog::default();
    let sub = build_subdivision_observed(&pts, &cfg, &mut log).expect("two triangles merge");

    println!("hull edges={}", sub.hull.len());
    for e in sub.canonical_hull() {
        println!("  edge {e:?}");
    }
    println!("chain links={} continuous={}", sub.chain.len(), sub.chain.is_continuous());
    for link in &sub.chain.links {
        println!("  link {:?} -> {:?}", link.start, link.end);
    }
    let pinned = sub
        .bisectors
        .iter()
        .filter(|b| !b.start.is_open() || !b.end.is_open())
        .count();
    println!("bisectors={} pinned={pinned}", sub.bisectors.len());
    println!("snapshots={}", log.len());
}
