use super::*;
use crate::geom2::{cross, is_equidistant, Point, RegionCfg, Segment, Tip};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn close(a: Point, b: Point) -> bool {
    (a - b).norm() < 1e-9
}

#[test]
fn two_points_give_one_open_edge() {
    let cfg = RegionCfg::default();
    let hull = build_base_hull(&[p(0.0, 0.0), p(10.0, 0.0)], &cfg);
    assert_eq!(hull.len(), 1);
    assert_eq!(hull[0].edge, Segment::new(p(0.0, 0.0), p(10.0, 0.0)));
    assert_eq!(hull[0].bisector.start, Tip::Open(p(5.0, -cfg.open_extent)));
    assert_eq!(hull[0].bisector.end, Tip::Open(p(5.0, cfg.open_extent)));
}

#[test]
fn triangle_winding_follows_orientation_sign() {
    // Positive cross: p0→p2, p2→p1, p1→p0.
    let pos = hull_edges(&[p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0)]);
    assert_eq!(
        pos,
        vec![
            Segment::new(p(0.0, 0.0), p(5.0, 10.0)),
            Segment::new(p(5.0, 10.0), p(10.0, 0.0)),
            Segment::new(p(10.0, 0.0), p(0.0, 0.0)),
        ]
    );
    // Negative cross: p0→p1, p1→p2, p2→p0.
    let neg = hull_edges(&[p(0.0, 10.0), p(5.0, 20.0), p(10.0, 0.0)]);
    assert_eq!(
        neg,
        vec![
            Segment::new(p(0.0, 10.0), p(5.0, 20.0)),
            Segment::new(p(5.0, 20.0), p(10.0, 0.0)),
            Segment::new(p(10.0, 0.0), p(0.0, 10.0)),
        ]
    );
}

#[test]
fn triangle_edges_turn_consistently() {
    for pts in [
        [p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0)],
        [p(0.0, 10.0), p(5.0, 20.0), p(10.0, 0.0)],
        [p(100.0, 100.0), p(150.0, 300.0), p(200.0, 150.0)],
    ] {
        let edges = hull_edges(&pts);
        let signs: Vec<f64> = (0..edges.len())
            .map(|i| cross(&edges[i], edges[(i + 1) % edges.len()].b).signum())
            .collect();
        assert!(signs.iter().all(|s| *s == signs[0] && *s != 0.0), "{signs:?}");
    }
}

#[test]
fn collinear_triple_keeps_two_edges_untrimmed() {
    let cfg = RegionCfg::default();
    let hull = build_base_hull(&[p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)], &cfg);
    assert_eq!(hull.len(), 2);
    assert_eq!(hull[0].edge, Segment::new(p(0.0, 0.0), p(1.0, 1.0)));
    assert_eq!(hull[1].edge, Segment::new(p(1.0, 1.0), p(2.0, 2.0)));
    // Parallel bisectors never meet, so both stay open at both ends.
    for he in &hull {
        assert!(he.bisector.start.is_open() && he.bisector.end.is_open());
    }
}

#[test]
fn triangle_bisectors_are_cut_at_circumcenter() {
    let cfg = RegionCfg::default();
    let hull = build_base_hull(&[p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0)], &cfg);
    assert_eq!(hull.len(), 3);
    let center = p(5.0, 3.75);

    let b0 = hull[0].bisector;
    assert!(close(b0.start.point(), p(0.0, 6.25)) && b0.start.is_open());
    assert!(matches!(b0.end, Tip::Pinned(q) if close(q, center)));

    let b1 = hull[1].bisector;
    assert!(matches!(b1.start, Tip::Pinned(q) if close(q, center)));
    assert!(close(b1.end.point(), p(cfg.bound, 301.25)) && b1.end.is_open());

    // Base edge keeps the downward half, away from the apex.
    let b2 = hull[2].bisector;
    assert_eq!(b2.start, Tip::Open(p(5.0, -cfg.open_extent)));
    assert!(matches!(b2.end, Tip::Pinned(q) if close(q, center)));

    for he in &hull {
        assert_eq!(he.bisector.source, he.edge);
        assert!(is_equidistant(he.bisector.start.point(), &he.edge, 1e-9));
        assert!(is_equidistant(he.bisector.end.point(), &he.edge, 1e-9));
    }
}

#[test]
fn unsupported_leaf_sizes_give_no_edges() {
    assert!(hull_edges(&[]).is_empty());
    assert!(hull_edges(&[p(1.0, 1.0)]).is_empty());
    assert!(hull_edges(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 1.0), p(3.0, 0.0)]).is_empty());
}

#[test]
fn merge_disjoint_triangles_adds_two_tangents() {
    let cfg = RegionCfg::default();
    let left = build_base_hull(&[p(0.0, 0.0), p(2.0, 6.0), p(5.0, 2.0)], &cfg);
    let right = build_base_hull(&[p(15.0, 3.0), p(18.0, 7.0), p(20.0, 1.0)], &cfg);
    let merged = merge_hulls(&left, &right);

    assert_eq!(
        merged.outline,
        vec![
            Segment::new(p(0.0, 0.0), p(2.0, 6.0)),
            Segment::new(p(2.0, 6.0), p(18.0, 7.0)),
            Segment::new(p(18.0, 7.0), p(20.0, 1.0)),
            Segment::new(p(20.0, 1.0), p(0.0, 0.0)),
        ]
    );
    let left_inner: Vec<Segment> = merged.left.inner.iter().map(|he| he.edge).collect();
    assert_eq!(
        left_inner,
        vec![
            Segment::new(p(2.0, 6.0), p(5.0, 2.0)),
            Segment::new(p(5.0, 2.0), p(0.0, 0.0)),
        ]
    );
    let right_inner: Vec<Segment> = merged.right.inner.iter().map(|he| he.edge).collect();
    assert_eq!(
        right_inner,
        vec![
            Segment::new(p(15.0, 3.0), p(18.0, 7.0)),
            Segment::new(p(20.0, 1.0), p(15.0, 3.0)),
        ]
    );
    // Bisector sets are complete and untouched by the merge.
    assert_eq!(merged.left.bisectors.len(), 3);
    assert_eq!(merged.right.bisectors.len(), 3);
    for (he, b) in left.iter().zip(&merged.left.bisectors) {
        assert_eq!(he.bisector, *b);
    }
    // Exactly two outline edges cross the gap.
    let bridges = merged
        .outline
        .iter()
        .filter(|e| (e.a.x < 10.0) != (e.b.x < 10.0))
        .count();
    assert_eq!(bridges, 2);
}

#[test]
fn merge_of_two_single_edges() {
    let cfg = RegionCfg::default();
    let left = build_base_hull(&[p(100.0, 100.0), p(200.0, 300.0)], &cfg);
    let right = build_base_hull(&[p(400.0, 150.0), p(500.0, 350.0)], &cfg);
    let merged = merge_hulls(&left, &right);
    assert_eq!(
        merged.outline,
        vec![
            Segment::new(p(100.0, 100.0), p(200.0, 300.0)),
            Segment::new(p(200.0, 300.0), p(500.0, 350.0)),
            Segment::new(p(400.0, 150.0), p(100.0, 100.0)),
            Segment::new(p(500.0, 350.0), p(400.0, 150.0)),
        ]
    );
    // Two-edge-or-less hulls hand over all of their edges.
    assert_eq!(merged.left.inner, left);
    assert_eq!(merged.right.inner, right);
}

#[test]
fn merge_of_collinear_pairs_keeps_each_edge_once() {
    let cfg = RegionCfg::default();
    let left = build_base_hull(&[p(0.0, 0.0), p(10.0, 0.0)], &cfg);
    let right = build_base_hull(&[p(20.0, 0.0), p(30.0, 0.0)], &cfg);
    let merged = merge_hulls(&left, &right);
    assert_eq!(
        merged.outline,
        vec![
            Segment::new(p(0.0, 0.0), p(10.0, 0.0)),
            Segment::new(p(20.0, 0.0), p(30.0, 0.0)),
        ]
    );
}
