#![allow(clippy::unwrap_used)]

use posetiles::math::{distance, Point2, Polygon};
use posetiles::sampling::{sample, spawn_directives, SamplerParams};
use proptest::prelude::*;

fn rectangle() -> impl Strategy<Value = Polygon> {
    (-500.0..500.0f64, -500.0..500.0f64, 1.0..400.0f64, 1.0..400.0f64)
        .prop_map(|(x, y, w, h)| Polygon::rectangle(Point2::new(x, y), w, h))
}

fn triangle() -> impl Strategy<Value = Polygon> {
    prop::array::uniform6(-100.0..100.0f64)
        .prop_filter("non-degenerate", |c| {
            let area = (c[2] - c[0]) * (c[5] - c[1]) - (c[4] - c[0]) * (c[3] - c[1]);
            area.abs() > 1.0
        })
        .prop_map(|c| {
            Polygon::new(vec![
                Point2::new(c[0], c[1]),
                Point2::new(c[2], c[3]),
                Point2::new(c[4], c[5]),
            ])
            .unwrap()
        })
}

proptest! {
    #[test]
    fn rectangle_spawns_land_outside(
        rect in rectangle(),
        offset in 0.5..50.0f64,
        limit in 0.0..200.0f64,
    ) {
        let params = SamplerParams::new(offset, limit).unwrap();
        let (lo, hi) = rect.bounding_box();
        for d in spawn_directives(&rect, params).unwrap() {
            let p = d.position;
            let inside = p.x > lo.x && p.x < hi.x && p.y > lo.y && p.y < hi.y;
            prop_assert!(!inside, "spawn point {} inside rectangle", p);
            prop_assert!((d.force.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn outward_point_is_never_closer(
        tri in triangle(),
        offset in 0.5..20.0f64,
        limit in 1.0..60.0f64,
    ) {
        let c = tri.centroid();
        let pairs = sample(&tri, offset, limit).unwrap();
        let params = SamplerParams::new(offset, limit).unwrap();
        let directives = spawn_directives(&tri, params).unwrap();
        prop_assert_eq!(pairs.len(), directives.len());
        for (pair, d) in pairs.iter().zip(&directives) {
            let far = distance(&pair.first, &c).max(distance(&pair.second, &c));
            prop_assert!((distance(&d.position, &c) - far).abs() < 1e-9);
        }
    }

    #[test]
    fn sampling_is_repeatable(tri in triangle(), offset in 0.5..20.0f64, limit in -5.0..60.0f64) {
        let first = sample(&tri, offset, limit).unwrap();
        let second = sample(&tri, offset, limit).unwrap();
        prop_assert_eq!(first, second);
    }
}
