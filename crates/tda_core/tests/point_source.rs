//! Integration tests for point sampling.
//!
//! # Test Categories
//!
//! 1. **Containment**: Every point lies inside the sampling disk
//! 2. **Determinism**: Equal seeds give bit-identical point sets
//! 3. **Validation**: Invalid parameters are rejected

use proptest::prelude::*;
use tda_core::source::PointSource;
use tda_core::CloudError;

#[test]
fn test_default_cloud_has_thirty_points_in_unit_disk() {
    let points = PointSource::default().sample();
    assert_eq!(points.len(), 30);
    for p in &points {
        assert!(p.norm() <= 1.0 + 1e-12, "Point {:?} outside unit disk", p);
    }
}

#[test]
fn test_same_seed_same_points() {
    let a = PointSource::generate(200, 1.5, 7).unwrap();
    let b = PointSource::generate(200, 1.5, 7).unwrap();
    for (p, q) in a.iter().zip(b.iter()) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
    }
}

#[test]
fn test_different_seed_different_points() {
    let a = PointSource::generate(10, 1.0, 0).unwrap();
    let b = PointSource::generate(10, 1.0, 1).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_invalid_parameters() {
    assert!(matches!(
        PointSource::generate(0, 1.0, 0),
        Err(CloudError::InvalidParameter { name: "count", .. })
    ));
    assert!(matches!(
        PointSource::generate(10, 0.0, 0),
        Err(CloudError::InvalidParameter {
            name: "radius_limit",
            ..
        })
    ));
    assert!(matches!(
        PointSource::generate(10, f64::INFINITY, 0),
        Err(CloudError::NonFinite {
            name: "radius_limit"
        })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_count_and_containment(
        count in 1usize..500,
        radius_limit in 1e-3f64..100.0,
        seed in any::<u64>()
    ) {
        let points = PointSource::generate(count, radius_limit, seed).unwrap();
        prop_assert_eq!(points.len(), count);
        let limit_sq = radius_limit * radius_limit;
        for p in &points {
            prop_assert!(p.x * p.x + p.y * p.y <= limit_sq * (1.0 + 1e-12));
        }
    }

    #[test]
    fn prop_determinism(count in 1usize..100, seed in any::<u64>()) {
        let a = PointSource::generate(count, 1.0, seed).unwrap();
        let b = PointSource::generate(count, 1.0, seed).unwrap();
        prop_assert_eq!(a, b);
    }
}
