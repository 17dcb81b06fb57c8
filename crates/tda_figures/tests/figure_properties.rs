//! Property tests for the figure builders.
//!
//! # Test Categories
//!
//! 1. **Point cloud geometry**: marker and circle counts, circle radius
//! 2. **Persistence filtering**: survivors match the death formula
//! 3. **Idempotence**: equal inputs give equal figures
//! 4. **Serialisation**: plotly JSON shape

use approx::assert_relative_eq;
use proptest::prelude::*;
use tda_core::source::PointSource;
use tda_core::Point2D;
use tda_figures::persistence::{death_at, CANDIDATE_BIRTHS};
use tda_figures::point_cloud::CIRCLE_RESOLUTION;
use tda_figures::{build_figures, build_persistence_diagram, build_point_cloud, persistence_points};

#[test]
fn test_default_cloud_figure() {
    let points = PointSource::default().sample();
    let figure = build_point_cloud(&points, 0.3).unwrap();

    assert_eq!(figure.traces()[0].len(), 30);
    assert_eq!(figure.traces().len(), 31);
}

#[test]
fn test_builders_are_idempotent() {
    let points = PointSource::generate(40, 1.0, 5).unwrap();
    for radius in [0.0, 0.14, 0.5, 0.8] {
        assert_eq!(
            build_figures(&points, radius).unwrap(),
            build_figures(&points, radius).unwrap()
        );
    }
}

#[test]
fn test_persistence_diagram_at_zero() {
    let figure = build_persistence_diagram(0.0).unwrap();
    let survivors: Vec<(f64, f64)> = figure.traces()[0].samples().collect();
    assert_eq!(survivors.len(), 3);
    assert_relative_eq!(survivors[0].1, 0.4, epsilon = 1e-12);
    assert_relative_eq!(survivors[1].1, 0.7, epsilon = 1e-12);
    assert_relative_eq!(survivors[2].1, 0.9, epsilon = 1e-12);
}

#[test]
fn test_point_cloud_json_shape() {
    let points = PointSource::generate(2, 1.0, 0).unwrap();
    let json = build_point_cloud(&points, 0.2).unwrap().to_json().unwrap();

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["mode"], "markers");
    assert_eq!(data[1]["mode"], "lines");
    assert_eq!(data[1]["fill"], "toself");
    assert_eq!(data[1]["fillcolor"], "rgba(173, 216, 230, 0.2)");
    assert_eq!(data[1]["x"].as_array().unwrap().len(), 50);
    assert_eq!(json["layout"]["title"]["text"], "Point Cloud with Radius 0.20");
    assert_eq!(json["layout"]["xaxis"]["range"][1], 2.0);
}

#[test]
fn test_persistence_diagram_json_shape() {
    let json = build_persistence_diagram(0.5).unwrap().to_json().unwrap();

    assert_eq!(json["data"][0]["x"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"][1]["line"]["dash"], "dash");
    assert_eq!(json["layout"]["xaxis"]["title"]["text"], "Birth");
    assert_eq!(json["layout"]["yaxis"]["title"]["text"], "Death");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_circles_lie_at_radius(
        count in 1usize..60,
        seed in any::<u64>(),
        radius in 0.0f64..1.0
    ) {
        let points = PointSource::generate(count, 1.0, seed).unwrap();
        let figure = build_point_cloud(&points, radius).unwrap();

        prop_assert_eq!(figure.traces().len(), count + 1);
        prop_assert_eq!(figure.traces()[0].len(), count);

        for (circle, center) in figure.traces()[1..].iter().zip(points.iter()) {
            prop_assert_eq!(circle.len(), CIRCLE_RESOLUTION);
            for (x, y) in circle.samples() {
                let distance = Point2D::new(x, y).distance(center);
                prop_assert!((distance - radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_survivors_match_filter(radius in 0.0f64..2.0) {
        let survivors = persistence_points(radius).unwrap();
        let expected: Vec<f64> = CANDIDATE_BIRTHS
            .iter()
            .copied()
            .filter(|&birth| death_at(birth, radius) > radius)
            .collect();

        prop_assert_eq!(survivors.len(), expected.len());
        for (p, birth) in survivors.iter().zip(expected) {
            prop_assert_eq!(p.birth, birth);
            prop_assert!(p.death > radius);
        }
    }
}
