//! Point cloud figure: every sample with a disk of the current radius.

use std::f64::consts::TAU;

use tda_core::types::error::ensure_non_negative;
use tda_core::{CloudError, Point2D, PointSet};

use crate::scene::{Axis, Figure, HoverMode, Layout, Line, Marker, Title, Trace, XAnchor};

/// Number of angular samples per circle, endpoints included.
pub const CIRCLE_RESOLUTION: usize = 50;

/// Half-width of both axes; the view is `[-AXIS_LIMIT, AXIS_LIMIT]`.
pub const AXIS_LIMIT: f64 = 2.0;

/// Width and height of the canvas in pixels.
pub const CANVAS_SIZE: u32 = 500;

const POINT_MARKER_SIZE: u32 = 8;
const POINT_COLOR: &str = "blue";
const DISK_LINE_COLOR: &str = "lightblue";
const DISK_LINE_WIDTH: u32 = 2;
const DISK_FILL_COLOR: &str = "rgba(173, 216, 230, 0.2)";

/// `n` evenly spaced values from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |k| if k + 1 == n { stop } else { start + step * k as f64 })
}

/// Closed outline of the circle of `radius` around `center`.
///
/// Returns [`CIRCLE_RESOLUTION`] samples; the first and last coincide.
pub fn circle_samples(center: &Point2D, radius: f64) -> (Vec<f64>, Vec<f64>) {
    linspace(0.0, TAU, CIRCLE_RESOLUTION)
        .map(|theta| {
            let (sin, cos) = theta.sin_cos();
            (center.x + radius * cos, center.y + radius * sin)
        })
        .unzip()
}

/// Builds the point cloud figure.
///
/// Trace 0 holds one marker per point; traces `1..=points.len()` are the
/// filled circles, in point order. A zero radius still emits a degenerate
/// circle for every point.
///
/// # Errors
///
/// Returns `CloudError` if `radius` is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use tda_core::{Point2D, PointSet};
/// use tda_figures::build_point_cloud;
///
/// let points = PointSet::from_points(vec![Point2D::new(0.0, 0.0)]);
/// let figure = build_point_cloud(&points, 0.25).unwrap();
/// assert_eq!(figure.traces().len(), 2);
/// assert_eq!(figure.layout().title.text, "Point Cloud with Radius 0.25");
/// ```
pub fn build_point_cloud(points: &PointSet, radius: f64) -> Result<Figure, CloudError> {
    let radius = ensure_non_negative("radius", radius)?;

    let mut data = Vec::with_capacity(points.len() + 1);
    data.push(
        Trace::markers(points.xs(), points.ys())
            .marker(Marker::new(POINT_MARKER_SIZE, POINT_COLOR)),
    );
    data.extend(points.iter().map(|center| {
        let (x, y) = circle_samples(center, radius);
        Trace::lines(x, y)
            .line(Line::new(DISK_LINE_COLOR).width(DISK_LINE_WIDTH))
            .filled(DISK_FILL_COLOR)
            .decorative()
    }));

    let layout = Layout {
        title: Title::new(format!("Point Cloud with Radius {:.2}", radius))
            .anchored(XAnchor::Left),
        xaxis: Axis::ranged(-AXIS_LIMIT, AXIS_LIMIT).scaled_to("y", 1.0),
        yaxis: Axis::ranged(-AXIS_LIMIT, AXIS_LIMIT),
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        hovermode: HoverMode::Closest,
        showlegend: false,
    };

    Ok(Figure::new(data, layout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Fill, TraceMode};
    use approx::assert_relative_eq;

    fn fixture() -> PointSet {
        PointSet::from_points(vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.5, -0.25),
            Point2D::new(-0.75, 0.6),
        ])
    }

    #[test]
    fn test_linspace_endpoints() {
        let values: Vec<f64> = linspace(0.0, TAU, CIRCLE_RESOLUTION).collect();
        assert_eq!(values.len(), 50);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[49], TAU);
        assert_relative_eq!(values[1], TAU / 49.0, epsilon = 1e-15);
    }

    #[test]
    fn test_circle_is_closed() {
        let (x, y) = circle_samples(&Point2D::new(1.0, 1.0), 0.3);
        assert_relative_eq!(x[0], x[CIRCLE_RESOLUTION - 1], epsilon = 1e-12);
        assert_relative_eq!(y[0], y[CIRCLE_RESOLUTION - 1], epsilon = 1e-12);
        assert_relative_eq!(x[0], 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_trace_structure() {
        let figure = build_point_cloud(&fixture(), 0.4).unwrap();
        let traces = figure.traces();
        assert_eq!(traces.len(), 4);

        let markers = &traces[0];
        assert_eq!(markers.mode, TraceMode::Markers);
        assert_eq!(markers.x, vec![0.0, 0.5, -0.75]);
        assert_eq!(markers.marker.as_ref().unwrap().size, 8);

        for circle in &traces[1..] {
            assert_eq!(circle.mode, TraceMode::Lines);
            assert_eq!(circle.len(), CIRCLE_RESOLUTION);
            assert_eq!(circle.fill, Some(Fill::ToSelf));
            assert_eq!(circle.showlegend, Some(false));
        }
    }

    #[test]
    fn test_layout() {
        let figure = build_point_cloud(&fixture(), 0.123).unwrap();
        let layout = figure.layout();
        assert_eq!(layout.title.text, "Point Cloud with Radius 0.12");
        assert_eq!(layout.title.xanchor, Some(XAnchor::Left));
        assert_eq!(layout.xaxis.range, [-2.0, 2.0]);
        assert_eq!(layout.yaxis.range, [-2.0, 2.0]);
        assert_eq!(layout.xaxis.scaleanchor.as_deref(), Some("y"));
        assert_eq!(layout.xaxis.scaleratio, Some(1.0));
        assert_eq!((layout.width, layout.height), (500, 500));
        assert!(!layout.showlegend);
    }

    #[test]
    fn test_negative_zero_radius_title() {
        let figure = build_point_cloud(&fixture(), -0.0).unwrap();
        assert_eq!(figure.layout().title.text, "Point Cloud with Radius 0.00");
    }

    #[test]
    fn test_zero_radius_emits_degenerate_circles() {
        let points = fixture();
        let figure = build_point_cloud(&points, 0.0).unwrap();
        assert_eq!(figure.traces().len(), points.len() + 1);

        for (circle, center) in figure.traces()[1..].iter().zip(points.iter()) {
            for (x, y) in circle.samples() {
                assert_eq!((x, y), (center.x, center.y));
            }
        }
    }

    #[test]
    fn test_invalid_radius() {
        let points = fixture();
        assert!(matches!(
            build_point_cloud(&points, -0.1),
            Err(CloudError::InvalidParameter { name: "radius", .. })
        ));
        assert_eq!(
            build_point_cloud(&points, f64::NAN),
            Err(CloudError::NonFinite { name: "radius" })
        );
    }
}
