//! Persistence diagram figure.
//!
//! The diagram is synthetic: three fixed births get a death value from a
//! closed-form formula in the radius, and a pair is shown only while its
//! death exceeds the radius. No filtration is computed.
//!
//! ```text
//! death = birth + 0.4 + 0.2 * sin(10 * radius)
//! keep  iff death > radius
//! ```

use tda_core::types::error::ensure_non_negative;
use tda_core::{CloudError, PersistencePoint};

use crate::point_cloud::CANVAS_SIZE;
use crate::scene::{Axis, DashStyle, Figure, HoverMode, Layout, Line, Marker, Title, Trace};

/// Birth values of the candidate features.
pub const CANDIDATE_BIRTHS: [f64; 3] = [0.0, 0.3, 0.5];

const BASE_LIFETIME: f64 = 0.4;
const OSCILLATION_AMPLITUDE: f64 = 0.2;
const OSCILLATION_FREQUENCY: f64 = 10.0;

const DIAGRAM_MARKER_SIZE: u32 = 12;
const DIAGRAM_COLOR: &str = "red";
const DIAGONAL_COLOR: &str = "black";

/// Death value of a candidate born at `birth`, for the given radius.
#[inline]
pub fn death_at(birth: f64, radius: f64) -> f64 {
    birth + BASE_LIFETIME + OSCILLATION_AMPLITUDE * (radius * OSCILLATION_FREQUENCY).sin()
}

/// Surviving `(birth, death)` pairs at `radius`, in candidate order.
///
/// # Errors
///
/// Returns `CloudError` if `radius` is negative or not finite.
///
/// # Examples
///
/// ```rust
/// use tda_figures::persistence_points;
///
/// let points = persistence_points(0.0).unwrap();
/// assert_eq!(points.len(), 3);
/// assert!((points[1].death - 0.7).abs() < 1e-12);
/// ```
pub fn persistence_points(radius: f64) -> Result<Vec<PersistencePoint>, CloudError> {
    let radius = ensure_non_negative("radius", radius)?;
    Ok(CANDIDATE_BIRTHS
        .iter()
        .map(|&birth| PersistencePoint::new(birth, death_at(birth, radius)))
        .filter(|p| p.is_alive_at(radius))
        .collect())
}

/// Builds the persistence diagram figure.
///
/// Trace 0 holds the surviving pairs; trace 1 is the dashed reference
/// diagonal from `(0, 0)` to `(1, 1)`.
///
/// # Errors
///
/// Returns `CloudError` if `radius` is negative or not finite.
pub fn build_persistence_diagram(radius: f64) -> Result<Figure, CloudError> {
    let survivors = persistence_points(radius)?;
    let (births, deaths): (Vec<f64>, Vec<f64>) =
        survivors.iter().map(|p| (p.birth, p.death)).unzip();

    let data = vec![
        Trace::markers(births, deaths).marker(Marker::new(DIAGRAM_MARKER_SIZE, DIAGRAM_COLOR)),
        Trace::lines(vec![0.0, 1.0], vec![0.0, 1.0])
            .line(Line::new(DIAGONAL_COLOR).dash(DashStyle::Dash))
            .decorative(),
    ];

    let layout = Layout {
        title: Title::new("Persistence Diagram"),
        xaxis: Axis::ranged(0.0, 1.0).titled("Birth"),
        yaxis: Axis::ranged(0.0, 1.0).titled("Death"),
        width: CANVAS_SIZE,
        height: CANVAS_SIZE,
        hovermode: HoverMode::Closest,
        showlegend: false,
    };

    Ok(Figure::new(data, layout))
}
