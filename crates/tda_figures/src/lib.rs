//! # tda_figures: Scene Builders for the Persistence Demo
//!
//! ## Layer 2 (Kernel) Role
//!
//! Given the fixed [`PointSet`](tda_core::PointSet) and the current radius,
//! this crate produces the two figures shown by the demo:
//!
//! - [`build_point_cloud`]: points with a disk of the chosen radius around each
//! - [`build_persistence_diagram`]: synthetic birth/death pairs filtered by radius
//!
//! Both builders are pure functions; calling them twice with the same inputs
//! yields equal [`Figure`] values. Figures serialise to plotly's
//! `{"data": [...], "layout": {...}}` JSON.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tda_core::source::PointSource;
//! use tda_figures::{build_figures, build_persistence_diagram};
//!
//! let points = PointSource::default().sample();
//! let figures = build_figures(&points, 0.2).unwrap();
//! assert_eq!(figures.point_cloud.traces().len(), 1 + points.len());
//!
//! let diagram = build_persistence_diagram(0.0).unwrap();
//! let json = diagram.to_json_string().unwrap();
//! assert!(json.contains("\"Persistence Diagram\""));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod persistence;
pub mod point_cloud;
pub mod scene;

pub use persistence::{build_persistence_diagram, persistence_points};
pub use point_cloud::build_point_cloud;
pub use scene::{Figure, FigurePair, Layout, Trace};

use tda_core::{CloudError, PointSet};

/// Builds both figures for one radius change.
///
/// # Errors
///
/// Returns `CloudError` if `radius` is negative or not finite.
pub fn build_figures(points: &PointSet, radius: f64) -> Result<FigurePair, CloudError> {
    Ok(FigurePair {
        point_cloud: build_point_cloud(points, radius)?,
        persistence_diagram: build_persistence_diagram(radius)?,
    })
}
