//! # tda_core: Foundation for the Persistence Demo
//!
//! ## Layer 1 (Foundation) Role
//!
//! tda_core is the bottom layer of the workspace, providing:
//! - Point types: `Point2D`, `PointSet` (`types::point`)
//! - Synthetic birth/death pairs: `PersistencePoint` (`types::persistence`)
//! - Error types: `CloudError` (`types::error`)
//! - Seeded random number generation: `CloudRng` (`rng`)
//! - Area-uniform disk sampling: `PointSource` (`source`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other tda_* crates, with minimal external dependencies:
//! - rand: Seeded pseudo-random generation
//! - thiserror: Error derivation
//! - serde: Serialisation of points
//!
//! ## Usage Examples
//!
//! ```rust
//! use tda_core::source::PointSource;
//!
//! let points = PointSource::generate(30, 1.0, 0).unwrap();
//! assert_eq!(points.len(), 30);
//! assert!(points.max_norm() <= 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rng;
pub mod source;
pub mod types;

pub use types::{CloudError, PersistencePoint, Point2D, PointSet};
