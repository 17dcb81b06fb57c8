//! Core types for the persistence demo.
//!
//! This module provides:
//! - [`Point2D`] and [`PointSet`]: the immutable sampled cloud
//! - [`PersistencePoint`]: a synthetic birth/death pair
//! - [`CloudError`]: the shared error type

pub mod error;
pub mod persistence;
pub mod point;

pub use error::CloudError;
pub use persistence::PersistencePoint;
pub use point::{Point2D, PointSet};
