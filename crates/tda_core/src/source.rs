//! Area-uniform sampling of points inside a disk.
//!
//! A [`PointSource`] describes how to sample a cloud; [`PointSource::sample`]
//! produces the [`PointSet`]. Sampling is deterministic in the seed.
//!
//! # Algorithm
//!
//! For each point two uniforms `u, v` in `[0, 1)` are drawn and mapped to
//!
//! ```text
//! r     = radius_limit * sqrt(u)
//! theta = 2 * pi * v
//! ```
//!
//! The square root makes the density uniform in area; `r = radius_limit * u`
//! would crowd points towards the centre.

use std::f64::consts::TAU;

use crate::rng::CloudRng;
use crate::types::error::ensure_positive;
use crate::types::point::SampleOrigin;
use crate::types::{CloudError, Point2D, PointSet};

/// Default number of sampled points.
pub const DEFAULT_POINT_COUNT: usize = 30;

/// Default radius of the sampling disk.
pub const DEFAULT_RADIUS_LIMIT: f64 = 1.0;

/// Default generator seed.
pub const DEFAULT_SEED: u64 = 0;

/// Validated sampling parameters.
///
/// # Examples
///
/// ```rust
/// use tda_core::source::PointSource;
///
/// let source = PointSource::new(100, 0.5, 42).expect("valid parameters");
/// let points = source.sample();
/// assert_eq!(points.len(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSource {
    count: usize,
    radius_limit: f64,
    seed: u64,
}

impl Default for PointSource {
    fn default() -> Self {
        Self {
            count: DEFAULT_POINT_COUNT,
            radius_limit: DEFAULT_RADIUS_LIMIT,
            seed: DEFAULT_SEED,
        }
    }
}

impl PointSource {
    /// Creates a source after validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns `CloudError` if:
    /// - `count` is 0
    /// - `radius_limit` is not a finite positive number
    pub fn new(count: usize, radius_limit: f64, seed: u64) -> Result<Self, CloudError> {
        if count == 0 {
            return Err(CloudError::invalid("count", "must be greater than 0"));
        }
        let radius_limit = ensure_positive("radius_limit", radius_limit)?;
        Ok(Self {
            count,
            radius_limit,
            seed,
        })
    }

    /// Validates the parameters and samples in one step.
    ///
    /// # Errors
    ///
    /// Same as [`PointSource::new`].
    pub fn generate(count: usize, radius_limit: f64, seed: u64) -> Result<PointSet, CloudError> {
        Ok(Self::new(count, radius_limit, seed)?.sample())
    }

    /// Number of points to sample.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Radius of the sampling disk.
    #[inline]
    pub fn radius_limit(&self) -> f64 {
        self.radius_limit
    }

    /// Generator seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Samples the point set.
    ///
    /// Each call starts a fresh generator from the seed, so repeated calls
    /// return identical sets.
    pub fn sample(&self) -> PointSet {
        let mut rng = CloudRng::from_seed(self.seed);
        let points = (0..self.count)
            .map(|_| {
                let u = rng.gen_uniform();
                let v = rng.gen_uniform();
                Point2D::from_polar(self.radius_limit * u.sqrt(), TAU * v)
            })
            .collect();

        PointSet::sampled(
            points,
            SampleOrigin {
                seed: self.seed,
                radius_limit: self.radius_limit,
            },
        )
    }
}
