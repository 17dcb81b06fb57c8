//! # Random Number Generation
//!
//! Seeded random number generation for point sampling.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator is built from an explicit seed;
//!   there is no process-wide generator
//! - **Efficiency**: Batch operations fill caller-owned `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use tda_core::rng::CloudRng;
//!
//! let mut rng = CloudRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let mut buffer = vec![0.0; 64];
//! rng.fill_uniform(&mut buffer);
//! ```

mod prng;

pub use prng::CloudRng;

#[cfg(test)]
mod tests;
