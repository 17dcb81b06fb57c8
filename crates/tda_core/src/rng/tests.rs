//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility
//! - Uniform range `[0, 1)`
//! - Batch and single generation agree
//! - Rough uniformity of the sample mean

use super::*;

#[test]
fn test_seed_is_recorded() {
    let rng = CloudRng::from_seed(42);
    assert_eq!(rng.seed(), 42);
}

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = CloudRng::from_seed(12345);
    let mut rng2 = CloudRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = CloudRng::from_seed(1);
    let mut rng2 = CloudRng::from_seed(2);

    let a: Vec<f64> = (0..16).map(|_| rng1.gen_uniform()).collect();
    let b: Vec<f64> = (0..16).map(|_| rng2.gen_uniform()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_uniform_range() {
    let mut rng = CloudRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_fill_matches_single_draws() {
    let mut batch_rng = CloudRng::from_seed(99);
    let mut single_rng = CloudRng::from_seed(99);

    let mut buffer = vec![0.0; 32];
    batch_rng.fill_uniform(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single_rng.gen_uniform());
    }
}

#[test]
fn test_fill_empty_buffer() {
    let mut rng = CloudRng::from_seed(0);
    let mut buffer: Vec<f64> = Vec::new();
    rng.fill_uniform(&mut buffer);
    assert!(buffer.is_empty());
}

#[test]
fn test_uniform_mean() {
    let mut rng = CloudRng::from_seed(2024);
    let mut buffer = vec![0.0; 100_000];
    rng.fill_uniform(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / buffer.len() as f64;
    assert!((mean - 0.5).abs() < 0.01, "Sample mean {} too far from 0.5", mean);
}
