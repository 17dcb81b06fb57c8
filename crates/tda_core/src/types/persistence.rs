//! Synthetic birth/death pairs.

use serde::{Deserialize, Serialize};

/// A `(birth, death)` pair shown on the persistence diagram.
///
/// The pairs are produced by a closed-form toy formula rather than a
/// filtration, see `tda_figures::persistence`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistencePoint {
    /// Radius at which the feature appears.
    pub birth: f64,
    /// Radius at which the feature disappears.
    pub death: f64,
}

impl PersistencePoint {
    /// Create a new pair.
    #[inline]
    pub fn new(birth: f64, death: f64) -> Self {
        Self { birth, death }
    }

    /// Whether the feature is still alive at `radius`.
    #[inline]
    pub fn is_alive_at(&self, radius: f64) -> bool {
        self.death > radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alive_is_strict() {
        let p = PersistencePoint::new(0.0, 0.4);
        assert!(p.is_alive_at(0.39));
        assert!(!p.is_alive_at(0.4));
        assert!(!p.is_alive_at(0.5));
    }
}
