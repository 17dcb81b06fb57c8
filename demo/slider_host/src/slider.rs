//! Radius slider model.
//!
//! The slider is the host's half of the input contract: whatever raw value
//! a control reports is clamped into `[min, max]` and snapped to the nearest
//! step before it reaches the figure builders.

use tda_core::CloudError;

/// Lower bound of the demo slider.
pub const RADIUS_MIN: f64 = 0.0;
/// Upper bound of the demo slider.
pub const RADIUS_MAX: f64 = 0.8;
/// Step of the demo slider.
pub const RADIUS_STEP: f64 = 0.02;
/// Spacing of labelled marks.
pub const MARK_INTERVAL: f64 = 0.1;

const GRID_TOLERANCE: f64 = 1e-9;

/// A labelled tick on the slider track.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderMark {
    /// Position on the track
    pub value: f64,
    /// Label text, one decimal place
    pub label: String,
}

/// Bounded, stepped radius control.
#[derive(Debug, Clone, PartialEq)]
pub struct RadiusSlider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl Default for RadiusSlider {
    fn default() -> Self {
        Self {
            min: RADIUS_MIN,
            max: RADIUS_MAX,
            step: RADIUS_STEP,
            value: RADIUS_MIN,
        }
    }
}

impl RadiusSlider {
    /// Create a slider starting at `min`.
    ///
    /// # Errors
    ///
    /// Returns `CloudError` if any bound is not finite, `min` is negative,
    /// `max <= min`, `step <= 0` or `step` does not divide `max - min`.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, CloudError> {
        if !min.is_finite() {
            return Err(CloudError::NonFinite { name: "min" });
        }
        if !max.is_finite() {
            return Err(CloudError::NonFinite { name: "max" });
        }
        if !step.is_finite() {
            return Err(CloudError::NonFinite { name: "step" });
        }
        if min < 0.0 {
            return Err(CloudError::invalid("min", "radius cannot be negative"));
        }
        if max <= min {
            return Err(CloudError::invalid(
                "max",
                format!("must exceed min ({}), got {}", min, max),
            ));
        }
        if step <= 0.0 {
            return Err(CloudError::invalid("step", "must be positive"));
        }
        let intervals = (max - min) / step;
        if (intervals - intervals.round()).abs() > GRID_TOLERANCE * intervals.max(1.0) {
            return Err(CloudError::invalid(
                "step",
                format!("must divide max - min ({}), got {}", max - min, step),
            ));
        }
        Ok(Self {
            min,
            max,
            step,
            value: min,
        })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    fn position_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    fn position(&self, index: usize) -> f64 {
        (self.min + index as f64 * self.step).min(self.max)
    }

    /// Clamp `raw` into range and round it to the nearest step.
    ///
    /// # Errors
    ///
    /// Returns `CloudError::NonFinite` for NaN or infinite input.
    pub fn snap(&self, raw: f64) -> Result<f64, CloudError> {
        if !raw.is_finite() {
            return Err(CloudError::NonFinite { name: "radius" });
        }
        let clamped = raw.clamp(self.min, self.max);
        let index = ((clamped - self.min) / self.step).round() as usize;
        Ok(self.position(index.min(self.position_count() - 1)))
    }

    /// Snap `raw` and make it the current value.
    pub fn set(&mut self, raw: f64) -> Result<f64, CloudError> {
        self.value = self.snap(raw)?;
        Ok(self.value)
    }

    /// Every value the slider can take, ascending.
    pub fn positions(&self) -> Vec<f64> {
        (0..self.position_count()).map(|i| self.position(i)).collect()
    }

    /// Labelled marks every [`MARK_INTERVAL`] from `min` to `max`.
    pub fn marks(&self) -> Vec<SliderMark> {
        let count = ((self.max - self.min) / MARK_INTERVAL + 1e-9).floor() as usize + 1;
        (0..count)
            .map(|i| {
                let value = self.min + i as f64 * MARK_INTERVAL;
                SliderMark {
                    value,
                    label: format!("{:.1}", value),
                }
            })
            .collect()
    }
}
