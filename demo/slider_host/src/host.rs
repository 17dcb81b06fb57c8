//! Handler registration and dispatch.
//!
//! A [`SliderHost`] owns the [`RadiusSlider`] and exactly one registered
//! [`RadiusHandler`]. Each [`SliderHost::dispatch`] snaps the raw control
//! value, records it and synchronously invokes the handler; the last call
//! wins and no work overlaps.

use tda_core::{CloudError, PointSet};
use tda_figures::{build_figures, FigurePair};

use crate::slider::RadiusSlider;

/// Callback invoked on every radius change.
pub trait RadiusHandler {
    /// Produce both figures for `radius`.
    fn on_radius_change(&mut self, radius: f64) -> Result<FigurePair, CloudError>;
}

impl<F> RadiusHandler for F
where
    F: FnMut(f64) -> Result<FigurePair, CloudError>,
{
    fn on_radius_change(&mut self, radius: f64) -> Result<FigurePair, CloudError> {
        self(radius)
    }
}

/// Standard handler: rebuilds both figures from a borrowed point set.
#[derive(Debug, Clone)]
pub struct FigureHandler<'a> {
    points: &'a PointSet,
}

impl<'a> FigureHandler<'a> {
    /// Create a handler over `points`.
    pub fn new(points: &'a PointSet) -> Self {
        Self { points }
    }
}

impl RadiusHandler for FigureHandler<'_> {
    fn on_radius_change(&mut self, radius: f64) -> Result<FigurePair, CloudError> {
        build_figures(self.points, radius)
    }
}

/// Slider plus its registered handler.
#[derive(Debug)]
pub struct SliderHost<H> {
    slider: RadiusSlider,
    handler: H,
    dispatched: u64,
}

impl<H: RadiusHandler> SliderHost<H> {
    /// Register `handler` on `slider`.
    pub fn register(slider: RadiusSlider, handler: H) -> Self {
        Self {
            slider,
            handler,
            dispatched: 0,
        }
    }

    /// The slider.
    pub fn slider(&self) -> &RadiusSlider {
        &self.slider
    }

    /// Number of successful dispatches.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Handle one raw slider event.
    ///
    /// Returns the snapped radius and the figures built for it. A rejected
    /// value leaves the slider unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CloudError` if `raw` is not finite or the handler fails.
    pub fn dispatch(&mut self, raw: f64) -> Result<(f64, FigurePair), CloudError> {
        let radius = self.slider.set(raw)?;
        tracing::debug!(raw, radius, "Dispatching radius change");
        let figures = self.handler.on_radius_change(radius)?;
        self.dispatched += 1;
        Ok((radius, figures))
    }

    /// Render the slider's current value, e.g. on first page load.
    pub fn render_current(&mut self) -> Result<(f64, FigurePair), CloudError> {
        let value = self.slider.value();
        self.dispatch(value)
    }

    /// Dispatch every slider position in ascending order.
    pub fn sweep(&mut self) -> Result<Vec<(f64, FigurePair)>, CloudError> {
        self.slider
            .positions()
            .into_iter()
            .map(|radius| self.dispatch(radius))
            .collect()
    }
}
