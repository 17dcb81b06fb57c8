//! # Slider Host
//!
//! Presentation host for the persistence demo. The host owns everything the
//! figure builders deliberately know nothing about:
//!
//! - **Radius slider**: range `[0, 0.8]`, step `0.02`, snapping and marks
//! - **Handler registration**: a [`RadiusHandler`](host::RadiusHandler) is
//!   registered on a [`SliderHost`](host::SliderHost) and invoked per change
//! - **Configuration**: TOML file, `TDA_*` environment overrides, CLI flags
//! - **Export**: figures written as plotly JSON documents
//!
//! The point set is generated once at startup and lent to the handler by
//! reference; slider changes only rebuild figures.

pub mod config;
pub mod error;
pub mod host;
pub mod output;
pub mod slider;

/// Host version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{HostConfig, LogLevel};
    pub use crate::error::HostError;
    pub use crate::host::{FigureHandler, RadiusHandler, SliderHost};
    pub use crate::output::FigureWriter;
    pub use crate::slider::{RadiusSlider, SliderMark};
}
