//! Slider Host CLI
//!
//! Generates the point set once, then renders figures for one radius, for
//! every slider position, or prints the underlying data.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use slider_host::config::{build_config, CliOverrides, ConfigError, LogLevel};
use slider_host::prelude::*;
use tda_core::source::PointSource;
use tda_figures::persistence_points;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive persistence demo host - renders plotly figures per radius
#[derive(Parser, Debug)]
#[command(name = "slider-host")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Number of sampled points
    #[arg(long, global = true)]
    points: Option<usize>,

    /// Radius of the sampling disk
    #[arg(long, global = true)]
    radius_limit: Option<f64>,

    /// Generator seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory figures are written to
    #[arg(short, long, value_name = "DIR", global = true)]
    output_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write both figures for one slider value
    Render {
        /// Raw slider value; snapped to the slider grid
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        radius: f64,
    },
    /// Write both figures for every slider position
    Sweep,
    /// Print the sampled point set as JSON
    Points,
    /// Print the surviving persistence pairs as JSON
    Diagram {
        /// Raw slider value; snapped to the slider grid
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        radius: f64,
    },
}

impl Args {
    fn overrides(&self) -> Result<CliOverrides, ConfigError> {
        Ok(CliOverrides {
            config_file: self.config.clone(),
            points: self.points,
            radius_limit: self.radius_limit,
            seed: self.seed,
            output_dir: self.output_dir.clone(),
            log_level: self.log_level.as_deref().map(LogLevel::from_str).transpose()?,
        })
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(args: &Args) -> Result<HostConfig, HostError> {
    Ok(build_config(&args.overrides()?)?)
}

fn run<W: Write>(command: Command, config: &HostConfig, out: &mut W) -> Result<(), HostError> {
    let points = PointSource::generate(config.points, config.radius_limit, config.seed)?;
    tracing::info!(count = points.len(), max_norm = points.max_norm(), "Point set generated");

    let writer = FigureWriter::new(config.output_dir.clone());
    let mut host = SliderHost::register(RadiusSlider::default(), FigureHandler::new(&points));

    match command {
        Command::Render { radius } => {
            let (radius, figures) = host.dispatch(radius)?;
            let written = writer.write_pair(&figures)?;
            tracing::info!(radius, files = written.len(), "Render complete");
        }
        Command::Sweep => {
            let sweep = host.sweep()?;
            let written = writer.write_sweep(&sweep)?;
            tracing::info!(
                positions = sweep.len(),
                files = written.len(),
                "Sweep complete"
            );
        }
        Command::Points => {
            serde_json::to_writer_pretty(&mut *out, &points)?;
            writeln!(out)?;
        }
        Command::Diagram { radius } => {
            let radius = host.slider().snap(radius)?;
            let survivors = persistence_points(radius)?;
            serde_json::to_writer_pretty(&mut *out, &survivors)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Slider Host v{}", slider_host::VERSION);
    tracing::info!(
        points = config.points,
        radius_limit = config.radius_limit,
        seed = config.seed,
        output_dir = %config.output_dir.display(),
        log_level = %config.log_level,
        "Host configuration loaded"
    );

    run(args.command, &config, &mut std::io::stdout().lock())?;
    Ok(())
}
