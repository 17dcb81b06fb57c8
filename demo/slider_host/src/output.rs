//! Figure export.
//!
//! Writes figures as pretty-printed plotly JSON documents. Layout on disk:
//!
//! ```text
//! <output_dir>/point_cloud.json
//! <output_dir>/persistence_diagram.json
//! <output_dir>/radius_0.00/...        (sweep)
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tda_figures::FigurePair;

use crate::error::HostError;

/// File name of the point cloud figure.
pub const POINT_CLOUD_FILE: &str = "point_cloud.json";
/// File name of the persistence diagram figure.
pub const PERSISTENCE_DIAGRAM_FILE: &str = "persistence_diagram.json";

/// Writes figures below a root directory.
#[derive(Debug, Clone)]
pub struct FigureWriter {
    root: PathBuf,
}

impl FigureWriter {
    /// Create a writer rooted at `root`; the directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory name used for one sweep position.
    pub fn sweep_dir_name(radius: f64) -> String {
        format!("radius_{:.2}", radius)
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), HostError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::info!(path = %path.display(), "Wrote figure");
        Ok(())
    }

    fn write_pair_into(dir: &Path, figures: &FigurePair) -> Result<Vec<PathBuf>, HostError> {
        fs::create_dir_all(dir)?;
        let cloud = dir.join(POINT_CLOUD_FILE);
        let diagram = dir.join(PERSISTENCE_DIAGRAM_FILE);
        Self::write_json(&cloud, &figures.point_cloud)?;
        Self::write_json(&diagram, &figures.persistence_diagram)?;
        Ok(vec![cloud, diagram])
    }

    /// Write both figures directly into the root directory.
    pub fn write_pair(&self, figures: &FigurePair) -> Result<Vec<PathBuf>, HostError> {
        Self::write_pair_into(&self.root, figures)
    }

    /// Write one `radius_{r:.2}` subdirectory per sweep entry.
    pub fn write_sweep(&self, sweep: &[(f64, FigurePair)]) -> Result<Vec<PathBuf>, HostError> {
        let mut written = Vec::with_capacity(sweep.len() * 2);
        for (radius, figures) in sweep {
            let dir = self.root.join(Self::sweep_dir_name(*radius));
            written.extend(Self::write_pair_into(&dir, figures)?);
        }
        Ok(written)
    }
}
