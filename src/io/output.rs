use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Destination for a generated artifact.
///
/// Mirrors the three endings the generator tasks use: print only, save only,
/// or save and print.
#[derive(Debug, Clone)]
pub enum ArtifactSink {
    Stdout,
    File(PathBuf),
    FileAndStdout(PathBuf),
}

impl ArtifactSink {
    /// Build a sink from CLI inputs: an optional output path and an echo flag.
    pub fn resolve(output: Option<PathBuf>, echo: bool) -> Self {
        match (output, echo) {
            (Some(path), true) => Self::FileAndStdout(path),
            (Some(path), false) => Self::File(path),
            (None, _) => Self::Stdout,
        }
    }

    /// Write the artifact.
    ///
    /// Called only after the pipeline has fully succeeded, so a refine-stage
    /// failure never leaves a partial file behind.
    pub fn write(&self, artifact: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                println!("{artifact}");
            }
            Self::File(path) => {
                write_file(path, artifact)?;
            }
            Self::FileAndStdout(path) => {
                println!("{artifact}");
                write_file(path, artifact)?;
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, artifact: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }
    }
    std::fs::write(path, artifact).with_context(|| format!("Failed to write file: {path:?}"))?;
    info!("Artifact written to {:?}", path);
    Ok(())
}
