use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// What happened to one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WriteOutcome {
    Written,
    Overwritten,
    /// The file exists and overwrite is off.
    Skipped,
    /// Dry run; nothing touched the disk.
    Planned,
}

/// An artifact path (relative to the output root) and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Writes generated files under one output root.
///
/// Existing files are left alone unless `overwrite` is set. In dry-run mode
/// every call is recorded as [`WriteOutcome::Planned`] and nothing is written.
#[derive(Debug)]
pub struct ArtifactWriter {
    root: PathBuf,
    overwrite: bool,
    dry_run: bool,
    artifacts: Vec<Artifact>,
}

impl ArtifactWriter {
    pub fn new(root: impl Into<PathBuf>, overwrite: bool, dry_run: bool) -> Self {
        ArtifactWriter {
            root: root.into(),
            overwrite,
            dry_run,
            artifacts: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }

    /// Write `contents` to `relative` under the output root.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn write(&mut self, relative: impl AsRef<Path>, contents: &str) -> anyhow::Result<WriteOutcome> {
        let relative = relative.as_ref();
        let path = self.root.join(relative);
        let exists = path.exists();

        let outcome = if self.dry_run {
            WriteOutcome::Planned
        } else if exists && !self.overwrite {
            info!(path = %path.display(), "skipping existing file (use --force to overwrite)");
            WriteOutcome::Skipped
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
            info!(path = %path.display(), "generated");
            if exists {
                WriteOutcome::Overwritten
            } else {
                WriteOutcome::Written
            }
        };

        self.artifacts.push(Artifact {
            path: relative.to_path_buf(),
            outcome,
        });
        Ok(outcome)
    }
}
