// ABOUTME: Scratch workspace module for the xr-deck application
// ABOUTME: Manages the temporary directory holding per-slide HTML and PDF files

use crate::errors::Result;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// The scratch directory for one run. Created fresh (a stale directory from
/// an earlier run is removed first) and holding one markup file and one page
/// file per slide.
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Create the scratch directory, replacing any stale one.
    pub fn create(root: &Path) -> Result<Self> {
        if root.exists() {
            fs::remove_dir_all(root)?;
        }
        fs::create_dir_all(root)?;
        info!("Created scratch workspace at {:?}", root);
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the page document for the slide at the given 1-based ordinal.
    pub fn html_path(&self, ordinal: usize) -> PathBuf {
        self.root.join(format!("slide_{}.html", ordinal))
    }

    /// Path of the page file for the slide at the given 1-based ordinal.
    pub fn pdf_path(&self, ordinal: usize) -> PathBuf {
        self.root.join(format!("slide_{}.pdf", ordinal))
    }

    /// Remove the scratch files and then the directory itself. Best-effort:
    /// failures are logged at debug level and never escalated.
    pub fn cleanup(self) {
        if let Ok(entries) = fs::read_dir(&self.root) {
            for entry in entries.flatten() {
                if let Err(e) = fs::remove_file(entry.path()) {
                    debug!("Failed to remove scratch file {:?}: {}", entry.path(), e);
                }
            }
        }
        if let Err(e) = fs::remove_dir(&self.root) {
            debug!("Failed to remove scratch directory {:?}: {}", self.root, e);
        }
    }
}
