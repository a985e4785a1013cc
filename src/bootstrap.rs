// ABOUTME: Environment bootstrap module for the xr-deck application
// ABOUTME: Verifies the external collaborators before any rendering starts

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::utils;
use headless_chrome::browser::default_executable;
use log::info;
use std::path::{Path, PathBuf};

/// Check the run's external requirements up front: a usable browser binary
/// and a writable output location. Any failure here is fatal and reported
/// before a single slide is rendered.
pub fn check_environment(config: &Config, output_file: &Path) -> Result<PathBuf> {
    let browser = locate_browser(config)?;
    info!("Using browser at {:?}", browser);

    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            utils::validate_directory_writable(parent)?;
        }
    }

    Ok(browser)
}

/// Resolve the browser executable: an explicit configuration wins, otherwise
/// the system default install locations are searched. The PDF backend is a
/// library linked at build time, so the browser is the only collaborator
/// that can be missing at run time.
pub fn locate_browser(config: &Config) -> Result<PathBuf> {
    if let Some(path) = &config.browser_path {
        let path = PathBuf::from(path);
        utils::validate_file_exists(&path)?;
        return Ok(path);
    }

    default_executable().map_err(|_| DeckError::BrowserNotFound)
}
