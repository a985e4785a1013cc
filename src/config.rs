// ABOUTME: Configuration module for the xr-deck application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::render::RenderConfig;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "XR_Concert_Presentation.pdf";
pub const DEFAULT_SCRATCH_DIR: &str = "temp_pdf_parts";

/// Global configuration for the application
pub struct Config {
    pub browser_path: Option<String>,
    pub output_path: PathBuf,
    pub scratch_dir: PathBuf,
    pub default_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            browser_path: env::var("BROWSER_PATH").ok().filter(|s| !s.is_empty()),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            scratch_dir: PathBuf::from(DEFAULT_SCRATCH_DIR),
            default_timeout_ms: 30000, // 30 seconds
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default_timeout_ms = env::var("DEFAULT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30000);

        Self {
            default_timeout_ms,
            ..Self::default()
        }
    }

    /// Get a render configuration with defaults from this config
    pub fn get_render_config(
        &self,
        width: Option<u32>,
        height: Option<u32>,
        timeout_ms: Option<u64>,
    ) -> RenderConfig {
        RenderConfig {
            width: width.unwrap_or(1920),
            height: height.unwrap_or(1080),
            timeout_ms: timeout_ms.unwrap_or(self.default_timeout_ms),
            browser_path: self.browser_path.clone(),
            ..RenderConfig::default()
        }
    }
}
