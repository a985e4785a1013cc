// ABOUTME: Browser rendering module for the xr-deck application
// ABOUTME: Prints each slide's page document to PDF using a headless browser

use crate::errors::{DeckError, Result};
use crate::html;
use crate::slides::Slide;
use crate::utils;
use crate::workspace::Workspace;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptionsBuilder};
use log::{info, warn};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

// A4 portrait, in inches, as handed to the print backend.
const PAPER_WIDTH_IN: f64 = 8.27;
const PAPER_HEIGHT_IN: f64 = 11.69;

/// Configuration for browser rendering
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub timeout_ms: u64,
    /// Fixed delay after network settle, for fonts and blur effects.
    pub settle_ms: u64,
    /// Upper bound on waiting for any single embedded image.
    pub image_timeout_ms: u64,
    /// Fixed delay after the image wait, before the page is exported.
    pub post_image_ms: u64,
    pub browser_path: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            timeout_ms: 30000, // 30 seconds
            settle_ms: 2000,
            image_timeout_ms: 3000,
            post_image_ms: 1000,
            browser_path: None,
        }
    }
}

/// Rasterize every slide to a single-page PDF file in the scratch workspace.
///
/// One browser session and one tab are reused for the whole deck; slides are
/// processed strictly in order. Navigation or export failures abort the run —
/// there is no per-slide retry. Returns the page files in slide order.
pub fn rasterize_deck(
    slides: &[Slide],
    workspace: &Workspace,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>> {
    let mut launch_options_builder = LaunchOptionsBuilder::default();

    launch_options_builder.window_size(Some((config.width, config.height)));
    launch_options_builder.headless(true);

    if let Some(browser_path) = &config.browser_path {
        launch_options_builder.path(Some(browser_path.into()));
    } else if let Ok(path) = env::var("BROWSER_PATH") {
        if !path.is_empty() {
            launch_options_builder.path(Some(path.into()));
        }
    }

    let launch_options = launch_options_builder
        .build()
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to build browser options: {:?}", e),
        })?;

    info!("Launching headless browser");
    let browser = Browser::new(launch_options).map_err(|e| DeckError::BrowserError {
        message: format!("Failed to launch browser: {}", e),
    })?;

    // The session is dropped (and the browser closed) on every exit path,
    // including early returns below.
    let tab = browser.new_tab().map_err(|e| DeckError::BrowserError {
        message: format!("Failed to create new tab: {}", e),
    })?;

    let start_time = Instant::now();
    let mut page_files = Vec::with_capacity(slides.len());

    for (idx, slide) in slides.iter().enumerate() {
        let ordinal = idx + 1;
        info!("Rendering slide {}/{}", ordinal, slides.len());

        let document = html::page_document(&html::render_fragment(slide));
        let html_path = workspace.html_path(ordinal);
        fs::write(&html_path, &document)?;

        let url = format!(
            "file://{}",
            utils::get_absolute_path(&html_path)?.to_string_lossy()
        );

        tab.navigate_to(&url).map_err(|e| DeckError::BrowserError {
            message: format!("Failed to navigate to slide {}: {}", ordinal, e),
        })?;
        tab.wait_until_navigated()
            .map_err(|e| DeckError::BrowserError {
                message: format!("Navigation failed for slide {}: {}", ordinal, e),
            })?;

        // Settling waits are bounded, not fatal: past the timeout we export
        // whatever has rendered.
        if let Err(e) = tab.wait_for_element_with_custom_timeout(
            "body",
            Duration::from_millis(config.timeout_ms),
        ) {
            warn!("Slide {}: body did not settle in time: {}", ordinal, e);
        }
        std::thread::sleep(Duration::from_millis(config.settle_ms));

        if let Err(e) = tab.evaluate(&image_settle_script(config.image_timeout_ms), true) {
            warn!("Slide {}: image wait failed: {}", ordinal, e);
        }
        std::thread::sleep(Duration::from_millis(config.post_image_ms));

        let pdf_bytes = tab
            .print_to_pdf(Some(print_options()))
            .map_err(|e| DeckError::BrowserError {
                message: format!("Failed to export slide {} to PDF: {}", ordinal, e),
            })?;

        let pdf_path = workspace.pdf_path(ordinal);
        fs::write(&pdf_path, &pdf_bytes)?;
        page_files.push(pdf_path);
    }

    let elapsed = start_time.elapsed();
    info!(
        "Rendering complete. Exported {} pages in {:.2} seconds",
        page_files.len(),
        elapsed.as_secs_f64()
    );

    Ok(page_files)
}

fn print_options() -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(false),
        display_header_footer: Some(false),
        print_background: Some(true),
        paper_width: Some(PAPER_WIDTH_IN),
        paper_height: Some(PAPER_HEIGHT_IN),
        margin_top: Some(0.0),
        margin_bottom: Some(0.0),
        margin_left: Some(0.0),
        margin_right: Some(0.0),
        prefer_css_page_size: Some(false),
        ..PrintToPdfOptions::default()
    }
}

/// A promise that resolves once every embedded image has either loaded or
/// errored, each bounded by `timeout_ms`. Errored images count as settled;
/// they hide themselves via their onerror handlers.
fn image_settle_script(timeout_ms: u64) -> String {
    format!(
        r#"(() => Promise.all(
    Array.from(document.images).map((img) => {{
        if (img.complete) return Promise.resolve();
        return new Promise((resolve) => {{
            img.onload = resolve;
            img.onerror = resolve;
            setTimeout(resolve, {timeout_ms});
        }});
    }})
))()"#
    )
}
