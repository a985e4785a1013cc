// ABOUTME: Pipeline driver for the xr-deck application
// ABOUTME: Runs the bootstrap, render, merge, and cleanup stages in order

use crate::bootstrap;
use crate::config::Config;
use crate::errors::Result;
use crate::html;
use crate::pdf;
use crate::render;
use crate::slides::{self, Slide};
use crate::workspace::Workspace;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the whole pipeline: check the environment, render every deck slide to
/// a page file, merge the page files into the final PDF, and remove the
/// scratch directory. Cleanup happens regardless of how the middle stages
/// end; errors from them are reported after the scratch space is gone.
pub fn generate_deck(config: &Config) -> Result<PathBuf> {
    bootstrap::check_environment(config, &config.output_path)?;

    let slides = slides::deck();
    println!("Rendering {} slides...", slides.len());

    let workspace = Workspace::create(&config.scratch_dir)?;
    let outcome = render_and_merge(&slides, &workspace, config);
    workspace.cleanup();
    let page_count = outcome?;

    let size_mb = fs::metadata(&config.output_path)
        .map(|m| m.len() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0);
    println!(
        "Created {} ({} pages, {:.2} MB)",
        config.output_path.display(),
        page_count,
        size_mb
    );

    Ok(config.output_path.clone())
}

fn render_and_merge(slides: &[Slide], workspace: &Workspace, config: &Config) -> Result<usize> {
    let render_config = config.get_render_config(None, None, None);
    let page_files = render::rasterize_deck(slides, workspace, &render_config)?;

    println!("Merging {} page files...", page_files.len());
    pdf::merge_page_files(&page_files, &config.output_path)
}

/// Write every slide's standalone page document into a directory, without
/// touching a browser. Uses the same template as the PDF pipeline.
pub fn export_deck_html(slides: &[Slide], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(slides.len());
    for (idx, slide) in slides.iter().enumerate() {
        let document = html::page_document(&html::render_fragment(slide));
        let path = output_dir.join(format!("slide_{}.html", idx + 1));
        html::write_html_to_file(&document, &path)?;
        written.push(path);
    }
    info!("Wrote {} page documents to {:?}", written.len(), output_dir);
    Ok(written)
}
