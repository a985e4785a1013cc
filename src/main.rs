// ABOUTME: Main entry point for the xr-deck program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the deck and merge it into the final PDF (the default)
    Generate(GenerateArgs),

    /// Write each slide's standalone page document to a directory
    ExportHtml(ExportHtmlArgs),

    /// Merge already-rendered page PDFs from a directory
    Merge(MergeArgs),
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Path of the final PDF
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the intermediate per-slide files
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Path to the Chrome/Chromium binary
    #[arg(long)]
    browser_path: Option<String>,

    /// Per-page load timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[derive(Args)]
struct ExportHtmlArgs {
    /// Directory to write the page documents into
    #[arg(short, long, default_value = "deck_html")]
    output_dir: PathBuf,
}

#[derive(Args)]
struct MergeArgs {
    /// Directory containing the page PDFs
    #[arg(short, long)]
    input_dir: PathBuf,

    /// Path of the merged PDF
    #[arg(short, long, default_value = xr_deck::config::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Glob pattern for page files
    #[arg(long, default_value = "*.pdf")]
    pattern: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    {
        Commands::Generate(args) => run_generate(args),
        Commands::ExportHtml(args) => run_export_html(args),
        Commands::Merge(args) => run_merge(args),
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(args: GenerateArgs) -> xr_deck::Result<()> {
    println!("Executing generate command...");

    let mut config = xr_deck::Config::from_env();
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if let Some(dir) = args.scratch_dir {
        config.scratch_dir = dir;
    }
    if let Some(path) = args.browser_path {
        config.browser_path = Some(path);
    }
    if let Some(timeout) = args.timeout_ms {
        config.default_timeout_ms = timeout;
    }

    xr_deck::generate_deck(&config)?;
    Ok(())
}

fn run_export_html(args: ExportHtmlArgs) -> xr_deck::Result<()> {
    println!("Executing export-html command...");

    let slides = xr_deck::deck();
    let written = xr_deck::export_deck_html(&slides, &args.output_dir)?;

    println!(
        "Wrote {} page documents to {}",
        written.len(),
        args.output_dir.display()
    );
    Ok(())
}

fn run_merge(args: MergeArgs) -> xr_deck::Result<()> {
    println!("Executing merge command...");

    xr_deck::utils::validate_directory_exists(&args.input_dir)?;
    let files = xr_deck::find_page_files(&args.input_dir, &args.pattern)?;
    let pages = xr_deck::merge_page_files(&files, &args.output)?;

    println!("Merged {} pages into {}", pages, args.output.display());
    Ok(())
}
