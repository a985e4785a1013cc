// ABOUTME: Error types for the xr-deck application
// ABOUTME: Provides structured error handling for each stage of the pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Browser not found. Make sure Chrome/Chromium is installed or set BROWSER_PATH.")]
    BrowserNotFound,

    #[error("Headless browser error: {message}")]
    BrowserError { message: String },

    #[error("PDF merge error: {0}")]
    PdfError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl From<anyhow::Error> for DeckError {
    fn from(err: anyhow::Error) -> Self {
        DeckError::UnknownError(err.to_string())
    }
}

impl From<lopdf::Error> for DeckError {
    fn from(err: lopdf::Error) -> Self {
        DeckError::PdfError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
