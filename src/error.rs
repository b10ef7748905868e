// src/error.rs
//! Unified error types for storage and export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a storage backend or by value (de)serialization.
///
/// These never escape [`crate::store::Persistence`]: reads fall back to the
/// caller's default and writes are best-effort, both with a logged warning.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The export pipeline stage a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStage {
    Rendering,
    Rasterizing,
    Assembling,
    Writing,
}

impl std::fmt::Display for ExportStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExportStage::Rendering => "rendering",
            ExportStage::Rasterizing => "rasterizing",
            ExportStage::Assembling => "assembling",
            ExportStage::Writing => "writing",
        };
        f.write_str(name)
    }
}

/// The main error enum for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("render error: {0}")]
    Render(String),
    #[error("rasterization error: {0}")]
    Raster(String),
    #[error("PDF assembly error: {0}")]
    Pdf(String),
    #[error("image processing error: {0}")]
    Image(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot write artifact to {path}: {message}")]
    Artifact { path: PathBuf, message: String },
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Image(e.to_string())
    }
}

/// Errors raised while editing the draft document.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("cannot read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported or corrupt image: {0}")]
    Image(String),
}

/// Top-level error for the binary.
#[derive(Error, Debug)]
pub enum VitaeError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
