use std::path::PathBuf;

use texmix_core::{TransformError, UnknownTransform};

use crate::image_loader::ImageLoadError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error(transparent)]
    Image(#[from] ImageLoadError),
    #[error(transparent)]
    UnknownTransform(#[from] UnknownTransform),
    #[error("no file selected for {0}")]
    MissingInput(String),
    #[error("{transform} takes {expected} input path(s), got {found}")]
    ArgumentCount {
        transform: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("output path {} is a directory", .0.display())]
    OutputIsDirectory(PathBuf),
    #[error("cannot create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file dialogs are not available in this build (enable the `dialog` feature)")]
    DialogUnavailable,
    #[error("failed to serialize catalog: {0}")]
    Json(#[from] serde_json::Error),
}
