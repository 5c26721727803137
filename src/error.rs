//! Error types for the console layer

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or driving the console
#[derive(Debug, Error)]
pub enum RenderError {
    /// The battle template could not be read. Fatal at startup.
    #[error("failed to load battle template from {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file exists but could not be read or parsed
    #[error("invalid console config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The display surface failed
    #[error("display I/O error: {0}")]
    Io(#[from] io::Error),
}
