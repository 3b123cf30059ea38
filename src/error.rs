use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
    #[error("{tool} could not read {}:\n{output}", .image.display())]
    ToolReported {
        tool: String,
        image: PathBuf,
        output: String,
    },
    #[error("Failed to create scratch directory: {0}")]
    Scratch(#[source] io::Error),
    #[error("Failed to walk extracted files: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Failed to write report {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
