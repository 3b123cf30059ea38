//! Fallback for HFS images, which fls can't read: extract everything with
//! HFSExplorer's `unhfs` into a scratch directory and list what came out.

use crate::error::ListingError;
use crate::scanner;
use crate::types::Listing;
use log::{debug, warn};
use std::path::Path;
use std::process::Command;

pub const DEFAULT_UNHFS: &str = "/usr/share/hfsexplorer/bin/unhfs";

/// The scratch directory is removed when this returns, whether or not the
/// extraction succeeded.
pub fn list_image(unhfs: &str, image: &Path) -> Result<Listing, ListingError> {
    let scratch = tempfile::Builder::new()
        .prefix("img_tree")
        .tempdir()
        .map_err(ListingError::Scratch)?;

    debug!(
        "Extracting {} into {}",
        image.display(),
        scratch.path().display()
    );
    let status = Command::new(unhfs)
        .arg("-o")
        .arg(scratch.path())
        .arg(image)
        .status()
        .map_err(|source| ListingError::Spawn {
            tool: unhfs.to_string(),
            source,
        })?;

    if !status.success() {
        // A partial extraction is still worth listing
        warn!("{unhfs} exited with {status} for {}", image.display());
    }

    scanner::scan_extracted(scratch.path())
}
