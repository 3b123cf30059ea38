use crate::error::ListingError;
use crate::tree::Directory;
use crate::tree_renderer::{TreeRenderer, render_tree};
use crate::types::{DiskImage, Listing};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_INTRO: &str = "Directory listing recovered from the disk image.";

/// Directories go in before files, each in listing order.
#[must_use]
pub fn build_tree(name: &str, listing: &Listing) -> Directory {
    let mut root = Directory::new(name);
    for dir in &listing.directories {
        root.add_directory(dir);
    }
    for file in &listing.files {
        root.add_file(file);
    }
    root
}

/// Intro text, a blank line, then the rendered tree. An image with nothing
/// in it gets a note instead of a one-line tree.
#[must_use]
pub fn build_report(root: &Directory, renderer: &dyn TreeRenderer, intro: &str) -> String {
    let mut text = String::new();
    text.push_str(intro);
    text.push_str("\n\n");

    if root.is_empty() {
        text.push_str(&format!(
            "{} has no children. It may not be readable.",
            root.name()
        ));
    } else {
        text.push_str(&render_tree(renderer, root));
    }

    text
}

#[must_use]
pub fn report_path(image: &DiskImage) -> PathBuf {
    image.dir.join(format!("{}.txt", image.name))
}

/// Writes `<dir>/<name>.txt`, replacing any earlier report.
pub fn write_report(image: &DiskImage, text: &str) -> Result<PathBuf, ListingError> {
    let path = report_path(image);
    fs::write(&path, text).map_err(|source| ListingError::Report {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
