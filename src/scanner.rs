use crate::error::ListingError;
use crate::types::{DiskImage, Listing};
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Every subfolder `N` of `images_dir` is one image, expected at `N/N.img`
/// or, failing that, `N/data/N.img`.
pub fn find_images(images_dir: &Path) -> Result<Vec<DiskImage>, walkdir::Error> {
    let mut images = Vec::new();

    for entry in WalkDir::new(images_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            debug!("Skipping non-directory {}", entry.path().display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let dir = entry.path().to_path_buf();
        let file_name = format!("{name}.img");

        // Folders that don't follow the standard layout keep the image in "data"
        let mut image_path = dir.join(&file_name);
        if !image_path.is_file() {
            let fallback = dir.join("data").join(&file_name);
            if fallback.is_file() {
                image_path = fallback;
            }
        }

        images.push(DiskImage {
            name,
            dir,
            image_path,
        });
    }

    Ok(images)
}

/// Lists everything below `root` as `/`-separated paths relative to it.
/// Parents always come before their children.
pub fn scan_extracted(root: &Path) -> Result<Listing, ListingError> {
    let mut listing = Listing::default();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if entry.file_type().is_dir() {
            listing.directories.push(path);
        } else if entry.file_type().is_file() {
            listing.files.push(path);
        }
    }

    debug!(
        "Scanned {}: {} directories, {} files",
        root.display(),
        listing.directories.len(),
        listing.files.len()
    );
    Ok(listing)
}

#[must_use]
pub fn image_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path).ok().filter(std::fs::Metadata::is_file).map(|m| m.len())
}
