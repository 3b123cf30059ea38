use std::fmt;
use std::path::PathBuf;

/// One disk image found under the images directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskImage {
    /// Name of the image folder, also used as the tree root name.
    pub name: String,
    /// Folder holding the image; the report is written here.
    pub dir: PathBuf,
    /// The `.img` file itself.
    pub image_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Fls,
    Hfs,
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::Fls => write!(f, "fls"),
            ListingSource::Hfs => write!(f, "hfs"),
        }
    }
}

/// Relative `/`-separated paths produced by a listing tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageStatus {
    Written(PathBuf),
    Empty(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ImageSummary {
    pub name: String,
    pub source: Option<ListingSource>,
    pub directories: usize,
    pub files: usize,
    pub image_size: Option<u64>,
    pub status: ImageStatus,
}
