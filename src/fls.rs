//! Listings from The Sleuth Kit's `fls`.
//!
//! `fls -Dpur` prints one directory per line and `fls -Fpur` one file per
//! line, each as `<type> <inode>:\t<path>`.

use crate::error::ListingError;
use crate::types::Listing;
use log::debug;
use std::path::Path;
use std::process::Command;

/// Marks fls' virtual directories such as `$OrphanFiles`.
const VIRTUAL_DIR_MARKER: &str = "V/V";
/// Marks fls' virtual files such as `$MBR`.
const VIRTUAL_FILE_MARKER: &str = "v/v";

/// Runs fls against `image`. An empty directory listing means fls did not
/// recognise the filesystem, in which case `None` is returned and the file
/// listing is skipped.
///
/// Only the directory listing is checked for fls errors: by the time the
/// files are listed the image is known to be readable, and a file path may
/// itself contain "Error".
pub fn list_image(fls: &str, image: &Path) -> Result<Option<Listing>, ListingError> {
    let dir_output = run_fls(fls, "-Dpur", image)?;
    check_output(fls, image, &dir_output)?;
    if dir_output.is_empty() {
        debug!("fls returned nothing for {}", image.display());
        return Ok(None);
    }

    let directories = parse_listing(&dir_output, VIRTUAL_DIR_MARKER);
    let file_output = run_fls(fls, "-Fpur", image)?;
    let files = parse_listing(&file_output, VIRTUAL_FILE_MARKER);

    Ok(Some(Listing { directories, files }))
}

fn run_fls(fls: &str, flags: &str, image: &Path) -> Result<String, ListingError> {
    debug!("Running {fls} {flags} {}", image.display());
    let output = Command::new(fls)
        .arg(flags)
        .arg(image)
        .output()
        .map_err(|source| ListingError::Spawn {
            tool: fls.to_string(),
            source,
        })?;

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// fls reports unreadable images on stdout rather than through its exit code.
fn check_output(tool: &str, image: &Path, output: &str) -> Result<(), ListingError> {
    if output.contains("Error") {
        return Err(ListingError::ToolReported {
            tool: tool.to_string(),
            image: image.to_path_buf(),
            output: output.to_string(),
        });
    }
    Ok(())
}

/// Extracts the path from each non-blank line, skipping lines that contain
/// `virtual_marker`.
#[must_use]
pub fn parse_listing(output: &str, virtual_marker: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.contains(virtual_marker))
        .filter_map(|line| line.split_once(':'))
        .map(|(_, path)| path.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::fake_tool;

    const DIR_OUTPUT: &str = "d/d 3:\tDOCS\n\
                              d/d 5:\tDOCS/2024\n\
                              V/V 8:\t$OrphanFiles\n\
                              \n";

    const FILE_OUTPUT: &str = "r/r 4:\tREADME.TXT\n\
                               r/r 6:\tDOCS/NOTES.TXT\n\
                               v/v 7:\t$MBR\n\
                               v/v 9:\t$FAT1\n";

    #[test]
    fn test_parse_directories_skips_virtual() {
        assert_eq!(
            parse_listing(DIR_OUTPUT, VIRTUAL_DIR_MARKER),
            vec!["DOCS", "DOCS/2024"]
        );
    }

    #[test]
    fn test_parse_files_skips_virtual() {
        assert_eq!(
            parse_listing(FILE_OUTPUT, VIRTUAL_FILE_MARKER),
            vec!["README.TXT", "DOCS/NOTES.TXT"]
        );
    }

    #[test]
    fn test_parse_keeps_colons_in_path() {
        assert_eq!(
            parse_listing("r/r 12:\tnotes: draft.txt\n", VIRTUAL_FILE_MARKER),
            vec!["notes: draft.txt"]
        );
    }

    #[test]
    fn test_parse_ignores_lines_without_colon_and_blank_lines() {
        assert!(parse_listing("   \n\ngarbage\n", VIRTUAL_FILE_MARKER).is_empty());
    }

    #[test]
    fn test_check_output_detects_error() {
        let image = Path::new("/images/bad/bad.img");
        let err = check_output("fls", image, "Cannot determine file system type\nError opening image\n")
            .unwrap_err();
        assert!(matches!(err, ListingError::ToolReported { .. }));
        assert!(err.to_string().contains("/images/bad/bad.img"));

        assert!(check_output("fls", image, "d/d 3:\tDOCS\n").is_ok());
    }

    #[test]
    fn test_missing_tool_is_spawn_error() {
        let err = list_image("/nonexistent/bin/fls", Path::new("x.img")).unwrap_err();
        assert!(matches!(err, ListingError::Spawn { .. }));
    }

    #[test]
    fn test_list_image_reads_directories_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let fls = fake_tool(
            tmp.path(),
            "fls",
            r#"case "$1" in
  -Dpur) printf 'd/d 3:\tDOCS\nV/V 8:\t$OrphanFiles\n' ;;
  -Fpur) printf 'r/r 4:\tREADME.TXT\nr/r 6:\tDOCS/NOTES.TXT\nv/v 7:\t$MBR\n' ;;
esac"#,
        );

        let listing = list_image(fls.to_str().unwrap(), Path::new("floppy1.img"))
            .unwrap()
            .unwrap();
        assert_eq!(listing.directories, vec!["DOCS"]);
        assert_eq!(listing.files, vec!["README.TXT", "DOCS/NOTES.TXT"]);
    }

    #[test]
    fn test_list_image_file_named_error_is_not_a_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let fls = fake_tool(
            tmp.path(),
            "fls",
            r#"case "$1" in
  -Dpur) printf 'd/d 3:\tDOCS\n' ;;
  -Fpur) printf 'r/r 4:\tDOCS/ErrorLog.txt\n' ;;
esac"#,
        );

        let listing = list_image(fls.to_str().unwrap(), Path::new("floppy1.img"))
            .unwrap()
            .unwrap();
        assert_eq!(listing.files, vec!["DOCS/ErrorLog.txt"]);
    }

    #[test]
    fn test_list_image_error_in_directory_listing() {
        let tmp = tempfile::tempdir().unwrap();
        let fls = fake_tool(
            tmp.path(),
            "fls",
            "echo 'Error determining file system type'",
        );

        let err = list_image(fls.to_str().unwrap(), Path::new("bad.img")).unwrap_err();
        assert!(matches!(err, ListingError::ToolReported { .. }));
    }

    #[test]
    fn test_list_image_empty_directory_listing_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let fls = fake_tool(tmp.path(), "fls", "exit 0");

        assert_eq!(
            list_image(fls.to_str().unwrap(), Path::new("mac.img")).unwrap(),
            None
        );
    }
}
