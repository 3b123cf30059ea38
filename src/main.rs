mod error;
mod fls;
mod hfs;
mod html_renderer;
mod report;
mod scanner;
mod summary;
#[cfg(test)]
mod test_util;
mod tree;
mod tree_renderer;
mod types;

use chrono::Local;
use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use std::path::PathBuf;
use tree_renderer::{RenderFormat, TreeRenderer};
use types::{DiskImage, ImageStatus, ImageSummary, Listing, ListingSource};

#[derive(Parser, Debug)]
#[command(version, about = "Write a directory tree report for every disk image in a folder", long_about = None)]
struct Args {
    /// Folder containing one subfolder per image (<name>/<name>.img)
    images_dir: PathBuf,

    /// Report format
    #[arg(value_enum, ignore_case = true, default_value_t = RenderFormat::Plain)]
    format: RenderFormat,

    /// Path to The Sleuth Kit's fls
    #[arg(long, default_value = "fls")]
    fls: String,

    /// Path to HFSExplorer's unhfs, used when fls can't read an image
    #[arg(long, default_value = hfs::DEFAULT_UNHFS)]
    unhfs: String,

    /// Text written at the top of every report
    #[arg(long, default_value = report::DEFAULT_INTRO)]
    intro: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let images = match scanner::find_images(&args.images_dir) {
        Ok(images) => images,
        Err(e) => {
            eprintln!(
                "Error: Could not read images directory {}: {e}",
                args.images_dir.display()
            );
            std::process::exit(1);
        }
    };

    println!(
        "{}",
        format!(
            "=== Image listings for {}: {} ===",
            args.images_dir.display(),
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );

    let renderer = args.format.renderer();
    let summaries: Vec<ImageSummary> = images
        .iter()
        .map(|image| process_image(image, &args, renderer.as_ref()))
        .collect();

    println!();
    summary::print_summary(&summaries);
}

fn process_image(image: &DiskImage, args: &Args, renderer: &dyn TreeRenderer) -> ImageSummary {
    info!("Processing {}", image.image_path.display());
    let image_size = scanner::image_size(&image.image_path);

    let (source, listing) = match list_image(image, args) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{} {e}", format!("Error reading image {}:", image.name).red());
            let reason = e.to_string().lines().next().unwrap_or_default().to_string();
            return ImageSummary {
                name: image.name.clone(),
                source: None,
                directories: 0,
                files: 0,
                image_size,
                status: ImageStatus::Failed(reason),
            };
        }
    };

    let tree = report::build_tree(&image.name, &listing);
    let text = report::build_report(&tree, renderer, &args.intro);

    let status = match report::write_report(image, &text) {
        Ok(path) if tree.is_empty() => {
            warn!("{} has no entries, it may not be readable", image.name);
            ImageStatus::Empty(path)
        }
        Ok(path) => {
            info!("Wrote {}", path.display());
            ImageStatus::Written(path)
        }
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            ImageStatus::Failed(e.to_string())
        }
    };

    ImageSummary {
        name: image.name.clone(),
        source: Some(source),
        directories: tree.count_directories(),
        files: tree.count_files(),
        image_size,
        status,
    }
}

/// fls first; anything it doesn't recognise is treated as HFS.
fn list_image(
    image: &DiskImage,
    args: &Args,
) -> Result<(ListingSource, Listing), error::ListingError> {
    if let Some(listing) = fls::list_image(&args.fls, &image.image_path)? {
        return Ok((ListingSource::Fls, listing));
    }

    info!("fls found nothing in {}, trying HFS", image.name);
    let listing = hfs::list_image(&args.unhfs, &image.image_path)?;
    Ok((ListingSource::Hfs, listing))
}
