use crate::types::{ImageStatus, ImageSummary};
use colored::Colorize;
use comfy_table::{Cell, Color, Table};

fn status_cell(status: &ImageStatus) -> Cell {
    match status {
        ImageStatus::Written(path) => Cell::new(format!("wrote {}", path.display())).fg(Color::Green),
        ImageStatus::Empty(path) => {
            Cell::new(format!("empty, wrote {}", path.display())).fg(Color::Yellow)
        }
        ImageStatus::Failed(reason) => Cell::new(format!("failed: {reason}")).fg(Color::Red),
    }
}

#[must_use]
pub fn failed_count(summaries: &[ImageSummary]) -> usize {
    summaries
        .iter()
        .filter(|s| matches!(s.status, ImageStatus::Failed(_)))
        .count()
}

pub fn print_summary(summaries: &[ImageSummary]) {
    if summaries.is_empty() {
        println!("No images found.");
        return;
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec![
        "Image", "Source", "Dirs", "Files", "Size", "Status",
    ]);

    for s in summaries {
        let source = s.source.map_or_else(|| "-".to_string(), |src| src.to_string());
        let size = s
            .image_size
            .map_or_else(|| "-".to_string(), |b| human_bytes::human_bytes(b as f64));

        table.add_row(vec![
            Cell::new(&s.name),
            Cell::new(source),
            Cell::new(s.directories),
            Cell::new(s.files),
            Cell::new(size),
            status_cell(&s.status),
        ]);
    }

    println!("{table}");

    let failed = failed_count(summaries);
    if failed > 0 {
        println!(
            "{}",
            format!("{failed} of {} images could not be listed.", summaries.len()).red()
        );
    } else {
        println!("{}", format!("All {} images listed.", summaries.len()).green());
    }
}
