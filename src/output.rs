//! CLI output formatting.
//!
//! Each `format_*` function returns lines so tests can assert on them; the
//! matching `print_*` function writes them to stdout.

use crate::handler::HandleOutcome;
use crate::imaging::{Dimensions, FormatTag, ThumbnailInfo};

fn dims(d: Dimensions) -> String {
    format!("{}x{}", d.width, d.height)
}

/// Human-readable byte count (B, KB, MB), one decimal above bytes.
fn human_bytes(n: u64) -> String {
    const KB: f64 = 1024.0;
    let f = n as f64;
    if f < KB {
        format!("{n} B")
    } else if f < KB * KB {
        format!("{:.1} KB", f / KB)
    } else {
        format!("{:.1} MB", f / (KB * KB))
    }
}

pub fn format_handle_outcome(outcome: &HandleOutcome) -> Vec<String> {
    vec![
        format!("{} -> {}", outcome.source, outcome.destination),
        format!(
            "    {} {} -> {} ({} -> {})",
            outcome.format,
            dims(outcome.original),
            dims(outcome.thumbnail),
            human_bytes(outcome.source_bytes),
            human_bytes(outcome.thumbnail_bytes)
        ),
    ]
}

pub fn print_handle_outcome(outcome: &HandleOutcome) {
    for line in format_handle_outcome(outcome) {
        println!("{line}");
    }
}

pub fn format_make_output(info: &ThumbnailInfo) -> Vec<String> {
    vec![format!(
        "{} {} -> {} ({} -> {})",
        info.format,
        dims(info.original),
        dims(info.dimensions),
        human_bytes(info.bytes_read as u64),
        human_bytes(info.bytes_written as u64)
    )]
}

pub fn print_make_output(info: &ThumbnailInfo) {
    for line in format_make_output(info) {
        println!("{line}");
    }
}

pub fn format_identify_output(format: FormatTag, dimensions: Dimensions) -> Vec<String> {
    vec![format!(
        "{} {} ({})",
        format,
        dims(dimensions),
        format.mime_type()
    )]
}
