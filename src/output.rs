//! CLI output formatting for conversion runs.
//!
//! The display is information-centric: each entry shows its positional
//! index plus its TOC identity (date and preview), with media counts as
//! trailing detail, followed by a one-line totals summary naming the
//! output file. Format functions are pure and return `Vec<String>` for
//! testability; `print_report` is the stdout wrapper.
//!
//! ```text
//! 001 05 Oct 2023 02:30 PM — Coffee at the harbour (2 media)
//! 002 06 Oct 2023 09:10 AM — Entry 2
//!
//! Converted 2 entries (2 photos, 0 videos, 0 audio) → journal.html
//! ```

use crate::convert::Report;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format one entry line: index, TOC identity, media count when non-zero.
fn entry_line(index: usize, date_display: &str, preview: &str, media: usize) -> String {
    let identity = if date_display.is_empty() {
        preview.to_string()
    } else {
        format!("{date_display} — {preview}")
    };
    match media {
        0 => format!("{} {}", format_index(index), identity),
        n => format!("{} {} ({} media)", format_index(index), identity, n),
    }
}

/// Format a full run report.
pub fn format_report(report: &Report) -> Vec<String> {
    let mut lines: Vec<String> = report
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| entry_line(i + 1, &e.date_display, &e.preview, e.media))
        .collect();

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Converted {} entries ({} photos, {} videos, {} audio) → {}",
        report.entries.len(),
        report.photos,
        report.videos,
        report.audios,
        report.output_file.display(),
    ));
    if report.skipped_media > 0 {
        lines.push(format!(
            "Skipped {} unresolvable media reference(s)",
            report.skipped_media
        ));
    }
    lines
}

/// Print a run report to stdout.
pub fn print_report(report: &Report) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
