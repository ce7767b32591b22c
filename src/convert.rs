//! Document assembly: the conversion pipeline's outer loop.
//!
//! Entries flow strictly one at a time, left to right:
//!
//! ```text
//! raw entry → normalized text → markdown render → metadata + media
//!           → entry fragment + TOC line → accumulated document
//! ```
//!
//! Nothing is shared between entries except the accumulating output
//! buffers and the running date-range bounds, all owned by [`assemble`]
//! for the duration of one run. The final document is built entirely in
//! memory and written with a single `fs::write`, so the output file only
//! ever exists as a complete document — a failed run leaves no partial
//! file behind (an existing file at the output path is overwritten).
//!
//! Per-entry problems (bad timestamps, missing media, absent metadata)
//! are recovered locally by the resolvers; the only fatal errors are an
//! unreadable export, a structurally invalid document (missing `entries`),
//! and an unwritable output path. Each carries the offending path.

use crate::config::ConvertConfig;
use crate::media::{self, MediaKind, ResolvedMedia};
use crate::metadata;
use crate::model::{Entry, Journal};
use crate::normalize::normalize_list_boundaries;
use crate::render::{self, MarkupRenderer};
use chrono::{DateTime, FixedOffset};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS: &str = include_str!("../static/style.css");
const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.1/font/bootstrap-icons.css";
const BOOTSTRAP_JS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/js/bootstrap.bundle.min.js";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read journal export {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid journal export {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Run metadata for a completed conversion.
#[derive(Debug)]
pub struct Report {
    pub entries: Vec<EntrySummary>,
    pub photos: usize,
    pub videos: usize,
    pub audios: usize,
    /// Media refs that had no identifier or no file on disk.
    pub skipped_media: usize,
    /// The date-range phrase used in the document heading.
    pub date_range: String,
    pub output_file: PathBuf,
}

/// One line of the run report, mirroring the entry's TOC line.
#[derive(Debug)]
pub struct EntrySummary {
    pub date_display: String,
    pub preview: String,
    pub media: usize,
}

/// An assembled document plus its run metadata, before writing.
pub struct Assembled {
    pub document: Markup,
    pub report: Report,
}

/// Convert one journal export file to a single HTML document on disk.
pub fn convert(
    json_path: &Path,
    config: &ConvertConfig,
    renderer: &dyn MarkupRenderer,
) -> Result<Report, ConvertError> {
    let raw = fs::read_to_string(json_path).map_err(|source| ConvertError::Read {
        path: json_path.to_path_buf(),
        source,
    })?;
    let journal: Journal = serde_json::from_str(&raw).map_err(|source| ConvertError::Parse {
        path: json_path.to_path_buf(),
        source,
    })?;

    let assembled = assemble(&journal, config, renderer);

    fs::write(&config.output_file, assembled.document.into_string()).map_err(|source| {
        ConvertError::Write {
            path: config.output_file.clone(),
            source,
        }
    })?;

    Ok(assembled.report)
}

/// Assemble the full document in memory.
///
/// Pure with respect to the journal — the only side effects are the
/// read-only media existence checks performed by the resolver.
pub fn assemble(
    journal: &Journal,
    config: &ConvertConfig,
    renderer: &dyn MarkupRenderer,
) -> Assembled {
    let mut toc_lines: Vec<Markup> = Vec::new();
    let mut fragments: Vec<Markup> = Vec::new();
    let mut summaries: Vec<EntrySummary> = Vec::new();
    let mut range: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> = None;
    let (mut photos, mut videos, mut audios, mut skipped) = (0, 0, 0, 0);

    for (i, entry) in journal.entries.iter().enumerate() {
        let index = i + 1;
        let text = entry.text.trim();

        let timestamp = metadata::resolve_timestamp(
            entry.creation_date.as_deref().unwrap_or(""),
            entry.time_zone.as_deref(),
        );
        if let Some(instant) = timestamp.instant {
            range = Some(match range {
                None => (instant, instant),
                Some((lo, hi)) => (lo.min(instant), hi.max(instant)),
            });
        }

        let body_html = renderer.render(&normalize_list_boundaries(text));

        let media = resolve_entry_media(entry, config, &mut skipped);
        for item in &media {
            match item.kind {
                MediaKind::Photo => photos += 1,
                MediaKind::Video => videos += 1,
                MediaKind::Audio => audios += 1,
            }
        }

        let preview = metadata::toc_preview(text, index);
        let location = entry.location.as_ref().and_then(metadata::location_parts);
        let weather = entry
            .weather
            .as_ref()
            .map(metadata::weather_line)
            .unwrap_or_default();

        toc_lines.push(render::render_toc_line(index, &timestamp.display, &preview));
        fragments.push(render::render_entry(
            index,
            &timestamp.display,
            location.as_ref(),
            &weather,
            &body_html,
            &media,
        ));
        summaries.push(EntrySummary {
            date_display: timestamp.display,
            preview,
            media: media.len(),
        });
    }

    let date_range = date_range_phrase(range);
    let document = page_shell(&date_range, &toc_lines, &fragments);

    Assembled {
        document,
        report: Report {
            entries: summaries,
            photos,
            videos,
            audios,
            skipped_media: skipped,
            date_range,
            output_file: config.output_file.clone(),
        },
    }
}

/// Resolve all of one entry's media refs, photos first, then videos, then
/// audio — the order they appear in the grid.
fn resolve_entry_media(
    entry: &Entry,
    config: &ConvertConfig,
    skipped: &mut usize,
) -> Vec<ResolvedMedia> {
    let groups = [
        (&entry.photos, MediaKind::Photo, &config.photos_dir),
        (&entry.videos, MediaKind::Video, &config.videos_dir),
        (&entry.audios, MediaKind::Audio, &config.audios_dir),
    ];

    let mut resolved = Vec::new();
    for (refs, kind, dir) in groups {
        for media_ref in refs {
            match media::resolve(media_ref, kind, dir) {
                Some(item) => resolved.push(item),
                None => *skipped += 1,
            }
        }
    }
    resolved
}

/// The date-range phrase for the page heading: `from {first} to {last}`
/// over successfully parsed instants, in their local dates, or the fixed
/// fallback when nothing parsed.
fn date_range_phrase(range: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>) -> String {
    match range {
        Some((lo, hi)) => format!(
            "from {} to {}",
            lo.format("%d %b %Y"),
            hi.format("%d %b %Y")
        ),
        None => "No date information".to_string(),
    }
}

/// The fixed page shell: Bootstrap assets, heading, TOC, entries, and the
/// shared photo modal. Custom CSS is embedded at compile time.
fn page_shell(date_range: &str, toc_lines: &[Markup], fragments: &[Markup]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { "Journal entries" }
                link href=(BOOTSTRAP_CSS) rel="stylesheet";
                link href=(BOOTSTRAP_ICONS_CSS) rel="stylesheet";
                style { (PreEscaped(CSS)) }
            }
            body class="bg-light" {
                div class="container my-5" {
                    div class="row" {
                        div class="col-lg-8 mx-auto" {
                            h1 class="text-center mb-4" { "Entries " (date_range) }
                            div id="toc" class="mb-4" {
                                h2 { "Table of Contents" }
                                ul class="list-group list-group-flush" {
                                    @for line in toc_lines { (line) }
                                }
                            }
                            @for fragment in fragments { (fragment) }
                        }
                    }
                }
                (photo_modal())
                script src=(BOOTSTRAP_JS) {}
            }
        }
    }
}

/// The shared enlarged-photo modal every photo thumbnail targets.
fn photo_modal() -> Markup {
    html! {
        div class="modal fade" id="photoModal" tabindex="-1" aria-hidden="true" {
            div class="modal-dialog modal-dialog-centered modal-lg" {
                div class="modal-content bg-dark" {
                    div class="modal-header border-0" {
                        button type="button" class="btn-close btn-close-white"
                            data-bs-dismiss="modal" aria-label="Close" {}
                    }
                    div class="modal-body text-center" {
                        img id="modalImage" src="" alt="Enlarged photo" class="img-fluid";
                    }
                }
            }
        }
    }
}
