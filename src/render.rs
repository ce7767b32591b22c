//! HTML fragment rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating:
//! templates are type-safe Rust code with automatic XSS escaping, so entry
//! text, previews, and location names are escaped for free. Only the
//! markdown renderer's output is inserted raw (via [`PreEscaped`]) — the
//! renderer owns its own escaping.
//!
//! ## Rendering seam
//!
//! Markdown-to-HTML conversion sits behind the [`MarkupRenderer`] trait so
//! the pipeline can be exercised with a deterministic fake in tests. The
//! production implementation is [`CmarkRenderer`] (pulldown-cmark with
//! tables, footnotes, and strikethrough enabled). List leniency is not the
//! renderer's job: entry text is always passed through
//! [`normalize_list_boundaries`](crate::normalize::normalize_list_boundaries)
//! first, which makes loosely embedded lists unambiguous.
//!
//! ## Fragment contract
//!
//! Each entry renders to a card addressable by the stable anchor
//! `entry{N}` (1-based), plus a matching one-line TOC item linking to that
//! anchor. Rendering an entry depends only on its own resolved inputs,
//! never on other entries.

use crate::media::{MediaKind, ResolvedMedia};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};

/// Converts normalized markdown text into an HTML fragment.
///
/// Implementations must return a complete, well-formed fragment; the
/// result is embedded into the entry card unescaped.
pub trait MarkupRenderer {
    fn render(&self, text: &str) -> String;
}

/// Production renderer backed by pulldown-cmark.
///
/// Enables the "extra"-style syntax extensions journal exports actually
/// use: tables, footnotes, and strikethrough.
pub struct CmarkRenderer;

impl MarkupRenderer for CmarkRenderer {
    fn render(&self, text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(text, options);
        let mut out = String::new();
        md_html::push_html(&mut out, parser);
        out
    }
}

/// Render one TOC line linking to the entry's anchor.
pub fn render_toc_line(index: usize, date_display: &str, preview: &str) -> Markup {
    html! {
        li class="list-group-item d-flex justify-content-between align-items-center" {
            a href={ "#entry" (index) } { (date_display) " — " (preview) }
        }
    }
}

/// Render one entry card.
///
/// `location` is the pre-resolved `(display text, maps url)` pair;
/// `weather` and `body_html` may be empty. Media items appear in their
/// resolved order in a single grid; when `media` is empty no grid
/// container is emitted at all.
pub fn render_entry(
    index: usize,
    date_display: &str,
    location: Option<&(String, String)>,
    weather: &str,
    body_html: &str,
    media: &[ResolvedMedia],
) -> Markup {
    html! {
        div class="card mb-4" id={ "entry" (index) } {
            div class="card-body" {
                p class="text-muted" { (date_display) }
                @if let Some((display, maps_url)) = location {
                    p class="text-muted" {
                        i class="bi bi-geo-alt-fill text-danger" {}
                        " "
                        a href=(maps_url) target="_blank" { (display) }
                    }
                }
                @if !weather.is_empty() {
                    p class="text-muted" { (weather) }
                }
                div class="card-text" { (PreEscaped(body_html)) }
                @if !media.is_empty() {
                    (render_media_grid(media))
                }
                a href="#toc" class="btn btn-link" { "Back to top" }
            }
        }
    }
}

/// One ordered grid row holding photos, videos, and audio together.
fn render_media_grid(media: &[ResolvedMedia]) -> Markup {
    html! {
        div class="row" {
            @for item in media {
                (render_media_item(item))
            }
        }
    }
}

fn render_media_item(item: &ResolvedMedia) -> Markup {
    match item.kind {
        MediaKind::Photo => {
            let url = item.file_url();
            // Single quotes would terminate the inline handler's string
            let safe_url = url.replace('\'', "\\'");
            html! {
                div class="col-md-4" {
                    img src=(url) class="img-fluid rounded mb-3" alt="Photo"
                        data-bs-toggle="modal"
                        data-bs-target="#photoModal"
                        onclick={
                            "document.getElementById('modalImage').src='" (safe_url) "'"
                        };
                }
            }
        }
        MediaKind::Video => html! {
            div class="col-md-6" {
                video controls class="w-100 mb-3" {
                    source src=(item.path.display().to_string()) type=[item.mime];
                    "Your browser does not support the video tag."
                }
            }
        },
        MediaKind::Audio => html! {
            div class="col-md-6" {
                audio controls class="w-100 mb-3" {
                    source src=(item.path.display().to_string()) type=[item.mime];
                    "Your browser does not support the audio element."
                }
            }
        },
    }
}
