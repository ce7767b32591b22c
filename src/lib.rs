//! # Journalbook
//!
//! Converts a journal JSON export — an ordered collection of entries with
//! markdown text, timestamps, geolocation, weather, and media references —
//! into one self-contained, browsable HTML document. Built for a single
//! user running the conversion locally against an unpacked export
//! directory; there is no server, no network, no database.
//!
//! # Architecture: One Pass, One Write
//!
//! Entries are processed strictly sequentially, each flowing left to right
//! through the same stages:
//!
//! ```text
//! raw entry → normalize lists → render markdown → resolve metadata/media
//!           → entry fragment + TOC line → accumulate → single write
//! ```
//!
//! The whole document is assembled in memory and written once, so the
//! output file only ever exists in a complete state. Per-entry problems
//! (a malformed timestamp, a missing photo file, absent weather) degrade
//! that entry's output and never abort the run; only an unreadable export,
//! a structurally invalid document, or an unwritable output path is fatal.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Serde data model for the export (`entries`, location, weather, media refs) |
//! | [`normalize`] | List-boundary normalization so embedded lists render as lists |
//! | [`metadata`] | Timestamp/timezone, weather, location, and TOC-preview resolution |
//! | [`media`] | Candidate-extension lookup of photo/video/audio files on disk |
//! | [`render`] | Maud fragments per entry + the swappable markdown renderer seam |
//! | [`convert`] | Document assembly, date-range computation, read/write orchestration |
//! | [`config`] | `journalbook.toml` loading with defaults for directories and output |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, interpolation is
//! auto-escaped (entry text and previews come from user data), and there
//! is no template directory to ship or get out of sync.
//!
//! ## Markdown Rendering Behind a Trait
//!
//! Entry bodies are converted by a [`render::MarkupRenderer`]
//! implementation — pulldown-cmark in production, a deterministic fake in
//! tests. The pipeline's own policy (list normalization, verbatim
//! timestamp fallback, media skipping) is testable without depending on
//! markdown rendering details.
//!
//! ## Defensive Data Model
//!
//! Every per-entry field is optional at the type level (`Option`, empty
//! defaults) rather than null-checked ad hoc at render time. Absence
//! degrades output — a missing location drops the map line, a missing
//! media file drops the thumbnail — and is never an error.
//!
//! ## Media by Reference, Not by Copy
//!
//! Resolved media files are referenced from the document (photos by
//! absolute `file:///` URL, videos and audio by their configured path),
//! not copied or embedded. The document is only as portable as the media
//! directories next to it; moving the HTML file alone breaks media.

pub mod config;
pub mod convert;
pub mod media;
pub mod metadata;
pub mod model;
pub mod normalize;
pub mod output;
pub mod render;
