//! Media resolution: mapping logical media refs to files on disk.
//!
//! The export references media by filename stem (content hash or opaque
//! identifier) without an extension; the actual files live in per-kind
//! directories next to the export. Each kind carries an ordered candidate
//! table of extensions — the first candidate that exists on disk wins:
//!
//! - **Photos**: `.jpg`, `.jpeg`, `.png` (no MIME needed; embedded as `<img>`)
//! - **Videos**: `.mp4` → `video/mp4`, `.mov` → `video/mp4`,
//!   `.webm` → `video/webm`
//! - **Audio**: `.m4a` → `audio/mp4`
//!
//! `.mov` is served with the MP4 MIME type on purpose: browsers that
//! refuse `video/quicktime` will still attempt playback of the (usually
//! H.264) stream.
//!
//! A ref with no usable identifier, or whose candidates all miss, resolves
//! to nothing — it is silently dropped from the output, never an error.
//! All filesystem access here is read-only existence checking.

use crate::model::MediaRef;
use std::path::{Path, PathBuf};

/// The three media kinds an entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
    Audio,
}

/// Ordered lookup candidates: extension plus the MIME type to serve the
/// file under, for kinds that are embedded via `<source type=...>`.
type Candidates = &'static [(&'static str, Option<&'static str>)];

const PHOTO_CANDIDATES: Candidates = &[(".jpg", None), (".jpeg", None), (".png", None)];

const VIDEO_CANDIDATES: Candidates = &[
    (".mp4", Some("video/mp4")),
    (".mov", Some("video/mp4")),
    (".webm", Some("video/webm")),
];

const AUDIO_CANDIDATES: Candidates = &[(".m4a", Some("audio/mp4"))];

impl MediaKind {
    fn candidates(self) -> Candidates {
        match self {
            MediaKind::Photo => PHOTO_CANDIDATES,
            MediaKind::Video => VIDEO_CANDIDATES,
            MediaKind::Audio => AUDIO_CANDIDATES,
        }
    }
}

/// A media ref that was located on disk.
#[derive(Debug, Clone)]
pub struct ResolvedMedia {
    pub kind: MediaKind,
    /// Path as configured (media directory joined with stem + extension).
    pub path: PathBuf,
    /// MIME type for `<source>` embedding; `None` for photos.
    pub mime: Option<&'static str>,
}

impl ResolvedMedia {
    /// Browser-friendly `file:///` URL with an absolute, forward-slash path.
    ///
    /// Used for photos so the enlarged-view modal can load the file from
    /// any page location. Videos and audio keep the configured path as-is.
    pub fn file_url(&self) -> String {
        let absolute = std::path::absolute(&self.path).unwrap_or_else(|_| self.path.clone());
        let forward = absolute.display().to_string().replace('\\', "/");
        format!("file:///{}", forward.trim_start_matches('/'))
    }
}

/// Try each candidate extension in order against `dir`, returning the
/// first stem+extension combination that exists as a file.
fn first_existing(
    dir: &Path,
    stem: &str,
    candidates: Candidates,
) -> Option<(PathBuf, Option<&'static str>)> {
    candidates.iter().find_map(|(ext, mime)| {
        let path = dir.join(format!("{stem}{ext}"));
        path.is_file().then_some((path, *mime))
    })
}

/// Resolve one media ref against the configured directory for its kind.
///
/// Returns `None` when the ref has no identifier or no candidate file
/// exists — the caller drops the ref without comment.
pub fn resolve(media: &MediaRef, kind: MediaKind, dir: &Path) -> Option<ResolvedMedia> {
    let stem = media.filename_stem()?;
    let (path, mime) = first_existing(dir, stem, kind.candidates())?;
    Some(ResolvedMedia { kind, path, mime })
}
