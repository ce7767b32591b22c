//! Per-entry metadata resolution: timestamps, weather, location, previews.
//!
//! Every resolver here follows the same recovery policy: a malformed or
//! missing field degrades the output and never aborts the run. A timestamp
//! that fails to parse is shown verbatim and excluded from date-range
//! computation; an unknown timezone identifier keeps UTC; absent weather
//! or coordinates simply contribute nothing.
//!
//! ## Timestamp resolution
//!
//! Export timestamps use the fixed pattern `YYYY-MM-DDTHH:MM:SSZ` and are
//! interpreted as UTC. When the entry names a resolvable IANA timezone,
//! the instant is converted to that zone before formatting, and the
//! zone-local offset is kept on the parsed instant so the overall date
//! range is reported in local dates (a late-night UTC entry can belong to
//! the previous local day).

use crate::model::{Location, Weather};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::OnceLock;

/// Wire format of export timestamps. The trailing `Z` is part of the
/// pattern — an offset-suffixed or fractional-seconds timestamp is treated
/// as malformed.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Display format: `05 Oct 2023 02:30 PM`.
const DISPLAY_FORMAT: &str = "%d %b %Y %I:%M %p";

/// A resolved entry timestamp.
///
/// `display` is always usable in output. `instant` is `Some` only when the
/// raw value parsed; entries without it are excluded from the date range.
#[derive(Debug, Clone)]
pub struct Timestamp {
    /// Formatted local date/time, or the raw input verbatim on parse failure.
    pub display: String,
    /// The parsed instant, carrying the resolved zone's local offset.
    pub instant: Option<DateTime<FixedOffset>>,
}

/// Resolve a raw creation timestamp and optional timezone identifier.
///
/// Parse failure falls back to the raw string verbatim. An absent or
/// unresolvable timezone keeps UTC.
pub fn resolve_timestamp(raw: &str, time_zone: Option<&str>) -> Timestamp {
    let Ok(naive) = NaiveDateTime::parse_from_str(raw, INPUT_FORMAT) else {
        return Timestamp {
            display: raw.to_string(),
            instant: None,
        };
    };
    let utc = naive.and_utc();

    let local = match time_zone.and_then(|id| id.parse::<Tz>().ok()) {
        Some(zone) => utc.with_timezone(&zone).fixed_offset(),
        None => utc.fixed_offset(),
    };

    Timestamp {
        display: local.format(DISPLAY_FORMAT).to_string(),
        instant: Some(local),
    }
}

/// Compose the weather display line.
///
/// Priority: temperature and description, temperature only, description
/// only, empty. Temperature is formatted to one decimal place.
pub fn weather_line(weather: &Weather) -> String {
    let description = weather
        .conditions_description
        .as_deref()
        .filter(|d| !d.is_empty());
    match (weather.temperature_celsius, description) {
        (Some(t), Some(d)) => format!("{t:.1}°C, {d}"),
        (Some(t), None) => format!("{t:.1}°C"),
        (None, Some(d)) => d.to_string(),
        (None, None) => String::new(),
    }
}

/// Build the location display text and map link.
///
/// Returns `None` unless both coordinates are present; the display text is
/// the comma-joined non-empty subset of place, locality, and country.
pub fn location_parts(location: &Location) -> Option<(String, String)> {
    let latitude = location.latitude?;
    let longitude = location.longitude?;

    let display = [
        location.place_name.as_str(),
        location.locality_name.as_str(),
        location.country.as_str(),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ");

    let maps_url = format!("https://www.google.com/maps?q={latitude},{longitude}");
    Some((display, maps_url))
}

/// Leading markdown heading markers: one or more `#` plus following whitespace.
fn heading_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#+\s*").unwrap())
}

/// Short preview text for the TOC: the first line of the entry with any
/// leading heading markers stripped. Entries without text get a synthetic
/// `Entry {index}` label (1-based).
pub fn toc_preview(text: &str, index: usize) -> String {
    if text.is_empty() {
        return format!("Entry {index}");
    }
    let first_line = text.lines().next().unwrap_or("");
    heading_marker_regex().replace(first_line, "").to_string()
}
