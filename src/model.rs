//! Data model for the journal export.
//!
//! These types mirror the JSON shape of a journal export: a top-level
//! `entries` array of entry records. Every per-entry field is optional —
//! exports in the wild omit timestamps, locations, weather, and media
//! freely, and a missing field must degrade the output, never abort the
//! conversion. The one exception is `entries` itself: an export without it
//! is not a journal, and deserialization fails with a missing-field error
//! that surfaces to the caller.
//!
//! Exports also carry dozens of fields this tool does not use (edit
//! history, device info, rich-text metadata). Unknown keys are ignored.

use serde::Deserialize;

/// A full journal export. Entry order is preserved through the whole
/// pipeline: the TOC and the rendered body follow this sequence.
#[derive(Debug, Deserialize)]
pub struct Journal {
    pub entries: Vec<Entry>,
}

/// One journal entry: markdown text plus optional metadata and media.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Raw markdown body. Defaults to empty when absent.
    #[serde(default)]
    pub text: String,
    /// Creation timestamp, expected as `YYYY-MM-DDTHH:MM:SSZ` (UTC).
    pub creation_date: Option<String>,
    /// IANA timezone identifier, e.g. `America/New_York`.
    pub time_zone: Option<String>,
    pub location: Option<Location>,
    pub weather: Option<Weather>,
    #[serde(default)]
    pub photos: Vec<MediaRef>,
    #[serde(default)]
    pub videos: Vec<MediaRef>,
    #[serde(default)]
    pub audios: Vec<MediaRef>,
}

/// Where an entry was written.
///
/// A map link is only emitted when both coordinates are present; the name
/// fields contribute to the display text when non-empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub locality_name: String,
    #[serde(default)]
    pub country: String,
}

/// Weather snapshot at entry creation time.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    pub temperature_celsius: Option<f64>,
    pub conditions_description: Option<String>,
}

/// A logical reference to a photo, video, or audio asset.
///
/// The export names media files by content hash (`md5`) or by an opaque
/// `identifier`; the actual file lives in a media directory next to the
/// export, under one of several possible extensions.
#[derive(Debug, Default, Deserialize)]
pub struct MediaRef {
    pub md5: Option<String>,
    pub identifier: Option<String>,
}

impl MediaRef {
    /// The filename stem to look up on disk.
    ///
    /// Prefers the content hash over the opaque identifier; empty strings
    /// are treated as absent. `None` means the ref is unresolvable and
    /// contributes nothing to the output.
    pub fn filename_stem(&self) -> Option<&str> {
        [self.md5.as_deref(), self.identifier.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_requires_entries_key() {
        let err = serde_json::from_str::<Journal>(r#"{"metadata": {}}"#).unwrap_err();
        assert!(err.to_string().contains("entries"));
    }

    #[test]
    fn entry_fields_all_default() {
        let entry: Entry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.text, "");
        assert!(entry.creation_date.is_none());
        assert!(entry.time_zone.is_none());
        assert!(entry.location.is_none());
        assert!(entry.weather.is_none());
        assert!(entry.photos.is_empty());
        assert!(entry.videos.is_empty());
        assert!(entry.audios.is_empty());
    }

    #[test]
    fn entry_ignores_unknown_keys() {
        let entry: Entry =
            serde_json::from_str(r#"{"text": "hi", "editingTime": 12.5, "starred": true}"#)
                .unwrap();
        assert_eq!(entry.text, "hi");
    }

    #[test]
    fn camel_case_field_names() {
        let entry: Entry = serde_json::from_str(
            r#"{
                "creationDate": "2023-10-05T14:30:00Z",
                "timeZone": "America/New_York",
                "weather": {"temperatureCelsius": 21.0, "conditionsDescription": "Clear"},
                "location": {"placeName": "Cafe", "localityName": "Lisbon", "country": "Portugal"}
            }"#,
        )
        .unwrap();
        assert_eq!(entry.creation_date.as_deref(), Some("2023-10-05T14:30:00Z"));
        assert_eq!(entry.time_zone.as_deref(), Some("America/New_York"));
        let weather = entry.weather.unwrap();
        assert_eq!(weather.temperature_celsius, Some(21.0));
        assert_eq!(weather.conditions_description.as_deref(), Some("Clear"));
        let location = entry.location.unwrap();
        assert_eq!(location.place_name, "Cafe");
        assert_eq!(location.locality_name, "Lisbon");
        assert_eq!(location.country, "Portugal");
    }

    #[test]
    fn filename_stem_prefers_md5() {
        let media = MediaRef {
            md5: Some("abc123".into()),
            identifier: Some("uuid-1".into()),
        };
        assert_eq!(media.filename_stem(), Some("abc123"));
    }

    #[test]
    fn filename_stem_falls_back_to_identifier() {
        let media = MediaRef {
            md5: None,
            identifier: Some("uuid-1".into()),
        };
        assert_eq!(media.filename_stem(), Some("uuid-1"));
    }

    #[test]
    fn filename_stem_skips_empty_md5() {
        let media = MediaRef {
            md5: Some(String::new()),
            identifier: Some("uuid-1".into()),
        };
        assert_eq!(media.filename_stem(), Some("uuid-1"));
    }

    #[test]
    fn filename_stem_none_when_unresolvable() {
        assert_eq!(MediaRef::default().filename_stem(), None);
    }
}
