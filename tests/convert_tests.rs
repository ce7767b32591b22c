//! End-to-end conversion tests through the library with the production
//! markdown renderer.

use journalbook::config::ConvertConfig;
use journalbook::convert::convert;
use journalbook::render::CmarkRenderer;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> ConvertConfig {
    ConvertConfig {
        photos_dir: dir.path().join("photos"),
        videos_dir: dir.path().join("videos"),
        audios_dir: dir.path().join("audios"),
        output_file: dir.path().join("journal.html"),
    }
}

fn write_export(dir: &TempDir, json: &str) -> PathBuf {
    for sub in ["photos", "videos", "audios"] {
        fs::create_dir_all(dir.path().join(sub)).unwrap();
    }
    let export = dir.path().join("journal.json");
    fs::write(&export, json).unwrap();
    export
}

fn convert_to_html(dir: &TempDir, json: &str) -> String {
    let export = write_export(dir, json);
    let config = config_for(dir);
    convert(&export, &config, &CmarkRenderer).unwrap();
    fs::read_to_string(config.output_file).unwrap()
}

#[test]
fn zero_entries_produce_valid_empty_document() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(&dir, r#"{"entries": []}"#);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Entries No date information"));
    assert!(html.contains("Table of Contents"));
    assert!(!html.contains("id=\"entry1\""));
    assert!(!html.contains("list-group-item"));
}

#[test]
fn two_entries_one_photo_one_media_block() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("photos")).unwrap();
    fs::write(dir.path().join("photos/abc123.png"), b"png").unwrap();

    let html = convert_to_html(
        &dir,
        r##"{"entries": [
            {
                "text": "# First day\nSunny walk",
                "creationDate": "2023-10-05T14:30:00Z",
                "photos": [{"md5": "abc123"}]
            },
            {
                "text": "# Second day",
                "creationDate": "2023-10-06T14:30:00Z",
                "photos": [{"md5": "not-on-disk"}]
            }
        ]}"##,
    );

    // Two TOC lines in original order
    let first = html.find("First day").unwrap();
    let second = html.find("Second day").unwrap();
    assert!(first < second);
    assert_eq!(html.matches("list-group-item").count(), 2);

    // Exactly one media grid across both fragments, with the png file
    assert_eq!(html.matches("img-fluid rounded").count(), 1);
    assert!(html.contains("abc123.png"));
    assert!(!html.contains("not-on-disk"));

    assert!(html.contains("Entries from 05 Oct 2023 to 06 Oct 2023"));
}

#[test]
fn embedded_list_renders_as_list() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(
        &dir,
        r#"{"entries": [{"text": "Shopping today:\n- milk\n- eggs"}]}"#,
    );

    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>milk</li>"));
    assert!(html.contains("<li>eggs</li>"));
}

#[test]
fn timezone_shifts_display_and_range() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(
        &dir,
        r#"{"entries": [{
            "text": "late night",
            "creationDate": "2023-10-05T01:30:00Z",
            "timeZone": "America/New_York"
        }]}"#,
    );

    assert!(html.contains("04 Oct 2023 09:30 PM"));
    assert!(html.contains("Entries from 04 Oct 2023 to 04 Oct 2023"));
}

#[test]
fn metadata_lines_rendered_when_present() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(
        &dir,
        r#"{"entries": [{
            "text": "with everything",
            "creationDate": "2023-10-05T14:30:00Z",
            "location": {
                "latitude": 38.7223,
                "longitude": -9.1393,
                "placeName": "Cafe",
                "localityName": "Lisbon",
                "country": "Portugal"
            },
            "weather": {"temperatureCelsius": 21.0, "conditionsDescription": "Clear"}
        }]}"#,
    );

    assert!(html.contains("Cafe, Lisbon, Portugal"));
    assert!(html.contains("https://www.google.com/maps?q=38.7223,-9.1393"));
    assert!(html.contains("21.0°C, Clear"));
}

#[test]
fn location_without_coordinates_is_omitted() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(
        &dir,
        r#"{"entries": [{
            "text": "nameless place",
            "location": {"placeName": "Cafe", "localityName": "Lisbon", "country": "Portugal"}
        }]}"#,
    );

    assert!(!html.contains("google.com/maps"));
    assert!(!html.contains("Cafe, Lisbon, Portugal"));
}

#[test]
fn markdown_rendering_runs_through_cmark() {
    let dir = TempDir::new().unwrap();
    let html = convert_to_html(&dir, r#"{"entries": [{"text": "some **bold** text"}]}"#);
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn video_and_audio_players_embedded() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("videos")).unwrap();
    fs::create_dir_all(dir.path().join("audios")).unwrap();
    fs::write(dir.path().join("videos/clip.mov"), b"mov").unwrap();
    fs::write(dir.path().join("audios/memo.m4a"), b"m4a").unwrap();

    let html = convert_to_html(
        &dir,
        r#"{"entries": [{
            "text": "media day",
            "videos": [{"md5": "clip"}],
            "audios": [{"identifier": "memo"}]
        }]}"#,
    );

    assert!(html.contains("<video controls"));
    assert!(html.contains("type=\"video/mp4\""));
    assert!(html.contains("<audio controls"));
    assert!(html.contains("type=\"audio/mp4\""));
}
