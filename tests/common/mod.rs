use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn journalbook_cmd() -> Command {
    Command::cargo_bin("journalbook").unwrap()
}

/// Lay out a minimal export directory: the JSON file plus empty media dirs.
pub fn write_export(dir: &Path, json: &str) -> std::path::PathBuf {
    for sub in ["photos", "videos", "audios"] {
        fs::create_dir_all(dir.join(sub)).unwrap();
    }
    let export = dir.join("journal.json");
    fs::write(&export, json).unwrap();
    export
}
