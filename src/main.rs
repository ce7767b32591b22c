use clap::Parser;
use journalbook::render::CmarkRenderer;
use journalbook::{config, convert, output};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "journalbook")]
#[command(about = "Convert a journal JSON export into a single HTML document")]
#[command(long_about = "\
Convert a journal JSON export into a single HTML document

Point journalbook at the export's JSON file; media directories are
resolved next to it by default:

  export/
  ├── journal.json                 # The export (top-level \"entries\" array)
  ├── journalbook.toml             # Optional config (overrides defaults)
  ├── photos/                      # <md5-or-identifier>.jpg/.jpeg/.png
  ├── videos/                      # <md5-or-identifier>.mp4/.mov/.webm
  └── audios/                      # <md5-or-identifier>.m4a

The output is one self-contained HTML file with a table of contents,
per-entry date/location/weather lines, rendered markdown, and inline
media. Media files are referenced in place, not copied — keep the media
directories next to the generated document.

Settings resolve CLI flag → journalbook.toml → built-in default.")]
#[command(version)]
struct Cli {
    /// Journal export JSON file
    export: PathBuf,

    /// Directory containing exported photos
    #[arg(long)]
    photos_dir: Option<PathBuf>,

    /// Directory containing exported videos
    #[arg(long)]
    videos_dir: Option<PathBuf>,

    /// Directory containing exported audio recordings
    #[arg(long)]
    audios_dir: Option<PathBuf>,

    /// Output HTML file (overwritten if present)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let export_dir = cli.export.parent().unwrap_or_else(|| Path::new("."));
    let mut config = config::load_config(export_dir)?;
    if let Some(dir) = cli.photos_dir {
        config.photos_dir = dir;
    }
    if let Some(dir) = cli.videos_dir {
        config.videos_dir = dir;
    }
    if let Some(dir) = cli.audios_dir {
        config.audios_dir = dir;
    }
    if let Some(path) = cli.output {
        config.output_file = path;
    }
    config.validate()?;

    let report = convert::convert(&cli.export, &config, &CmarkRenderer)?;
    output::print_report(&report);

    Ok(())
}
