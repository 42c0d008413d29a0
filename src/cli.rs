use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cuecut")]
#[command(author, version, about = "Read, split and edit cue sheets")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tracks of a cue sheet
    Show {
        /// Cue sheet to read
        sheet: PathBuf,

        /// Total length of the media in milliseconds
        #[arg(long)]
        length: Option<u64>,
    },

    /// Print a cue sheet the way it would be saved
    Render {
        /// Cue sheet to read
        sheet: PathBuf,

        /// Total length of the media in milliseconds
        #[arg(long)]
        length: Option<u64>,
    },

    /// Insert split points into a cue sheet
    Split {
        /// Cue sheet to split
        sheet: PathBuf,

        /// Split point in milliseconds (repeatable, or comma separated)
        #[arg(long = "at", required = true, value_delimiter = ',', allow_negative_numbers = true)]
        at: Vec<i64>,

        /// Total length of the media in milliseconds
        #[arg(long)]
        length: Option<u64>,

        /// Write the result here instead of over the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a cue sheet from split points
    Create {
        /// Cue sheet to write
        output: PathBuf,

        /// Media file name written into the FILE line
        #[arg(long)]
        media: String,

        /// Total length of the media in milliseconds
        #[arg(long)]
        length: u64,

        /// Split point in milliseconds (repeatable, or comma separated)
        #[arg(long = "at", required = true, value_delimiter = ',', allow_negative_numbers = true)]
        at: Vec<i64>,

        /// Sheet title
        #[arg(long)]
        title: Option<String>,

        /// Sheet performer
        #[arg(long)]
        performer: Option<String>,
    },

    /// Set metadata fields of one track in place
    Set {
        /// Cue sheet to edit
        sheet: PathBuf,

        /// Track ID, e.g. 02 (a bare number is zero-padded)
        #[arg(short, long)]
        track: String,

        /// Fields to set, e.g. title="Intro" artist=Someone
        #[arg(required = true, value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },

    /// List the tracks of every media file with a companion cue sheet
    Scan {
        /// Directory to scan
        dir: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{s}`"));
    }
    Ok((name.to_ascii_lowercase(), value.to_string()))
}
