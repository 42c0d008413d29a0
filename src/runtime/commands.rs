use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use cuecut::config::Settings;
use cuecut::cue::{FieldMap, MetaKey, Sheet, Track, track_id};
use cuecut::library;

fn open(path: &Path, length: Option<u64>) -> Result<Sheet> {
    Sheet::open(path, length).with_context(|| format!("failed to read {}", path.display()))
}

fn end_column(track: &Track) -> String {
    track
        .end()
        .map(|end| end.to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn show(path: &Path, length: Option<u64>) -> Result<()> {
    let sheet = open(path, length)?;

    println!("{:<4}{:>10}{:>10}{:>10}  TITLE", "ID", "START", "END", "LENGTH");
    for track in sheet.tracks() {
        let duration = match track.end() {
            Some(_) => track.duration().to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<4}{:>10}{:>10}{:>10}  {}",
            track.id(),
            track.start(),
            end_column(track),
            duration,
            track.metadata().present(MetaKey::Title).unwrap_or("")
        );
    }
    Ok(())
}

pub fn render(path: &Path, length: Option<u64>) -> Result<()> {
    let sheet = open(path, length)?;
    print!("{sheet}");
    Ok(())
}

fn insert_points(sheet: &mut Sheet, points: &[i64]) -> usize {
    let mut inserted = 0;
    for &at in points {
        match sheet.insert_track(at).map(|track| track.id().to_string()) {
            Some(id) => {
                println!("inserted track {id} at {at} ms");
                inserted += 1;
            }
            None => warn!(at, "split point rejected"),
        }
    }
    inserted
}

pub fn split(
    path: &Path,
    points: &[i64],
    length: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let mut sheet = open(path, length)?;
    if insert_points(&mut sheet, points) == 0 {
        bail!("no split point could be inserted into {}", path.display());
    }

    let target = output.unwrap_or(path);
    let media = sheet.media().unwrap_or_default().to_string();
    sheet
        .save(target, &media)
        .with_context(|| format!("failed to write {}", target.display()))?;
    debug!(path = %target.display(), tracks = sheet.tracks().len(), "split saved");
    Ok(())
}

pub fn create(
    output: &Path,
    media: &str,
    length: u64,
    points: &[i64],
    title: Option<String>,
    performer: Option<String>,
) -> Result<()> {
    let mut sheet = Sheet::new(Some(length));
    sheet.set_media(media);
    if let Some(title) = title {
        sheet.metadata_mut().put(MetaKey::Title, title);
    }
    if let Some(performer) = performer {
        sheet.metadata_mut().put(MetaKey::Artist, performer);
    }

    if insert_points(&mut sheet, points) == 0 {
        bail!("no split point fits in {length} ms");
    }

    sheet
        .save(output, media)
        .with_context(|| format!("failed to write {}", output.display()))
}

pub fn set(
    path: &Path,
    track: &str,
    fields: Vec<(String, String)>,
    settings: &Settings,
) -> Result<()> {
    let id = track
        .trim()
        .parse::<usize>()
        .map(track_id)
        .unwrap_or_else(|_| track.trim().to_string());
    let track_key = MetaKey::Track.as_str();

    let mut map: FieldMap = fields
        .into_iter()
        .filter(|(name, _)| name != track_key)
        .collect();
    let requested: Vec<String> = map.keys().cloned().collect();
    map.insert(track_key.to_string(), id.clone());

    let written = Sheet::update_with(path, &mut map, &settings.cue_file_type())
        .with_context(|| format!("failed to update track {id} in {}", path.display()))?;
    if !written {
        bail!(
            "nothing written to {}: no field changed, or the file is missing or not an accepted cue sheet",
            path.display()
        );
    }

    for name in &requested {
        if map.contains_key(name) {
            println!("skipped {name}");
        } else {
            println!("applied {name}");
        }
    }
    Ok(())
}

pub fn scan(dir: &Path, settings: &Settings) -> Result<()> {
    if !dir.is_dir() {
        bail!("not a directory: {}", dir.display());
    }

    for fragment in library::scan(dir, settings) {
        let end = fragment
            .end
            .map(|end| end.as_millis().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{}\t{}\t{}\t{}",
            fragment.media.display(),
            fragment.id,
            fragment.start.as_millis(),
            end,
            fragment.display
        );
    }
    Ok(())
}

pub fn config(settings: &Settings) -> Result<()> {
    let text = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    print!("{text}");
    Ok(())
}
