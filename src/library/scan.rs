use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::prelude::*;
use lofty::probe::Probe;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::{LibrarySettings, Settings};
use crate::cue::{self, FileTypeCheck, MetaKey, Sheet};

use super::display::display_from_fields;
use super::model::Fragment;

fn is_media_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// The cue sheet next to `media`: same stem, one of the configured sheet extensions.
pub fn companion_sheet(media: &Path, settings: &Settings) -> Option<PathBuf> {
    let file_type = settings.cue_file_type();
    file_type
        .extensions()
        .iter()
        .map(|ext| media.with_extension(ext))
        .find(|candidate| file_type.accept(candidate) && File::open(candidate).is_ok())
}

/// Total playing time of `media` in milliseconds, if lofty can read its properties.
pub fn probe_length(media: &Path) -> Option<u64> {
    let tagged = match Probe::open(media).and_then(|p| p.read()) {
        Ok(tagged) => tagged,
        Err(err) => {
            debug!(path = %media.display(), %err, "cannot probe media length");
            return None;
        }
    };
    let ms = u64::try_from(tagged.properties().duration().as_millis()).ok()?;
    (ms > 0).then_some(ms)
}

/// Every track of `media`'s companion sheet, or nothing when it has none.
pub fn fragments(media: &Path, settings: &Settings) -> cue::Result<Vec<Fragment>> {
    let Some(sheet_path) = companion_sheet(media, settings) else {
        return Ok(Vec::new());
    };

    let sheet = Sheet::open(&sheet_path, probe_length(media))?;
    let stem = media
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("UNKNOWN");
    let album = sheet.metadata().present(MetaKey::Title).map(str::to_string);

    let fragments = sheet
        .tracks()
        .iter()
        .map(|track| {
            let meta = track.metadata();
            let owned = |key: MetaKey| meta.present(key).map(str::to_string);

            let title = owned(MetaKey::Title).unwrap_or_else(|| format!("{stem} ({})", track.id()));
            let artist = owned(MetaKey::Artist);
            let display = display_from_fields(
                media,
                track.id(),
                &title,
                artist.as_deref(),
                album.as_deref(),
                &settings.library.display_fields,
                &settings.library.display_separator,
            );

            Fragment {
                media: media.to_path_buf(),
                sheet: sheet_path.clone(),
                id: track.id().to_string(),
                start: Duration::from_millis(track.start()),
                end: track.end().map(Duration::from_millis),
                title,
                artist,
                album: album.clone(),
                genre: owned(MetaKey::Genre),
                year: owned(MetaKey::Year),
                episode: owned(MetaKey::TvEpisode),
                display,
            }
        })
        .collect();

    Ok(fragments)
}

/// Walk `dir` for media files and collect the fragments of each one that has a sheet.
///
/// Sheets that fail to parse are logged and skipped.
pub fn scan(dir: &Path, settings: &Settings) -> Vec<Fragment> {
    let library = &settings.library;
    let mut found: Vec<Fragment> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(library.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if library.recursive {
        library.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| library.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file()
            || (!library.include_hidden && is_hidden(path))
            || !is_media_file(path, library)
        {
            continue;
        }

        match fragments(path, settings) {
            Ok(mut list) => found.append(&mut list),
            Err(err) => warn!(media = %path.display(), %err, "skipping unreadable cue sheet"),
        }
    }

    found.sort_by(|a, b| a.media.cmp(&b.media).then(a.start.cmp(&b.start)));
    found
}
