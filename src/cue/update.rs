//! In-place editing of one track's metadata in a cue sheet file.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use tracing::{debug, error, info};

use super::error::{CueError, Result};
use super::filetype::{CueFileType, FileTypeCheck};
use super::metadata::MetaKey;
use super::sheet::Sheet;

/// Field name to new value. The `track` entry selects the track to edit.
pub type FieldMap = BTreeMap<String, String>;

impl Sheet {
    /// Apply `fields` to the track named by `fields["track"]` in the sheet at `path`,
    /// accepting files with a `.cue` extension.
    ///
    /// See [`update_with`](Self::update_with).
    pub fn update(path: &Path, fields: &mut FieldMap) -> Result<bool> {
        Self::update_with(path, fields, &CueFileType::default())
    }

    /// Apply `fields` to the track named by `fields["track"]` in the sheet at `path`.
    ///
    /// Returns `Ok(false)` without touching the file when the file is missing,
    /// unreadable or rejected by `file_type`, when `fields` is empty or has no `track`
    /// entry, or when no supported field differs from the stored value. Unknown field
    /// names are ignored. On success the sheet is rewritten with its original media name,
    /// applied entries are removed from `fields` and `Ok(true)` is returned; whatever
    /// remains in `fields` was not applied.
    ///
    /// # Errors
    ///
    /// [`CueError::TrackNotFound`] when no track has the requested ID, and any read,
    /// parse or write error.
    pub fn update_with(
        path: &Path,
        fields: &mut FieldMap,
        file_type: &dyn FileTypeCheck,
    ) -> Result<bool> {
        if !path.exists() {
            debug!(path = %path.display(), "cue sheet does not exist");
            return Ok(false);
        }
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), "cue sheet is not readable: {e}");
                return Ok(false);
            }
        };
        if !file_type.accept(path) {
            debug!(path = %path.display(), "not a cue sheet");
            return Ok(false);
        }
        let Some(track_id) = fields.get(MetaKey::Track.as_str()).cloned() else {
            debug!(path = %path.display(), "no track selected for update");
            return Ok(false);
        };

        debug!(path = %path.display(), track = %track_id, "updating cue sheet");
        apply(path, file, &track_id, fields).inspect_err(|e| {
            error!(path = %path.display(), "failed to update cue sheet: {e}");
        })
    }
}

fn apply(path: &Path, file: File, track_id: &str, fields: &mut FieldMap) -> Result<bool> {
    let mut sheet = Sheet::from_reader(file, None)?;
    let track = sheet
        .track_mut(track_id)
        .ok_or_else(|| CueError::TrackNotFound(track_id.to_string()))?;

    let mut applied = Vec::new();
    for (name, value) in fields.iter() {
        let Ok(key) = name.parse::<MetaKey>() else {
            continue;
        };
        if !track.metadata().supports(key) {
            continue;
        }
        if track.metadata().get_string(key) != Some(value.as_str()) {
            info!(path = %path.display(), track = track_id, "setting {key}: {value}");
            track.metadata_mut().put(key, value.clone());
            applied.push(name.clone());
        }
    }

    if applied.is_empty() {
        debug!(path = %path.display(), "no field changed");
        return Ok(false);
    }

    let media = sheet.media().unwrap_or_default().to_string();
    sheet.save(path, &media)?;
    for name in &applied {
        fields.remove(name);
    }
    debug!(path = %path.display(), applied = applied.len(), "cue sheet updated");
    Ok(true)
}
