use std::path::Path;

use crate::config::FragmentDisplayField;

/// Build a display string for a fragment according to the provided `fields` and separator.
///
/// This composes the track ID and metadata fields in the configured order and falls
/// back to `title` when no parts were produced.
pub fn display_from_fields(
    media: &Path,
    id: &str,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[FragmentDisplayField],
    sep: &str,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            FragmentDisplayField::Id => {
                if !id.is_empty() {
                    parts.push(id.to_string());
                }
            }
            FragmentDisplayField::Title => {
                if !title.trim().is_empty() {
                    parts.push(title.trim().to_string());
                }
            }
            FragmentDisplayField::Artist => {
                if let Some(a) = artist.map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            FragmentDisplayField::Album => {
                if let Some(a) = album.map(str::trim).filter(|s| !s.is_empty()) {
                    parts.push(a.to_string());
                }
            }
            FragmentDisplayField::Filename => {
                if let Some(stem) = media.file_stem().and_then(|s| s.to_str()) {
                    if !stem.trim().is_empty() {
                        parts.push(stem.to_string());
                    }
                }
            }
            FragmentDisplayField::Path => {
                parts.push(media.display().to_string());
            }
        }
    }

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(sep)
    }
}
