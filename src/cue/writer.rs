//! Cue sheet serialization.
//!
//! Values are always written double-quoted and are not escaped: a value containing `"`
//! produces a line that does not read back verbatim.

use std::io::{self, Write};

use super::fields::EPISODE_DIRECTIVE;
use super::metadata::{MetaKey, Metadata};
use super::sheet::Sheet;
use super::timecode::to_timecode;
use super::track::Track;

pub(crate) fn write_sheet<W: Write>(
    out: &mut W,
    sheet: &Sheet,
    media: Option<&str>,
) -> io::Result<()> {
    write_field(out, "", "PERFORMER", sheet.metadata(), MetaKey::Artist)?;
    write_field(out, "", "TITLE", sheet.metadata(), MetaKey::Title)?;
    if let Some(media) = media {
        writeln!(out, "FILE \"{media}\" MP3")?;
    }
    for track in sheet.tracks() {
        write_track(out, track)?;
    }
    Ok(())
}

fn write_track<W: Write>(out: &mut W, track: &Track) -> io::Result<()> {
    const INDENT: &str = "    ";
    writeln!(out, "  TRACK {} AUDIO", track.id())?;
    let meta = track.metadata();
    write_field(out, INDENT, "REM GENRE", meta, MetaKey::Genre)?;
    write_field(out, INDENT, "REM DATE", meta, MetaKey::Year)?;
    write_field(out, INDENT, EPISODE_DIRECTIVE, meta, MetaKey::TvEpisode)?;
    write_field(out, INDENT, "PERFORMER", meta, MetaKey::Artist)?;
    write_field(out, INDENT, "TITLE", meta, MetaKey::Title)?;
    writeln!(out, "{INDENT}INDEX 01 {}", to_timecode(track.start()))
}

fn write_field<W: Write>(
    out: &mut W,
    indent: &str,
    directive: &str,
    meta: &Metadata,
    key: MetaKey,
) -> io::Result<()> {
    match meta.present(key) {
        Some(value) => writeln!(out, "{indent}{directive} \"{value}\""),
        None => Ok(()),
    }
}
