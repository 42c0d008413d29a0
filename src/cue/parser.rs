//! Line-driven cue sheet parser.
//!
//! The parser starts in the header, where sheet metadata is collected until a
//! `FILE "<name>" MP3` directive names the media. It then waits for a
//! `TRACK <NN> AUDIO` header and collects track metadata and the `INDEX 01` start until
//! the next `TRACK` line or the end of the stream closes the track.

use std::io::BufRead;

use tracing::debug;

use super::error::Result;
use super::fields::{SHEET_RULES, TRACK_RULES, match_field};
use super::lines::LineSource;
use super::metadata::MetaKey;
use super::sheet::Sheet;
use super::timecode::parse_index;
use super::track::{Track, track_id};

enum State {
    Header,
    InFile,
    InTrack(Track),
}

pub(crate) fn parse<R: BufRead>(sheet: &mut Sheet, reader: R) -> Result<()> {
    let mut lines = LineSource::new(reader);
    let mut state = State::Header;

    while let Some((line_number, line)) = lines.next_line()? {
        state = match state {
            State::Header => header_line(sheet, line),
            State::InFile if is_track_header(line) => State::InTrack(open_track(sheet)),
            State::InFile => State::InFile,
            State::InTrack(track) => track_line(sheet, track, line, line_number)?,
        };
    }

    if let State::InTrack(mut track) = state {
        if track.end().is_none() {
            track.set_end(sheet.total_length);
        }
        sheet.tracks.push_parsed(track, lines.line_number())?;
    }

    debug!(
        tracks = sheet.tracks.len(),
        media = sheet.media.as_deref().unwrap_or_default(),
        "parsed cue sheet"
    );
    Ok(())
}

fn header_line(sheet: &mut Sheet, line: &str) -> State {
    if let Some((key, value)) = match_field(line, &SHEET_RULES) {
        sheet.metadata.put(key, value);
        return State::Header;
    }
    match file_directive(line) {
        Some(media) => {
            sheet.media = Some(media.to_string());
            State::InFile
        }
        None => State::Header,
    }
}

fn track_line(
    sheet: &mut Sheet,
    mut track: Track,
    line: &str,
    line_number: usize,
) -> Result<State> {
    if line.starts_with("TRACK ") {
        sheet.tracks.push_parsed(track, line_number)?;
        return Ok(if is_track_header(line) {
            State::InTrack(open_track(sheet))
        } else {
            State::InFile
        });
    }

    if let Some(start) = parse_index(line, line_number)? {
        track.set_start(start);
        if let Some(previous) = sheet.tracks.last_mut() {
            if previous.end().is_none() {
                previous.set_end(Some(start));
            }
        }
    } else if let Some((key, value)) = match_field(line, &TRACK_RULES) {
        track.metadata_mut().put(key, value);
    }
    Ok(State::InTrack(track))
}

/// A new track seeded with the sheet metadata. An inherited title becomes
/// `"<sheet title> (<id>)"`.
fn open_track(sheet: &Sheet) -> Track {
    let id = track_id(sheet.tracks.len() + 1);
    let mut track = Track::new(&id);
    for (key, value) in sheet.metadata.iter() {
        if value.is_empty() {
            continue;
        }
        if key == MetaKey::Title {
            track.metadata_mut().put(key, format!("{value} ({id})"));
        } else {
            track.metadata_mut().put(key, value);
        }
    }
    track
}

fn is_track_header(line: &str) -> bool {
    line.starts_with("TRACK ") && line.ends_with(" AUDIO")
}

/// The media name of a `FILE ... MP3` directive, with one matching pair of surrounding
/// quotes removed.
fn file_directive(line: &str) -> Option<&str> {
    let name = line.strip_prefix("FILE ")?.strip_suffix(" MP3")?.trim();
    Some(strip_quotes(name))
}

fn strip_quotes(value: &str) -> &str {
    ['"', '\'']
        .iter()
        .find_map(|&q| {
            value
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(value)
}
