//! `MM:SS:FF` timecodes, where `FF` counts frames of 1/75 second.

use std::sync::LazyLock;

use regex::Regex;

use super::error::{CueError, Result};

pub const FRAMES_PER_SECOND: u64 = 75;

/// Minutes may have more than two digits.
static INDEX_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^INDEX\s+01\s+([0-9]{2,}):([0-9][0-9]):([0-9][0-9])").expect("index pattern")
});

/// Largest minute count whose timecode still fits in `u64` milliseconds.
const MAX_MINUTES: u64 = u64::MAX / 60_000 - 2;

/// Milliseconds for a minutes/seconds/frames triple. Frames are rounded to the nearest
/// millisecond. No range check is applied to seconds or frames.
pub fn to_millis(minutes: u64, seconds: u64, frames: u64) -> u64 {
    let frame_ms = (frames * 1_000 + FRAMES_PER_SECOND / 2) / FRAMES_PER_SECOND;
    minutes * 60_000 + seconds * 1_000 + frame_ms
}

/// Render `millis` as `MM:SS:00`. The frame field is always zero, so sub-second
/// precision is dropped.
pub fn to_timecode(millis: u64) -> String {
    let total_seconds = millis / 1_000;
    format!("{:02}:{:02}:00", total_seconds / 60, total_seconds % 60)
}

/// Start time in milliseconds if `line` is an `INDEX 01` directive.
pub(crate) fn parse_index(line: &str, line_number: usize) -> Result<Option<u64>> {
    let Some(caps) = INDEX_LINE.captures(line) else {
        return Ok(None);
    };
    let minutes = caps[1]
        .parse::<u64>()
        .ok()
        .filter(|&m| m <= MAX_MINUTES)
        .ok_or_else(|| {
            CueError::format(line_number, format!("{}:{}:{}", &caps[1], &caps[2], &caps[3]))
        })?;
    let two_digits = |i: usize| caps[i].bytes().fold(0, |n, b| n * 10 + u64::from(b - b'0'));
    Ok(Some(to_millis(minutes, two_digits(2), two_digits(3))))
}
