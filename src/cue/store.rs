//! Ordered, contiguous track storage.
//!
//! Tracks are kept in strictly ascending start order, and every track's end equals the
//! start of the track after it. A track's ID is always its 1-based position.

use super::error::{CueError, Result};
use super::track::{Track, track_id};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackStore {
    tracks: Vec<Track>,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id() == id)
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Track> {
        self.tracks.last_mut()
    }

    /// Append a track read from a sheet, back-filling the previous track's end with the
    /// new track's start.
    ///
    /// A start equal to the previous one leaves the previous track zero-length.
    pub(crate) fn push_parsed(&mut self, track: Track, line: usize) -> Result<()> {
        if let Some(previous) = self.tracks.last_mut() {
            if track.start() < previous.start() {
                return Err(CueError::OutOfOrder {
                    line,
                    start_ms: track.start(),
                    previous_ms: previous.start(),
                });
            }
            previous.set_end(Some(track.start()));
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Split the timeline at `time` milliseconds.
    ///
    /// Returns the position of the new track, or `None` when `time` is not positive,
    /// already starts a track, or lies at or beyond a known `total_length`.
    pub fn insert(&mut self, time: i64, total_length: Option<u64>) -> Option<usize> {
        let time = u64::try_from(time).ok().filter(|&t| t > 0)?;
        if total_length.is_some_and(|total| time >= total) {
            return None;
        }

        if self.tracks.is_empty() {
            self.tracks.push(Track::with_bounds(&track_id(1), 0, Some(time)));
            self.tracks.push(Track::with_bounds(&track_id(2), time, total_length));
            return Some(1);
        }

        let position = match self.tracks.iter().position(|t| t.start() >= time) {
            Some(i) if self.tracks[i].start() == time => return None,
            Some(i) => {
                let next_start = self.tracks[i].start();
                self.tracks
                    .insert(i, Track::with_bounds(&track_id(i + 1), time, Some(next_start)));
                i
            }
            None => {
                let i = self.tracks.len();
                self.tracks
                    .push(Track::with_bounds(&track_id(i + 1), time, total_length));
                i
            }
        };

        if position > 0 {
            self.tracks[position - 1].set_end(Some(time));
        }
        self.renumber_from(position + 1);
        Some(position)
    }

    fn renumber_from(&mut self, from: usize) {
        for (i, track) in self.tracks.iter_mut().enumerate().skip(from) {
            track.set_id(track_id(i + 1));
        }
    }
}

impl<'a> IntoIterator for &'a TrackStore {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
