//! Cue sheet reading, splitting and writing.
//!
//! A cue sheet describes how one media file is divided into tracks:
//!
//! ```text
//! PERFORMER "Artist"
//! TITLE "Album"
//! FILE "album.mp3" MP3
//!   TRACK 01 AUDIO
//!     TITLE "Intro"
//!     INDEX 01 00:00:00
//!   TRACK 02 AUDIO
//!     INDEX 01 03:12:40
//! ```
//!
//! [`Sheet`] parses that text into contiguous [`Track`]s with millisecond bounds,
//! inserts new split points, and writes the sheet back. [`Sheet::update`] edits the
//! metadata of a single track in a file on disk.

mod error;
mod fields;
mod filetype;
mod lines;
mod metadata;
mod parser;
mod sheet;
mod store;
mod timecode;
mod track;
mod update;
mod writer;

pub use error::{CueError, Result};
pub use fields::{EPISODE_DIRECTIVE, FieldRule, SHEET_RULES, TRACK_RULES, match_field};
pub use filetype::{CueFileType, FileTypeCheck};
pub use lines::LineSource;
pub use metadata::{MetaKey, Metadata, UnknownKey};
pub use sheet::Sheet;
pub use store::TrackStore;
pub use timecode::{FRAMES_PER_SECOND, to_millis, to_timecode};
pub use track::{Track, track_id};
pub use update::FieldMap;

#[cfg(test)]
mod tests;
