use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use super::error::Result;
use super::metadata::Metadata;
use super::parser;
use super::store::TrackStore;
use super::track::Track;
use super::writer;

/// A cue sheet: sheet-level metadata, the media file name and its tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub(crate) metadata: Metadata,
    pub(crate) media: Option<String>,
    pub(crate) tracks: TrackStore,
    pub(crate) total_length: Option<u64>,
}

impl Sheet {
    /// An empty sheet for media of `total_length` milliseconds (`None` or 0 when unknown).
    pub fn new(total_length: Option<u64>) -> Self {
        Self {
            metadata: Metadata::for_sheet(),
            media: None,
            tracks: TrackStore::new(),
            total_length: total_length.filter(|&len| len > 0),
        }
    }

    /// Parse a sheet from `reader`.
    pub fn from_reader<R: Read>(reader: R, total_length: Option<u64>) -> Result<Self> {
        let mut sheet = Self::new(total_length);
        parser::parse(&mut sheet, BufReader::new(reader))?;
        Ok(sheet)
    }

    /// Parse the sheet stored at `path`.
    pub fn open(path: &Path, total_length: Option<u64>) -> Result<Self> {
        debug!(path = %path.display(), "reading cue sheet");
        let file = File::open(path)?;
        Self::from_reader(file, total_length)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Media file name from the `FILE` directive, without quotes.
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    pub fn set_media(&mut self, media: impl Into<String>) {
        self.media = Some(media.into());
    }

    pub fn total_length(&self) -> Option<u64> {
        self.total_length
    }

    pub fn tracks(&self) -> &[Track] {
        self.tracks.as_slice()
    }

    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.get(id)
    }

    pub fn track_mut(&mut self, id: &str) -> Option<&mut Track> {
        self.tracks.get_mut(id)
    }

    /// Split the sheet at `time_ms` and return the new track.
    ///
    /// Returns `None` and leaves the sheet unchanged when `time_ms` is not positive,
    /// already starts a track, or is at or beyond the known total length (a track there
    /// would have no duration).
    pub fn insert_track(&mut self, time_ms: i64) -> Option<&Track> {
        let position = self.tracks.insert(time_ms, self.total_length)?;
        self.tracks.as_slice().get(position)
    }

    /// Serialize the sheet into `writer`, naming `media` in the `FILE` directive.
    pub fn write_to<W: Write>(&self, writer: &mut W, media: &str) -> Result<()> {
        writer::write_sheet(writer, self, Some(media))?;
        Ok(())
    }

    /// Write the sheet to `path`, truncating any existing file.
    pub fn save(&self, path: &Path, media: &str) -> Result<()> {
        debug!(path = %path.display(), tracks = self.tracks.len(), "writing cue sheet");
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out, media)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        writer::write_sheet(&mut buf, self, self.media()).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
