use super::metadata::{MetaKey, Metadata};

/// Two-digit decimal ID for the track at 1-based position `n`.
pub fn track_id(n: usize) -> String {
    format!("{n:02}")
}

/// A contiguous segment of the media file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    start: u64,
    end: Option<u64>,
    metadata: Metadata,
}

impl Track {
    /// An empty track starting at 0 with an unknown end.
    pub fn new(id: &str) -> Self {
        let mut metadata = Metadata::for_track();
        metadata.put(MetaKey::Track, id);
        Self {
            start: 0,
            end: None,
            metadata,
        }
    }

    pub fn with_bounds(id: &str, start: u64, end: Option<u64>) -> Self {
        let mut track = Self::new(id);
        track.start = start;
        track.end = end;
        track
    }

    pub fn id(&self) -> &str {
        self.metadata.get_string(MetaKey::Track).unwrap_or_default()
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.metadata.put(MetaKey::Track, id);
    }

    /// Start offset in milliseconds.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// End offset in milliseconds, `None` when unknown.
    pub fn end(&self) -> Option<u64> {
        self.end
    }

    pub(crate) fn set_start(&mut self, start: u64) {
        self.start = start;
    }

    pub(crate) fn set_end(&mut self, end: Option<u64>) {
        self.end = end;
    }

    /// Length in milliseconds, 0 when the end is unknown.
    pub fn duration(&self) -> u64 {
        self.end.map_or(0, |end| end.saturating_sub(self.start))
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Keys that may be set on a track.
    pub fn supported_keys() -> &'static [MetaKey] {
        MetaKey::TRACK
    }
}
