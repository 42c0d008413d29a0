use std::path::PathBuf;
use std::time::Duration;

/// One track of a media file, located through its companion cue sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub media: PathBuf,
    pub sheet: PathBuf,
    pub id: String,
    pub start: Duration,
    /// `None` when neither a following track nor the media length bounds it.
    pub end: Option<Duration>,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
    pub episode: Option<String>,
    pub display: String,
}

impl Fragment {
    pub fn duration(&self) -> Option<Duration> {
        self.end.map(|end| end.saturating_sub(self.start))
    }
}
