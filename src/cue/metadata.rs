//! Metadata keys and the key-restricted metadata container shared by sheets and tracks.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A metadata field name understood by cue sheets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKey {
    Artist,
    Genre,
    Title,
    /// The two-digit track ID.
    Track,
    /// Episode label, only valid at track level.
    TvEpisode,
    Year,
}

impl MetaKey {
    /// Keys a sheet may carry.
    pub const SHEET: &'static [MetaKey] = &[Self::Artist, Self::Genre, Self::Title, Self::Year];

    /// Keys a track may carry.
    pub const TRACK: &'static [MetaKey] = &[
        Self::Artist,
        Self::Genre,
        Self::Title,
        Self::Track,
        Self::TvEpisode,
        Self::Year,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Genre => "genre",
            Self::Title => "title",
            Self::Track => "track",
            Self::TvEpisode => "tv_episode",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetaKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(Self::Artist),
            "genre" => Ok(Self::Genre),
            "title" => Ok(Self::Title),
            "track" => Ok(Self::Track),
            "tv_episode" => Ok(Self::TvEpisode),
            "year" => Ok(Self::Year),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

/// A field name that is not a [`MetaKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metadata key '{0}'")]
pub struct UnknownKey(pub String);

/// String metadata restricted to a fixed set of keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    supported: &'static [MetaKey],
    values: BTreeMap<MetaKey, String>,
}

impl Metadata {
    pub fn new(supported: &'static [MetaKey]) -> Self {
        Self {
            supported,
            values: BTreeMap::new(),
        }
    }

    /// Metadata accepting the sheet-level keys.
    pub fn for_sheet() -> Self {
        Self::new(MetaKey::SHEET)
    }

    /// Metadata accepting the track-level keys.
    pub fn for_track() -> Self {
        Self::new(MetaKey::TRACK)
    }

    pub fn supported_keys(&self) -> &'static [MetaKey] {
        self.supported
    }

    pub fn supports(&self, key: MetaKey) -> bool {
        self.supported.contains(&key)
    }

    /// Store `value` under `key`. Returns `false` and stores nothing when the key is
    /// not supported by this container.
    pub fn put(&mut self, key: MetaKey, value: impl Into<String>) -> bool {
        if !self.supports(key) {
            return false;
        }
        self.values.insert(key, value.into());
        true
    }

    pub fn get_string(&self, key: MetaKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Like [`get_string`](Self::get_string) but treats an empty value as absent.
    pub fn present(&self, key: MetaKey) -> Option<&str> {
        self.get_string(key).filter(|v| !v.is_empty())
    }

    pub fn remove(&mut self, key: MetaKey) -> Option<String> {
        self.values.remove(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetaKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
