use std::path::Path;

/// Decides whether a path names a cue sheet that may be rewritten.
pub trait FileTypeCheck {
    fn accept(&self, path: &Path) -> bool;
}

impl<F> FileTypeCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn accept(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts regular files whose extension is one of a configured set, compared
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct CueFileType {
    extensions: Vec<String>,
}

impl CueFileType {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `path` carries an accepted extension, without touching the filesystem.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| e == &ext)
            })
            .unwrap_or(false)
    }
}

impl Default for CueFileType {
    fn default() -> Self {
        Self::new(["cue"])
    }
}

impl FileTypeCheck for CueFileType {
    fn accept(&self, path: &Path) -> bool {
        path.is_file() && self.matches_extension(path)
    }
}
