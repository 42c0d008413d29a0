//! Ordered metadata directive rules.
//!
//! Each rule pairs a metadata key with two patterns: one capturing a double-quoted value
//! and one capturing a bare token. A rule list is evaluated top to bottom and the first
//! rule that matches a line wins. Embedded quotes cannot be escaped.

use std::sync::LazyLock;

use regex::Regex;

use super::metadata::MetaKey;

/// Directive keyword used for the track-level episode label.
pub const EPISODE_DIRECTIVE: &str = "REM tv_episode";

/// A metadata directive and its quoted/bare value patterns.
#[derive(Debug)]
pub struct FieldRule {
    key: MetaKey,
    quoted: Regex,
    bare: Regex,
}

impl FieldRule {
    fn new(key: MetaKey, directive: &str) -> Self {
        let directive = regex::escape(directive);
        Self {
            key,
            quoted: Regex::new(&format!(r#"^{directive}\s+"([^"]*)""#))
                .expect("quoted directive pattern"),
            bare: Regex::new(&format!(r"^{directive}\s+(\S+)")).expect("bare directive pattern"),
        }
    }

    pub fn key(&self) -> MetaKey {
        self.key
    }

    /// The captured value, trying the quoted form before the bare one.
    pub fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.quoted
            .captures(line)
            .or_else(|| self.bare.captures(line))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }
}

/// Rules applied to lines before the `FILE` directive.
pub static SHEET_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(MetaKey::Artist, "PERFORMER"),
        FieldRule::new(MetaKey::Genre, "REM GENRE"),
        FieldRule::new(MetaKey::Title, "TITLE"),
        FieldRule::new(MetaKey::Year, "REM DATE"),
    ]
});

/// Rules applied to lines inside a `TRACK` block.
pub static TRACK_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(MetaKey::Artist, "PERFORMER"),
        FieldRule::new(MetaKey::Genre, "REM GENRE"),
        FieldRule::new(MetaKey::Title, "TITLE"),
        FieldRule::new(MetaKey::TvEpisode, EPISODE_DIRECTIVE),
        FieldRule::new(MetaKey::Year, "REM DATE"),
    ]
});

/// Match `line` against `rules` in order; the first matching rule wins.
pub fn match_field<'a>(line: &'a str, rules: &[FieldRule]) -> Option<(MetaKey, &'a str)> {
    rules
        .iter()
        .find_map(|rule| rule.capture(line).map(|value| (rule.key, value)))
}
