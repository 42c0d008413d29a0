//! Read, split and edit cue sheets for single-file albums and mixes.
//!
//! [`cue`] holds the sheet model, parser, serializer and in-place editor.
//! [`library`] finds media files that carry a companion sheet and
//! [`config`] loads the settings shared by both.

pub mod config;
pub mod cue;
pub mod library;
