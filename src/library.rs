//! Companion sheet discovery.
//!
//! A media file with a sibling cue sheet (same stem, sheet extension) is split into
//! [`Fragment`]s, one per track of the sheet.

mod display;
mod model;
mod scan;

pub use display::display_from_fields;
pub use model::Fragment;
pub use scan::{companion_sheet, fragments, probe_length, scan};
