use std::path::Path;

use cuecut::config;

/// Load settings from `explicit` (or the resolved default path) and the environment.
///
/// Never fails: a broken or invalid config falls back to defaults with a warning.
pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    let loaded = match explicit {
        Some(path) => config::Settings::load_from(Some(path)),
        None => config::Settings::load(),
    };

    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("cuecut: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            eprintln!("cuecut: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
