//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use crate::core::{DEFAULT_SAVE_FILE, RECORD_REJECTED_MOVES};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub level_dir: Option<PathBuf>,
    pub save_path: PathBuf,
    pub log_dir: Option<PathBuf>,
    pub session: SessionConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            level_dir: None,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            log_dir: None,
            session: SessionConfig::default(),
        }
    }
}

/// Rules knobs consumed by [`crate::session::GameSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Push an undo snapshot for attempts that end up rejected.
    pub record_rejected_moves: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_rejected_moves: RECORD_REJECTED_MOVES,
        }
    }
}

impl GameConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SOKOBAN_LEVEL_DIR` - Directory holding `level1.txt`, `level2.txt`, ... (default: built-in levels)
    /// - `SOKOBAN_SAVE_PATH` - Save file (default: `sokoban_save.json`)
    /// - `SOKOBAN_LOG_DIR` - Log directory (default: platform cache directory)
    /// - `SOKOBAN_RECORD_REJECTED_MOVES` - Snapshot rejected moves for undo (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.level_dir = lookup("SOKOBAN_LEVEL_DIR").map(PathBuf::from);
        if let Some(path) = lookup("SOKOBAN_SAVE_PATH") {
            config.save_path = PathBuf::from(path);
        }
        config.log_dir = lookup("SOKOBAN_LOG_DIR").map(PathBuf::from);

        if let Some(record) = lookup("SOKOBAN_RECORD_REJECTED_MOVES").and_then(|v| parse_bool(&v)) {
            config.session.record_rejected_moves = record;
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GameConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config, GameConfig::default());
        assert!(config.session.record_rejected_moves);
        assert_eq!(config.save_path, PathBuf::from("sokoban_save.json"));
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("SOKOBAN_LEVEL_DIR", "/srv/levels"),
            ("SOKOBAN_SAVE_PATH", "slot1.json"),
            ("SOKOBAN_RECORD_REJECTED_MOVES", "off"),
        ]);
        assert_eq!(config.level_dir, Some(PathBuf::from("/srv/levels")));
        assert_eq!(config.save_path, PathBuf::from("slot1.json"));
        assert!(!config.session.record_rejected_moves);
    }

    #[test]
    fn test_unparsable_bool_keeps_default() {
        let config = config_from(&[("SOKOBAN_RECORD_REJECTED_MOVES", "maybe")]);
        assert!(config.session.record_rejected_moves);
    }
}
