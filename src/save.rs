//! Versioned save format.
//!
//! A save is a JSON document:
//! ```text
//! { "version": 1, "level_index": .., "total_score": .., "level_name": "..",
//!   "current": <GameState>, "history": [<GameState>, ...] }
//! ```
//! `history` is ordered oldest first, so the last element is the next undo.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Entity, GameState, SAVE_FORMAT_VERSION};
use crate::error::SaveError;
use crate::session::GameSession;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveData {
    pub version: u32,
    pub level_index: usize,
    pub total_score: u32,
    #[serde(default)]
    pub level_name: String,
    pub current: GameState,
    pub history: Vec<GameState>,
}

#[derive(Deserialize)]
struct SaveHeader {
    version: u32,
}

impl SaveData {
    pub fn capture(session: &GameSession) -> SaveData {
        SaveData {
            version: SAVE_FORMAT_VERSION,
            level_index: session.context().level_index(),
            total_score: session.context().total_score(),
            level_name: session.level_name().to_string(),
            current: session.state().clone(),
            history: session.history().iter().map(|s| s.state().clone()).collect(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, SaveError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Decodes and checks every stored state before handing anything back.
    pub fn decode(blob: &[u8]) -> Result<SaveData, SaveError> {
        let header: SaveHeader = serde_json::from_slice(blob)?;
        if header.version != SAVE_FORMAT_VERSION {
            return Err(SaveError::UnsupportedVersion {
                found: header.version,
                expected: SAVE_FORMAT_VERSION,
            });
        }

        let data: SaveData = serde_json::from_slice(blob)?;
        data.verify()?;
        Ok(data)
    }

    fn verify(&self) -> Result<(), SaveError> {
        if self.level_index == 0 {
            return Err(SaveError::Corrupted("level index must be at least 1".to_string()));
        }
        verify_state(&self.current).map_err(|e| SaveError::Corrupted(format!("current state: {e}")))?;
        for (i, state) in self.history.iter().enumerate() {
            verify_state(state)
                .map_err(|e| SaveError::Corrupted(format!("history entry {i}: {e}")))?;
        }
        Ok(())
    }
}

fn verify_state(state: &GameState) -> Result<(), String> {
    let grid = &state.grid;
    let limit = i32::MAX as usize;
    if grid.width() > limit || grid.height() > limit {
        return Err(format!(
            "grid {}x{} exceeds the coordinate range",
            grid.height(),
            grid.width()
        ));
    }
    if !grid.is_consistent() {
        return Err(format!(
            "tile count does not match {}x{} grid",
            grid.height(),
            grid.width()
        ));
    }
    let players = grid.count_occupants(Entity::Player);
    if players != 1 {
        return Err(format!("expected one player, found {players}"));
    }
    if !grid.holds(&state.player, Entity::Player) {
        return Err(format!(
            "player position ({}, {}) does not hold the player",
            state.player.i, state.player.j
        ));
    }
    Ok(())
}

/// Writes to a sibling temp file then renames, so an earlier save survives a failed write.
pub fn write_save_file(path: &Path, blob: &[u8]) -> Result<(), SaveError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp)?;
    file.write_all(blob)?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn read_save_file(path: &Path) -> Result<Vec<u8>, SaveError> {
    Ok(fs::read(path)?)
}
