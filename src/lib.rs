//! Sokoban rules engine: board model, move resolution, undo history, level
//! parsing and save files. Rendering and input live in the binary.

pub mod config;
pub mod core;
pub mod error;
pub mod level;
pub mod save;
pub mod session;

#[cfg(test)]
mod test;

pub use crate::config::{GameConfig, SessionConfig};
pub use crate::core::{Direction, GameState, GameUpdate, Grid, Tile, Vec2};
pub use crate::error::{GridError, InvalidLevel, LevelError, SaveError};
pub use crate::level::{LevelSet, LevelStats};
pub use crate::session::{GameEvent, GameSession, LevelProgress, MoveReport, SessionContext};
