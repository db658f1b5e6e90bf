//! The caller-facing game API: one level in play plus its undo history and
//! the cumulative campaign context.

use std::path::Path;

use crate::config::SessionConfig;
use crate::core::{
    Direction, GameState, GameUpdate, Grid, MovementHistory, Snapshot, UserAction, Vec2, step,
};
use crate::error::{InvalidLevel, LevelError, SaveError};
use crate::level::{LevelSet, load_level};
use crate::save::{SaveData, read_save_file, write_save_file};

/// Cumulative progress across levels. Indices are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionContext {
    level_index: usize,
    total_score: u32,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            level_index: 1,
            total_score: 0,
        }
    }
}

impl SessionContext {
    pub fn new(level_index: usize, total_score: u32) -> SessionContext {
        SessionContext {
            level_index,
            total_score,
        }
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn set_level_index(&mut self, level_index: usize) {
        self.level_index = level_index;
    }

    pub fn add_score(&mut self, moves: u32) {
        self.total_score = self.total_score.saturating_add(moves);
    }

    pub fn reset(&mut self) {
        *self = SessionContext::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    LevelCompleted { level_index: usize, moves: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub update: GameUpdate,
    pub event: Option<GameEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelProgress {
    Loaded(usize),
    Finished,
}

#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    history: MovementHistory,
    context: SessionContext,
    config: SessionConfig,
    level_name: String,
    completed: bool,
    level_scored: bool,
}

impl GameSession {
    /// Starts a session on a single level text.
    pub fn new_game(level_text: &str, config: SessionConfig) -> Result<GameSession, LevelError> {
        let (name, state) = initial_state(level_text)?;
        let completed = state.grid.is_completed();
        Ok(GameSession {
            state,
            history: MovementHistory::new(),
            context: SessionContext::default(),
            config,
            level_name: name,
            completed,
            level_scored: false,
        })
    }

    /// Starts a session on the first level of `levels`.
    pub fn new_campaign(levels: &LevelSet, config: SessionConfig) -> Result<GameSession, LevelError> {
        let entry = levels.get(1)?;
        GameSession::new_game(&entry.text, config)
    }

    /// Replaces the level in play. Nothing changes if the text is rejected.
    pub fn load_level(&mut self, level_text: &str) -> Result<(), LevelError> {
        let (name, state) = initial_state(level_text)?;
        self.completed = state.grid.is_completed();
        self.state = state;
        self.level_name = name;
        self.level_scored = false;
        self.history.clear();
        Ok(())
    }

    pub fn start_level(&mut self, levels: &LevelSet, index: usize) -> Result<(), LevelError> {
        let entry = levels.get(index)?;
        self.load_level(&entry.text)?;
        self.context.set_level_index(index);
        tracing::info!(level = index, name = %self.level_name, "Level started");
        Ok(())
    }

    pub fn advance_level(&mut self, levels: &LevelSet) -> Result<LevelProgress, LevelError> {
        let next = self.context.level_index() + 1;
        if next > levels.len() {
            tracing::info!(score = self.context.total_score(), "All levels completed");
            return Ok(LevelProgress::Finished);
        }
        self.start_level(levels, next)?;
        Ok(LevelProgress::Loaded(next))
    }

    pub fn restart_level(&mut self, levels: &LevelSet) -> Result<(), LevelError> {
        self.start_level(levels, self.context.level_index())
    }

    /// Resets score and level index and starts over from level 1.
    pub fn restart_campaign(&mut self, levels: &LevelSet) -> Result<(), LevelError> {
        let entry = levels.get(1)?;
        self.load_level(&entry.text)?;
        self.context.reset();
        Ok(())
    }

    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        self.apply_move(direction).update.is_success()
    }

    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let before = Snapshot::of(&self.state);
        let record_always = self.config.record_rejected_moves;
        if record_always {
            self.history.push(before.clone());
        }

        let update = step(&mut self.state, UserAction::Move(direction));
        let mut event = None;
        match &update {
            GameUpdate::NextState(change) => {
                if !record_always {
                    self.history.push(before);
                }
                tracing::debug!(
                    ?direction,
                    ?change,
                    row = self.state.player.i,
                    col = self.state.player.j,
                    moves = self.state.move_count,
                    "Player moved"
                );
                event = self.check_completion();
            }
            GameUpdate::Rejected(reason) => {
                tracing::debug!(?direction, %reason, "Move rejected");
            }
            GameUpdate::Error(err) => {
                tracing::warn!(?direction, error = %err, "Move failed");
            }
        }

        MoveReport { update, event }
    }

    fn check_completion(&mut self) -> Option<GameEvent> {
        let completed = self.state.grid.is_completed();
        let entered = completed && !self.completed;
        self.completed = completed;
        if !entered {
            return None;
        }

        let moves = self.state.move_count;
        if !self.level_scored {
            self.context.add_score(moves);
            self.level_scored = true;
        }
        tracing::info!(level = self.context.level_index(), moves, "Level completed");
        Some(GameEvent::LevelCompleted {
            level_index: self.context.level_index(),
            moves,
        })
    }

    /// Restores the most recent snapshot. Returns false when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.state = snapshot.into_state();
        self.completed = self.state.grid.is_completed();
        tracing::debug!(
            row = self.state.player.i,
            col = self.state.player.j,
            moves = self.state.move_count,
            "Move undone"
        );
        true
    }

    pub fn is_completed(&self) -> bool {
        self.state.grid.is_completed()
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn player(&self) -> Vec2 {
        self.state.player
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &MovementHistory {
        &self.history
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn level_name(&self) -> &str {
        &self.level_name
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn save(&self) -> Result<Vec<u8>, SaveError> {
        SaveData::capture(self).encode()
    }

    /// All or nothing: a blob that fails to decode leaves the session untouched.
    pub fn load(&mut self, blob: &[u8]) -> Result<(), SaveError> {
        let data = SaveData::decode(blob)?;
        *self = GameSession::from_data(data, self.config);
        Ok(())
    }

    pub fn from_save(blob: &[u8], config: SessionConfig) -> Result<GameSession, SaveError> {
        let data = SaveData::decode(blob)?;
        Ok(GameSession::from_data(data, config))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let result = self.save().and_then(|blob| write_save_file(path, &blob));
        match &result {
            Ok(()) => tracing::info!(path = %path.display(), "Game saved"),
            Err(e) => tracing::error!(path = %path.display(), error = %e, "Failed to save game"),
        }
        result
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let result = read_save_file(path).and_then(|blob| self.load(&blob));
        match &result {
            Ok(()) => tracing::info!(path = %path.display(), "Game loaded"),
            Err(e) => tracing::error!(path = %path.display(), error = %e, "Failed to load game"),
        }
        result
    }

    fn from_data(data: SaveData, config: SessionConfig) -> GameSession {
        let snapshots = data.history.into_iter().map(Snapshot::from).collect();
        let completed = data.current.grid.is_completed();
        GameSession {
            state: data.current,
            history: MovementHistory::from_snapshots(snapshots),
            context: SessionContext::new(data.level_index, data.total_score),
            config,
            level_name: data.level_name,
            completed,
            level_scored: completed,
        }
    }
}

fn initial_state(level_text: &str) -> Result<(String, GameState), LevelError> {
    let (parsed, stats) = load_level(level_text)?;
    // validation guarantees exactly one player
    let player = parsed
        .grid
        .find_player()
        .ok_or(InvalidLevel::PlayerCount { found: stats.players })?;
    tracing::info!(row = player.i, col = player.j, boxes = stats.boxes, "Player initialized");
    Ok((
        parsed.name,
        GameState {
            grid: parsed.grid,
            player,
            move_count: 0,
        },
    ))
}
