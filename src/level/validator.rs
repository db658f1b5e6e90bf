use crate::core::{Entity, Grid};
use crate::error::InvalidLevel;

/// Entity and goal counts of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelStats {
    pub players: usize,
    pub boxes: usize,
    pub goals: usize,
}

impl LevelStats {
    pub fn of(grid: &Grid) -> LevelStats {
        LevelStats {
            players: grid.count_occupants(Entity::Player),
            boxes: grid.count_occupants(Entity::Box),
            goals: grid.count_goals(),
        }
    }
}

/// Exactly one player, and as many boxes as goals with at least one of each.
pub fn validate(grid: &Grid) -> Result<LevelStats, InvalidLevel> {
    let stats = LevelStats::of(grid);
    if stats.players != 1 {
        return Err(InvalidLevel::PlayerCount { found: stats.players });
    }
    if stats.boxes == 0 || stats.goals == 0 || stats.boxes != stats.goals {
        return Err(InvalidLevel::BoxGoalImbalance {
            boxes: stats.boxes,
            goals: stats.goals,
        });
    }
    Ok(stats)
}
