use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;

/// Board coordinate: `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    Player,
    Box,
}

/// A walkable cell. The goal flag is fixed when the tile is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloorTile {
    goal: bool,
    pub occupant: Option<Entity>,
}

impl FloorTile {
    pub fn new(goal: bool) -> FloorTile {
        FloorTile { goal, occupant: None }
    }

    pub fn with_occupant(goal: bool, occupant: Entity) -> FloorTile {
        FloorTile { goal, occupant: Some(occupant) }
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor(FloorTile),
}

impl Default for Tile {
    fn default() -> Self {
        Tile::Floor(FloorTile::default())
    }
}

impl Tile {
    pub fn floor(goal: bool) -> Tile {
        Tile::Floor(FloorTile::new(goal))
    }

    pub fn occupied(goal: bool, occupant: Entity) -> Tile {
        Tile::Floor(FloorTile::with_occupant(goal, occupant))
    }

    pub fn occupant(&self) -> Option<Entity> {
        match self {
            Tile::Wall => None,
            Tile::Floor(floor) => floor.occupant,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Tile::Floor(floor) if floor.is_goal())
    }
}

/// Everything that changes while a level is played. Cloning it is a deep copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub player: Vec2,
    pub move_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameChangeType),
    Rejected(MoveRejection),
    Error(String),
}

impl GameUpdate {
    pub fn is_success(&self) -> bool {
        matches!(self, GameUpdate::NextState(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// Why a step was refused. These are ordinary gameplay outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    OutOfBounds,
    Wall,
    BoxOutOfBounds,
    BoxBlocked,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::OutOfBounds => "Cannot move out of bounds",
            MoveRejection::Wall => "Cannot walk into a wall",
            MoveRejection::BoxOutOfBounds => "Cannot push box out of bounds",
            MoveRejection::BoxBlocked => "Cannot push box",
        };
        f.write_str(reason)
    }
}
