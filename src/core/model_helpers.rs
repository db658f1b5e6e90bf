use crate::core::grid::Grid;
use crate::core::models::{Direction, Entity, UserAction, Vec2};

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        vec![
            UserAction::Move(Direction::Up),
            UserAction::Move(Direction::Down),
            UserAction::Move(Direction::Left),
            UserAction::Move(Direction::Right),
        ]
    }
}

impl Grid {
    /// First player occupant in row-major order.
    pub fn find_player(&self) -> Option<Vec2> {
        self.iter()
            .find(|(_, tile)| tile.occupant() == Some(Entity::Player))
            .map(|(pos, _)| pos)
    }

    pub fn count_occupants(&self, entity: Entity) -> usize {
        self.iter()
            .filter(|(_, tile)| tile.occupant() == Some(entity))
            .count()
    }

    pub fn count_goals(&self) -> usize {
        self.iter().filter(|(_, tile)| tile.is_goal()).count()
    }

    pub fn holds(&self, pos: &Vec2, entity: Entity) -> bool {
        matches!(self.get(pos), Some(tile) if tile.occupant() == Some(entity))
    }
}
