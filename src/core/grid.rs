use serde::{Deserialize, Serialize};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::{Entity, Tile, Vec2};
use crate::error::GridError;

/// The board of one puzzle. Its dimensions are fixed unless [`Grid::resize`] is called.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    tiles: BoundedGrid<Tile>,
}

impl Grid {
    /// A `width` x `height` board of empty, non-goal floor.
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            tiles: BoundedGrid::new(BoundsOriginRoot::new(width, height), Tile::default()),
        }
    }

    pub fn width(&self) -> usize {
        self.tiles.size().width
    }

    pub fn height(&self) -> usize {
        self.tiles.size().height
    }

    pub fn get(&self, pos: &Vec2) -> Option<&Tile> {
        self.tiles.get(pos)
    }

    pub fn get_mut(&mut self, pos: &Vec2) -> Option<&mut Tile> {
        self.tiles.get_mut(pos)
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Result<Tile, GridError> {
        let pos = self.checked_pos(row, col)?;
        Ok(self.tiles[&pos])
    }

    /// Replaces a tile without checking that the board stays legal.
    pub fn set_tile(&mut self, row: usize, col: usize, tile: Tile) -> Result<(), GridError> {
        let pos = self.checked_pos(row, col)?;
        self.tiles[&pos] = tile;
        Ok(())
    }

    /// Reallocates the board with new dimensions. All existing tiles are discarded.
    pub fn resize(&mut self, width: usize, height: usize) {
        tracing::debug!(width, height, "Grid resized, previous tiles discarded");
        *self = Grid::new(width, height);
    }

    /// True iff every goal tile holds a box.
    pub fn is_completed(&self) -> bool {
        self.tiles.iter().all(|(_, tile)| match tile {
            Tile::Floor(floor) if floor.is_goal() => floor.occupant == Some(Entity::Box),
            _ => true,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &Tile)> {
        self.tiles.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.rows()
    }

    pub fn is_consistent(&self) -> bool {
        self.tiles.is_consistent()
    }

    fn checked_pos(&self, row: usize, col: usize) -> Result<Vec2, GridError> {
        if row >= self.height() || col >= self.width() {
            return Err(GridError::OutOfRange {
                row,
                col,
                height: self.height(),
                width: self.width(),
            });
        }
        Ok(Vec2 { i: row as i32, j: col as i32 })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn one_goal_grid() -> Grid {
        let mut grid = Grid::new(3, 1);
        grid.set_tile(0, 0, Tile::occupied(false, Entity::Player)).unwrap();
        grid.set_tile(0, 1, Tile::occupied(false, Entity::Box)).unwrap();
        grid.set_tile(0, 2, Tile::floor(true)).unwrap();
        grid
    }

    #[test]
    fn test_tile_at_out_of_range() {
        let grid = Grid::new(3, 2);
        assert_eq!(
            grid.tile_at(2, 0),
            Err(GridError::OutOfRange { row: 2, col: 0, height: 2, width: 3 })
        );
        assert!(grid.tile_at(0, 3).is_err());
        assert_eq!(grid.tile_at(1, 2), Ok(Tile::floor(false)));
    }

    #[test]
    fn test_completion_flips_with_goals() {
        let mut grid = one_goal_grid();
        assert!(!grid.is_completed());

        grid.set_tile(0, 2, Tile::occupied(true, Entity::Box)).unwrap();
        grid.set_tile(0, 1, Tile::floor(false)).unwrap();
        assert!(grid.is_completed());

        // a fresh unmatched goal
        grid.set_tile(0, 1, Tile::floor(true)).unwrap();
        assert!(!grid.is_completed());

        grid.set_tile(0, 1, Tile::floor(false)).unwrap();
        assert!(grid.is_completed());
    }

    #[test]
    fn test_player_on_goal_is_not_completion() {
        let mut grid = Grid::new(1, 1);
        grid.set_tile(0, 0, Tile::occupied(true, Entity::Player)).unwrap();
        assert!(!grid.is_completed());
    }

    #[test]
    fn test_resize_discards_tiles() {
        let mut grid = one_goal_grid();
        grid.resize(2, 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert!(grid.iter().all(|(_, tile)| *tile == Tile::floor(false)));
    }
}
