use serde::{Deserialize, Serialize};

use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area()];
        BoundedGrid { bounds, cells }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &Vec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    /// Cell storage length agrees with the bounds. Only false for decoded data.
    pub fn is_consistent(&self) -> bool {
        self.bounds.checked_area() == Some(self.cells.len())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let bounds = self.bounds;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (bounds.position_of(index), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on 0
        self.cells.chunks(self.bounds.width.max(1))
    }
}

impl<T> BoundedGrid<T> {
    fn checked_index(&self, pos: &Vec2) -> usize {
        assert!(
            self.bounds.contains(pos),
            "position ({}, {}) is outside the {}x{} grid",
            pos.i,
            pos.j,
            self.bounds.height,
            self.bounds.width
        );
        self.bounds.index_of(pos)
    }
}

/// Panics when `index` is outside the bounds. Use [`BoundedGrid::get`] for untrusted positions.
impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.checked_index(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let index = self.checked_index(index);
        &mut self.cells[index]
    }
}
