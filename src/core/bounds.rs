use serde::{Deserialize, Serialize};

use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundsOriginRoot {
    pub width: usize,
    pub height: usize,
}

impl BoundsOriginRoot {
    pub fn new(width: usize, height: usize) -> BoundsOriginRoot {
        BoundsOriginRoot { width, height }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && (pos.i as usize) < self.height && pos.j >= 0 && (pos.j as usize) < self.width
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// `None` when the cell count does not fit in `usize`. Decoded bounds are untrusted.
    pub fn checked_area(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    pub fn index_of(&self, pos: &Vec2) -> usize {
        pos.i as usize * self.width + pos.j as usize
    }

    pub fn position_of(&self, index: usize) -> Vec2 {
        Vec2 {
            i: (index / self.width) as i32,
            j: (index % self.width) as i32,
        }
    }
}
