mod bounded_grid;
mod bounds;
mod consts;
mod grid;
mod history;
mod model_helpers;
mod models;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use grid::Grid;
pub use history::{MovementHistory, Snapshot};
pub use models::{
    Direction, Entity, FloorTile, GameChangeType, GameState, GameUpdate, MoveRejection, Tile,
    UserAction, Vec2,
};
pub use update::step;
