mod level_set;
mod parser;
mod validator;

pub use level_set::{LevelEntry, LevelSet};
pub use parser::{
    BOX, BOX_ON_GOAL, FLOOR, GOAL, PLAYER, PLAYER_ON_GOAL, ParsedLevel, WALL, parse_level,
    render_grid, symbol_for_tile, tile_from_symbol,
};
pub use validator::{LevelStats, validate};

use crate::error::LevelError;

/// Parses then validates. Either step failing leaves nothing behind.
pub fn load_level(text: &str) -> Result<(ParsedLevel, LevelStats), LevelError> {
    let parsed = parse_level(text)?;
    let stats = validate(&parsed.grid)?;
    Ok((parsed, stats))
}
