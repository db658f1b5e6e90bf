use crate::core::{Entity, Grid, Tile};
use crate::error::LevelError;

pub const WALL: char = '+';
pub const GOAL: char = '*';
pub const BOX: char = '#';
pub const PLAYER: char = 'W';
pub const FLOOR: char = ' ';

/// Board coordinates are `i32`.
const MAX_DIMENSION: usize = i32::MAX as usize;

/// Display-only glyphs. The level format has no way to start a box or player on a goal.
pub const BOX_ON_GOAL: char = '$';
pub const PLAYER_ON_GOAL: char = 'w';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLevel {
    pub name: String,
    pub grid: Grid,
}

/// Parses the level text format:
///
/// ```text
/// <level name>
/// <rows> <cols>
/// <rows lines of exactly cols characters>
/// ```
///
/// Only checks syntax; see [`crate::level::validate`] for the game rules.
pub fn parse_level(text: &str) -> Result<ParsedLevel, LevelError> {
    let mut lines = text.lines();

    let name = lines
        .next()
        .ok_or_else(|| LevelError::format(1, None, "missing level name line"))?
        .trim()
        .to_string();

    let dimension_line = lines
        .next()
        .ok_or_else(|| LevelError::format(2, None, "missing dimension line"))?;
    let (rows, cols) = parse_dimensions(dimension_line)?;

    let mut tiles = Vec::new();
    for row in 0..rows {
        let line_number = row + 3;
        let line = lines.next().ok_or_else(|| {
            LevelError::format(line_number, None, format!("missing row {row}, expected {cols} characters"))
        })?;

        let found = line.chars().count();
        if found != cols {
            return Err(LevelError::format(
                line_number,
                None,
                format!("row {row} has {found} characters, expected {cols}"),
            ));
        }

        for (col, symbol) in line.chars().enumerate() {
            let tile = tile_from_symbol(symbol).ok_or_else(|| {
                LevelError::format(
                    line_number,
                    Some(col + 1),
                    format!("invalid symbol '{symbol}' at ({row},{col})"),
                )
            })?;
            tiles.push((row, col, tile));
        }
    }

    // Only allocated once every row is present, so the size is bounded by the text.
    let mut grid = Grid::new(cols, rows);
    for (row, col, tile) in tiles {
        grid.set_tile(row, col, tile)
            .map_err(|e| LevelError::format(row + 3, Some(col + 1), e.to_string()))?;
    }

    tracing::debug!(name = %name, rows, cols, "Level parsed");
    Ok(ParsedLevel { name, grid })
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), LevelError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [rows, cols] = parts.as_slice() else {
        return Err(LevelError::format(
            2,
            None,
            "invalid dimension format, expected '<rows> <columns>'",
        ));
    };
    let parse = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| LevelError::format(2, None, format!("invalid dimension '{value}'")))
    };
    let (rows, cols) = (parse(*rows)?, parse(*cols)?);

    if rows > MAX_DIMENSION || cols > MAX_DIMENSION || rows.checked_mul(cols).is_none() {
        return Err(LevelError::format(
            2,
            None,
            format!("dimensions {rows}x{cols} are too large"),
        ));
    }
    Ok((rows, cols))
}

pub fn tile_from_symbol(symbol: char) -> Option<Tile> {
    Some(match symbol {
        WALL => Tile::Wall,
        GOAL => Tile::floor(true),
        BOX => Tile::occupied(false, Entity::Box),
        PLAYER => Tile::occupied(false, Entity::Player),
        FLOOR => Tile::floor(false),
        _ => return None,
    })
}

pub fn symbol_for_tile(tile: &Tile) -> char {
    match tile {
        Tile::Wall => WALL,
        Tile::Floor(floor) => match (floor.occupant, floor.is_goal()) {
            (Some(Entity::Player), false) => PLAYER,
            (Some(Entity::Player), true) => PLAYER_ON_GOAL,
            (Some(Entity::Box), false) => BOX,
            (Some(Entity::Box), true) => BOX_ON_GOAL,
            (None, true) => GOAL,
            (None, false) => FLOOR,
        },
    }
}

/// Board rows in the level dialect, one line per row.
pub fn render_grid(grid: &Grid) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        result.extend(row.iter().map(symbol_for_tile));
        result.push('\n');
    }
    result
}
