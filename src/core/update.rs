use crate::core::models::Tile::{Floor, Wall};
use crate::core::models::{
    Entity, GameChangeType, GameState, GameUpdate, MoveRejection, UserAction, Vec2,
};

/// Applies one player step to `game` in place.
///
/// Validation completes before any tile is touched, so a rejected step leaves
/// `game` exactly as it was. On success the player position and move count are
/// updated alongside the grid.
pub fn step(game: &mut GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.offset(),
    };

    let from = game.player;
    if !game.grid.holds(&from, Entity::Player) {
        return GameUpdate::Error(format!(
            "No player at tracked position ({}, {})",
            from.i, from.j
        ));
    }

    let target = from + dir;
    let Some(dest) = game.grid.get(&target) else {
        return GameUpdate::Rejected(MoveRejection::OutOfBounds);
    };

    let pushing = match dest {
        Wall => return GameUpdate::Rejected(MoveRejection::Wall),
        Floor(floor) => match floor.occupant {
            None => false,
            Some(Entity::Box) => true,
            Some(Entity::Player) => {
                return GameUpdate::Error(format!(
                    "Second player found at ({}, {})",
                    target.i, target.j
                ));
            }
        },
    };

    let beyond = target + dir;
    if pushing {
        match game.grid.get(&beyond) {
            None => return GameUpdate::Rejected(MoveRejection::BoxOutOfBounds),
            Some(Floor(floor)) if floor.is_free() => {}
            Some(_) => return GameUpdate::Rejected(MoveRejection::BoxBlocked),
        }
    }

    // Everything is validated, apply.
    if pushing {
        set_occupant(game, &beyond, Some(Entity::Box));
    }
    set_occupant(game, &target, Some(Entity::Player));
    set_occupant(game, &from, None);

    game.player = target;
    game.move_count += 1;

    GameUpdate::NextState(if pushing {
        GameChangeType::PlayerAndBoxMove
    } else {
        GameChangeType::PlayerMove
    })
}

fn set_occupant(game: &mut GameState, pos: &Vec2, occupant: Option<Entity>) {
    if let Some(Floor(floor)) = game.grid.get_mut(pos) {
        floor.occupant = occupant;
    }
}
