use sokoban::core::GameChangeType;
use sokoban::session::GameSession;

pub struct GameRenderState<'a> {
    pub session: &'a GameSession,
    pub total_levels: usize,
    pub won: bool,
    pub finished: bool,
    pub message: Option<String>,
    pub last_change: Option<GameChangeType>,
}
