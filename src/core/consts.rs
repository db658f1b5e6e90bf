pub const SAVE_FORMAT_VERSION: u32 = 1;
pub const DEFAULT_SAVE_FILE: &str = "sokoban_save.json";
pub const LOG_FILE_NAME: &str = "sokoban.log";
/// Rejected attempts still push a snapshot unless configured otherwise.
pub const RECORD_REJECTED_MOVES: bool = true;
