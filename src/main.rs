// Terminal Sokoban
// Controls: W/A/S/D or arrow keys to move, U undo, R restart, N new game, K save, L load, Q quit.
// Tiles: '+' wall, 'W' player, '#' box, '*' goal, '$' box on goal, 'w' player on goal, ' ' floor.

mod console_interface;
mod models;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use sokoban::config::GameConfig;
use sokoban::core::{GameUpdate, LOG_FILE_NAME, UserAction};
use sokoban::level::{LevelSet, load_level};
use sokoban::session::{GameEvent, GameSession, LevelProgress};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    ConsoleTerminal, cleanup_terminal, handle_input, render_game, setup_terminal, wait_for_key,
};
use crate::models::GameRenderState;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();
    let config = GameConfig::from_env();

    let mut args = std::env::args().skip(1);
    let switch = args.next().unwrap_or("interactive".to_string());

    match switch.as_str() {
        "validate" => {
            let Some(path) = args.next() else {
                bail!("usage: sokoban validate <level file>");
            };
            return run_validate(PathBuf::from(path));
        }
        "interactive" => {}
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'validate <file>'. defaulting to interactive",
                switch
            );
        }
    }

    let _guard = setup_logging(&config)?;
    let levels = match &config.level_dir {
        Some(dir) => LevelSet::from_dir(dir)?,
        None => LevelSet::built_in(),
    };
    let mut session = GameSession::new_campaign(&levels, config.session)?;

    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut terminal, &mut session, &levels, &config);
    cleanup_terminal()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Game stopped");
    }
    result
}

fn run_validate(path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let (parsed, stats) =
        load_level(&text).with_context(|| format!("{} is not a valid level", path.display()))?;

    println!(
        "{}: '{}' {}x{}, {} box(es), {} goal(s)",
        path.display(),
        parsed.name,
        parsed.grid.height(),
        parsed.grid.width(),
        stats.boxes,
        stats.goals
    );
    Ok(())
}

fn run_interactive(
    terminal: &mut ConsoleTerminal,
    session: &mut GameSession,
    levels: &LevelSet,
    config: &GameConfig,
) -> Result<()> {
    let mut message: Option<String> = None;
    let mut last_change = None;

    loop {
        render_game(terminal, &GameRenderState {
            session,
            total_levels: levels.len(),
            won: false,
            finished: false,
            message: message.clone(),
            last_change,
        })?;

        match handle_input()? {
            Quit => break,
            UserAction(UserAction::Move(direction)) => {
                let report = session.apply_move(direction);
                message = match report.update {
                    GameUpdate::NextState(change) => {
                        last_change = Some(change);
                        None
                    }
                    GameUpdate::Rejected(reason) => Some(reason.to_string()),
                    GameUpdate::Error(err) => Some(format!("Error: {}", err)),
                };

                if let Some(GameEvent::LevelCompleted { level_index, moves }) = report.event {
                    let progress = finish_level(terminal, session, levels, level_index, moves)?;
                    if progress == LevelProgress::Finished {
                        break;
                    }
                    message = None;
                    last_change = None;
                }
            }
            Undo => {
                message = (!session.undo()).then(|| "Nothing to undo".to_string());
                last_change = None;
            }
            Restart => {
                session.restart_level(levels)?;
                message = Some("Level restarted".to_string());
                last_change = None;
            }
            NewGame => {
                session.restart_campaign(levels)?;
                message = Some("New game".to_string());
                last_change = None;
            }
            Save => {
                message = Some(match session.save_to_file(&config.save_path) {
                    Ok(()) => format!("Saved to {}", config.save_path.display()),
                    Err(e) => format!("Save failed: {}", e),
                });
            }
            Load => {
                message = Some(match session.load_from_file(&config.save_path) {
                    Ok(()) => format!("Loaded {}", config.save_path.display()),
                    Err(e) => format!("Load failed: {}", e),
                });
                last_change = None;
            }
            Timeout | Unknown => {
                // No input, continue polling
            }
        }
    }

    Ok(())
}

/// Shows the completed board, waits for a key, then loads the next level.
fn finish_level(
    terminal: &mut ConsoleTerminal,
    session: &mut GameSession,
    levels: &LevelSet,
    level_index: usize,
    moves: u32,
) -> Result<LevelProgress> {
    render_game(terminal, &GameRenderState {
        session,
        total_levels: levels.len(),
        won: true,
        finished: false,
        message: Some(format!("Level {} completed in {} moves", level_index, moves)),
        last_change: None,
    })?;
    wait_for_key()?;

    let progress = session.advance_level(levels)?;
    if progress == LevelProgress::Finished {
        render_game(terminal, &GameRenderState {
            session,
            total_levels: levels.len(),
            won: true,
            finished: true,
            message: Some(format!("Final score: {}", session.context().total_score())),
            last_change: None,
        })?;
        wait_for_key()?;
    }
    Ok(progress)
}

/// Logs go to a file, the terminal belongs to the game.
fn setup_logging(config: &GameConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(get_log_directory);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/{}", log_dir.display(), LOG_FILE_NAME);
    Ok(guard)
}

/// Get the platform-specific log directory
fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/sokoban/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("sokoban/logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache/sokoban/logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("sokoban").join("logs");
        }
    }

    PathBuf::from("/tmp/sokoban/logs")
}
