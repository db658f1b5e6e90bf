use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use sokoban::core::{Direction, UserAction};
use sokoban::level::render_grid;
use std::io;

use crate::models::GameRenderState;

pub type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub fn setup_terminal() -> Result<ConsoleTerminal> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(terminal: &mut ConsoleTerminal, state: &GameRenderState) -> Result<()> {
    let session = state.session;
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(f.area());

        // Game area
        let title = format!(
            "Sokoban - Level {}/{}: {}",
            session.context().level_index(),
            state.total_levels,
            session.level_name()
        );
        let game_paragraph = Paragraph::new(render_grid(session.grid()))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Status
        let mut status = format!(
            "Moves: {} | Score: {} | Undo: {}",
            session.move_count(),
            session.context().total_score(),
            session.history().len()
        );
        if let Some(change_type) = &state.last_change {
            status = format!("{} | Last: {:?}", status, change_type);
        }
        if let Some(message) = &state.message {
            status = format!("{} | {}", status, message);
        }
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.finished {
            "All levels completed! Press any key to quit.".to_string()
        } else if state.won {
            "Level completed! Press any key for the next level.".to_string()
        } else {
            "Move: WASD/Arrows | U: undo | R: restart | N: new game | K: save | L: load | Q: quit"
                .to_string()
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Undo,
    Restart,
    NewGame,
    Save,
    Load,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NewGame,
                KeyCode::Char('k') | KeyCode::Char('K') => ConsoleInput::Save,
                KeyCode::Char('l') | KeyCode::Char('L') => ConsoleInput::Load,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Blocks until any key other than a poll timeout arrives.
pub fn wait_for_key() -> Result<()> {
    loop {
        match handle_input()? {
            ConsoleInput::Timeout => {}
            _ => return Ok(()),
        }
    }
}
