use crossterm::event::KeyCode;

use crate::game::{Command, Game, Phase};

/// What a key press means to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Command(Command),
    Quit,
    Other,
}

pub fn classify(code: KeyCode) -> Key {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Key::Quit,
        code => command_for(code).map_or(Key::Other, Key::Command),
    }
}

pub fn command_for(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::Rotate),
        KeyCode::Down => Some(Command::SoftDrop),
        KeyCode::Enter | KeyCode::Char('s') => Some(Command::Start),
        KeyCode::Char('p') => Some(Command::TogglePause),
        _ => None,
    }
}

/// Piece controls only reach the game while it is running and unpaused.
/// Lifecycle commands always go through.
pub fn accepts(game: &Game, command: Command) -> bool {
    match command {
        Command::Start | Command::TogglePause => true,
        Command::MoveLeft | Command::MoveRight | Command::Rotate | Command::SoftDrop => {
            game.phase() == Phase::Running
        }
    }
}
