mod input;

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub use input::{command_for, Key};

use crate::game::{DropTimer, Game};
use crate::ui::draw_game;
use crate::Settings;

type Term = Terminal<CrosstermBackend<Stdout>>;

const POLL_CAP: Duration = Duration::from_millis(50);

pub fn run(settings: &Settings) -> Result<()> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), settings)
}

fn run_loop(terminal: &mut Term, settings: &Settings) -> Result<()> {
    let mut game = match settings.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    let mut timer = DropTimer::new(Duration::from_millis(settings.drop_ms));

    loop {
        terminal.draw(|frame| draw_game(frame, &game))?;

        let now = Instant::now();
        let wait = timer.until_next(now).map_or(POLL_CAP, |d| d.min(POLL_CAP));
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match input::classify(key.code) {
                    Key::Quit => break,
                    Key::Command(command) => {
                        if input::accepts(&game, command) {
                            game.apply(command);
                        }
                    }
                    Key::Other => {}
                },
                _ => {}
            }
        }

        let now = Instant::now();
        timer.sync(game.phase(), game.generation(), now);
        if timer.fire(now) {
            game.tick();
            timer.sync(game.phase(), game.generation(), now);
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("creating terminal")?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
