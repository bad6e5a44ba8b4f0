use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{random_shape, Board, Piece, Shape};
use crate::ROW_BONUS;

/// Run state. `Running` and `Paused` both count as running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Discrete intents accepted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    TogglePause,
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

/// What a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Started,
    Paused,
    Resumed,
    /// The active piece moved; its shape is unchanged.
    Moved,
    /// The rotated shape was accepted and the trailing drop step moved the piece.
    Rotated,
    /// The move would have left the board or collided; nothing changed.
    Blocked,
    /// The piece was committed and a new one spawned.
    Locked { cleared: usize },
    /// A new active piece is in place at the spawn position.
    Spawned,
    /// A freshly spawned piece did not fit; the game is over.
    ToppedOut,
    /// The command is not valid in the current phase.
    Ignored,
}

pub struct Game {
    board: Board,
    current: Option<Piece>,
    phase: Phase,
    score: u64,
    lines_cleared: u64,
    generation: u64,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            current: None,
            phase: Phase::Idle,
            score: 0,
            lines_cleared: 0,
            generation: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<&Piece> {
        self.current.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lines_cleared(&self) -> u64 {
        self.lines_cleared
    }

    /// Bumped by every `start`, so a scheduler can tell a restart from a resume.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Start => self.start(),
            Command::TogglePause => self.toggle_pause(),
            Command::MoveLeft => self.move_piece(-1),
            Command::MoveRight => self.move_piece(1),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.tick(),
        }
    }

    /// Resets everything and spawns a fresh piece. Accepted from any phase.
    pub fn start(&mut self) -> Outcome {
        self.board = Board::new();
        self.score = 0;
        self.lines_cleared = 0;
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Running;
        let shape = random_shape(&mut self.rng);
        self.current = Some(Piece::spawn(shape));
        Outcome::Started
    }

    pub fn toggle_pause(&mut self) -> Outcome {
        match self.phase {
            Phase::Running => {
                self.phase = Phase::Paused;
                Outcome::Paused
            }
            Phase::Paused => {
                self.phase = Phase::Running;
                Outcome::Resumed
            }
            Phase::Idle | Phase::GameOver => Outcome::Ignored,
        }
    }

    /// One step of gravity. Commits the piece when it cannot descend.
    pub fn tick(&mut self) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Ignored;
        }
        let Some(current) = self.current.as_ref() else {
            return Outcome::Ignored;
        };
        let next = current.shifted(0, 1);
        if self.board.accepts(&next) {
            self.current = Some(next);
            return Outcome::Moved;
        }
        let cleared = self.lock_piece();
        let shape = random_shape(&mut self.rng);
        match self.spawn_piece(shape) {
            Outcome::ToppedOut => Outcome::ToppedOut,
            _ => Outcome::Locked { cleared },
        }
    }

    /// Horizontal shift by `dx`. Every lateral move also descends one row.
    pub fn move_piece(&mut self, dx: i32) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Ignored;
        }
        let Some(current) = self.current.as_ref() else {
            return Outcome::Ignored;
        };
        let next = current.shifted(dx, 1);
        if self.board.accepts(&next) {
            self.current = Some(next);
            Outcome::Moved
        } else {
            Outcome::Blocked
        }
    }

    /// Rotates in place when the rotated matrix fits, then always ticks.
    /// Returns `Rotated` when the rotation was accepted and the piece then
    /// moved down; a lock or top-out from the tick is reported as is, and a
    /// refused rotation reports only the tick.
    pub fn rotate(&mut self) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Ignored;
        }
        let Some(current) = self.current.as_ref() else {
            return Outcome::Ignored;
        };
        let next = current.rotated();
        let rotated = self.board.accepts(&next);
        if rotated {
            self.current = Some(next);
        }
        match self.tick() {
            Outcome::Moved if rotated => Outcome::Rotated,
            outcome => outcome,
        }
    }

    /// Replaces the active piece with `shape` at the spawn position.
    pub fn spawn(&mut self, shape: Shape) -> Outcome {
        if self.phase != Phase::Running {
            return Outcome::Ignored;
        }
        self.spawn_piece(shape)
    }

    /// Commits a piece straight into the grid without touching the active piece
    /// or the score. Returns false when the placement is invalid or would cover
    /// a cell of the falling piece.
    pub fn place(&mut self, piece: &Piece) -> bool {
        if !self.board.accepts(piece) {
            return false;
        }
        if self.current.as_ref().is_some_and(|current| current.overlaps(piece)) {
            return false;
        }
        self.board.place(piece);
        true
    }

    /// The grid with the active piece drawn over it.
    pub fn snapshot(&self) -> Board {
        match &self.current {
            Some(piece) => self.board.overlay(piece),
            None => self.board.clone(),
        }
    }

    fn spawn_piece(&mut self, shape: Shape) -> Outcome {
        let piece = Piece::spawn(shape);
        let fits = self.board.accepts(&piece);
        // The blocked piece stays visible in the final snapshot.
        self.current = Some(piece);
        if fits {
            Outcome::Spawned
        } else {
            self.phase = Phase::GameOver;
            Outcome::ToppedOut
        }
    }

    fn lock_piece(&mut self) -> usize {
        if let Some(piece) = self.current.take() {
            self.board.place(&piece);
        }
        let cleared = self.board.clear_full_rows();
        self.add_score(cleared);
        cleared
    }

    fn add_score(&mut self, cleared: usize) {
        self.lines_cleared += cleared as u64;
        self.score += ROW_BONUS * cleared as u64;
    }
}
