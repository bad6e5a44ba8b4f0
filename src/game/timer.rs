use std::time::{Duration, Instant};

use crate::game::Phase;

/// The automatic drop schedule. Armed only while the game is `Running`; at most
/// one deadline exists at a time, so re-arming replaces rather than stacks.
#[derive(Debug, Clone)]
pub struct DropTimer {
    interval: Duration,
    deadline: Option<Instant>,
    generation: u64,
}

impl DropTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
            generation: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Brings the schedule in line with the game after a command. A new
    /// `generation` means the game was restarted, which always re-arms.
    pub fn sync(&mut self, phase: Phase, generation: u64, now: Instant) {
        let restarted = generation != self.generation;
        self.generation = generation;
        match phase {
            Phase::Running if restarted || !self.is_armed() => self.arm(now),
            Phase::Running => {}
            Phase::Idle | Phase::Paused | Phase::GameOver => self.cancel(),
        }
    }

    /// True once the deadline has passed; the next deadline is then scheduled
    /// from `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.arm(now);
                true
            }
            _ => false,
        }
    }

    /// Time left before the next drop, if armed.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
