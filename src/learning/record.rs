use crate::Chips;
use crate::Probability;
use crate::state::Outcome;

/// What the agent has observed about its own results so far.
///
/// `min` and `max` track the extremes of the running chip delta, both
/// starting at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    wins: u32,
    draws: u32,
    losses: u32,
    delta: Chips,
    min: Chips,
    max: Chips,
}

impl Record {
    pub fn wins(&self) -> u32 {
        self.wins
    }
    pub fn draws(&self) -> u32 {
        self.draws
    }
    pub fn losses(&self) -> u32 {
        self.losses
    }
    pub fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
    /// Running sum of settled chip deltas.
    pub fn delta(&self) -> Chips {
        self.delta
    }
    pub fn min(&self) -> Chips {
        self.min
    }
    pub fn max(&self) -> Chips {
        self.max
    }
    pub fn win_rate(&self) -> Probability {
        self.rate(self.wins)
    }
    pub fn draw_rate(&self) -> Probability {
        self.rate(self.draws)
    }
    pub fn loss_rate(&self) -> Probability {
        self.rate(self.losses)
    }
    /// Counts a settled round.
    pub fn settle(&mut self, outcome: Outcome, delta: Chips) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.delta += delta;
        self.min = self.min.min(self.delta);
        self.max = self.max.max(self.delta);
    }
    /// This record with one more `outcome` counted, leaving the chip history alone.
    pub fn counting(&self, outcome: Outcome) -> Self {
        let mut next = *self;
        match outcome {
            Outcome::Win => next.wins += 1,
            Outcome::Draw => next.draws += 1,
            Outcome::Loss => next.losses += 1,
        }
        next
    }
    fn rate(&self, n: u32) -> Probability {
        match self.games() {
            0 => 0.0,
            games => n as Probability / games as Probability,
        }
    }
}
