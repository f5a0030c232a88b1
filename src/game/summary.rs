use crate::Chips;
use crate::Probability;
use crate::learning::Record;
use serde::Serialize;

/// End-of-session statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub rounds: usize,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub win_rate: Probability,
    pub draw_rate: Probability,
    pub loss_rate: Probability,
    pub delta: Chips,
    pub agent: Chips,
    pub house: Chips,
}

impl Summary {
    pub fn new(rounds: usize, record: &Record, agent: Chips, house: Chips) -> Self {
        Self {
            rounds,
            wins: record.wins(),
            draws: record.draws(),
            losses: record.losses(),
            win_rate: record.win_rate(),
            draw_rate: record.draw_rate(),
            loss_rate: record.loss_rate(),
            delta: record.delta(),
            agent,
            house,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "rounds {:>8}", self.rounds)?;
        writeln!(f, "wins   {:>8} {:>6.2}%", self.wins, self.win_rate * 100.)?;
        writeln!(f, "draws  {:>8} {:>6.2}%", self.draws, self.draw_rate * 100.)?;
        writeln!(f, "losses {:>8} {:>6.2}%", self.losses, self.loss_rate * 100.)?;
        writeln!(f, "delta  {:>+8}", self.delta)?;
        write!(f, "chips  {:>8} / {}", self.agent, self.house)
    }
}
