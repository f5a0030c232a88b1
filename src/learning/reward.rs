use super::policy::softmax;
use super::record::Record;
use super::risk::risk;
use crate::Utility;
use crate::state::Action;
use crate::state::GameState;
use crate::state::Outcome;
use crate::state::Stage;

/// Reward scales for each kind of transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reward {
    pub settle: Utility,
    pub advance: Utility,
    pub round: Utility,
    pub temperature: Utility,
}

impl Reward {
    /// Reward for taking `action` from `prior` and landing in `successor`.
    ///
    /// - Into settlement: a win pays `settle` (scaled by the prior risk when
    ///   the agent hit), a loss after hitting costs `settle`, anything else is 0.
    /// - Into a live hand: `advance` straight from betting, otherwise `advance`
    ///   scaled by how much the successor's risk dominates the prior's.
    /// - Into betting: `round` until both wins and losses have been seen, then
    ///   `round` times the net win-rate.
    pub fn reward(
        &self,
        prior: &GameState,
        action: Action,
        successor: &GameState,
        record: &Record,
    ) -> Utility {
        match successor {
            GameState::Post(s) => match (s.outcome(), action) {
                (Outcome::Win, Action::Hit) => self.settle * risk(prior, action, record),
                (Outcome::Win, _) => self.settle,
                (Outcome::Loss, Action::Hit) => -self.settle,
                (Outcome::Loss, _) => 0.0,
                (Outcome::Draw, _) => 0.0,
            },
            GameState::In(_) => match prior.stage() {
                Stage::PreRound => self.advance,
                _ => {
                    let before = risk(prior, action, record);
                    let after = risk(successor, action, record);
                    let x = softmax(&[before, after], self.temperature);
                    (1.0 - x[1] / (x[0] + x[1])) * self.advance
                }
            },
            GameState::Pre(_) => {
                let wr = record.win_rate();
                let dr = record.draw_rate();
                let lr = record.loss_rate();
                match wr == 0.0 || lr == 0.0 {
                    true => self.round,
                    false => self.round * (wr + dr - lr),
                }
            }
        }
    }
}

impl From<&crate::Config> for Reward {
    fn from(config: &crate::Config) -> Self {
        Self {
            settle: config.settle_bonus,
            advance: config.advance_bonus,
            round: config.round_bonus,
            temperature: config.temperature,
        }
    }
}
