use super::payout::payout;
use super::record::Record;
use super::reward::Reward;
use super::risk::risk;
use crate::Config;
use crate::Result;
use crate::Utility;
use crate::state::GameState;
use crate::table::Triad;

/// The incremental update rule applied on every observed transition.
///
/// For each action `a` of the prior stage:
///
/// ```text
/// w  = (1 - α)·w + α·risk(prior, a)
/// b  = (1 - β)·b + β·payout(prior, a)
/// td = q + η·(reward(prior, a, next) + γ·(q' - q))
/// q  = w·td + b
/// ```
///
/// where `q'` is the successor's qvalue in the same slot. When the successor
/// stage has fewer actions than that slot, its best qvalue stands in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    pub alpha: Utility,
    pub beta: Utility,
    pub learning_rate: Utility,
    pub discount: Utility,
    pub payout: Utility,
    pub reward: Reward,
}

impl Update {
    /// The prior triad after observing `prior → successor`.
    pub fn apply(
        &self,
        prior: &GameState,
        before: &Triad,
        successor: &GameState,
        after: &Triad,
        record: &Record,
    ) -> Result<Triad> {
        before.check(prior.stage())?;
        after.check(successor.stage())?;
        let mut triad = before.clone();
        for &action in prior.stage().actions() {
            let i = action.index();
            let weight = (1.0 - self.alpha) * before.weight(i)
                + self.alpha * risk(prior, action, record);
            let bias = (1.0 - self.beta) * before.bias(i)
                + self.beta * payout(prior, action, record, self.payout);
            let reward = self.reward.reward(prior, action, successor, record);
            let q = before.qvalue(i);
            let next = Self::successor(after, i);
            let td = q + self.learning_rate * (reward + self.discount * (next - q));
            triad.set(i, weight, bias, weight * td + bias);
        }
        Ok(triad)
    }

    fn successor(after: &Triad, i: usize) -> Utility {
        after.qvalues().get(i).copied().unwrap_or_else(|| {
            after
                .qvalues()
                .iter()
                .copied()
                .fold(Utility::NEG_INFINITY, Utility::max)
        })
    }
}

impl From<&Config> for Update {
    fn from(config: &Config) -> Self {
        Self {
            alpha: config.alpha,
            beta: config.beta,
            learning_rate: config.learning_rate,
            discount: config.discount,
            payout: config.payout,
            reward: Reward::from(config),
        }
    }
}
