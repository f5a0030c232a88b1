use crate::Probability;
use crate::Utility;
use crate::state::Action;
use crate::state::Stage;
use crate::table::Triad;
use rand::Rng;

/// Temperature-scaled softmax.
///
/// Shifted by the maximum before exponentiating, which leaves the result
/// unchanged but keeps large qvalues at low temperatures finite.
pub fn softmax(values: &[Utility], temperature: Utility) -> Vec<Probability> {
    let max = values.iter().copied().fold(Utility::NEG_INFINITY, Utility::max);
    let exps = values
        .iter()
        .map(|v| ((v - max) / temperature).exp())
        .collect::<Vec<_>>();
    let sum = exps.iter().sum::<Utility>();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Stochastic action choice from a triad's qvalues.
///
/// The sampler is not inverse-CDF sampling. Actions are sorted by ascending
/// probability and the first whose own probability exceeds a uniform draw
/// wins; if none does, the most likely action is taken. Among equally likely
/// actions this favors the first and the last in stage order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    temperature: Utility,
}

impl Policy {
    pub fn new(temperature: Utility) -> Self {
        Self { temperature }
    }
    /// Actions of `stage` paired with their softmax probabilities, least likely first.
    pub fn distribution(&self, stage: Stage, triad: &Triad) -> Vec<(Action, Probability)> {
        let mut dist = stage
            .actions()
            .iter()
            .copied()
            .zip(softmax(triad.qvalues(), self.temperature))
            .collect::<Vec<_>>();
        dist.sort_by(|a, b| a.1.total_cmp(&b.1));
        dist
    }
    pub fn choose<R: Rng + ?Sized>(&self, stage: Stage, triad: &Triad, rng: &mut R) -> Action {
        Self::pick(&self.distribution(stage, triad), rng.random::<Probability>())
    }
    /// Applies the threshold rule to an ascending distribution and a draw `p`.
    pub fn pick(dist: &[(Action, Probability)], p: Probability) -> Action {
        dist.iter()
            .find(|&&(_, prob)| p < prob)
            .or_else(|| dist.last())
            .map(|&(action, _)| action)
            .expect("every stage has at least one action")
    }
}
