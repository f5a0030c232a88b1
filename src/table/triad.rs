use crate::Error;
use crate::Utility;
use crate::state::Stage;
use rand::Rng;

/// Learned parameters for one state: a weight, a bias, and a qvalue per action.
///
/// All three arrays always have the same length, which matches the number of
/// actions at the stage the triad belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Triad {
    weights: Vec<Utility>,
    biases: Vec<Utility>,
    qvalues: Vec<Utility>,
}

impl Triad {
    /// Fresh parameters for a state never seen before.
    ///
    /// Weights and biases are uniform in [0, 1]. Qvalues start at zero, except
    /// that the betting stage starts its only action at one.
    pub fn seeded<R: Rng + ?Sized>(stage: Stage, rng: &mut R) -> Self {
        let n = stage.arity();
        let weights = (0..n).map(|_| rng.random::<Utility>()).collect();
        let biases = (0..n).map(|_| rng.random::<Utility>()).collect();
        let mut qvalues = vec![0.0; n];
        if stage == Stage::PreRound {
            qvalues[0] = 1.0;
        }
        Self {
            weights,
            biases,
            qvalues,
        }
    }
    pub fn arity(&self) -> usize {
        self.qvalues.len()
    }
    pub fn weights(&self) -> &[Utility] {
        &self.weights
    }
    pub fn biases(&self) -> &[Utility] {
        &self.biases
    }
    pub fn qvalues(&self) -> &[Utility] {
        &self.qvalues
    }
    pub fn weight(&self, i: usize) -> Utility {
        self.weights[i]
    }
    pub fn bias(&self, i: usize) -> Utility {
        self.biases[i]
    }
    pub fn qvalue(&self, i: usize) -> Utility {
        self.qvalues[i]
    }
    /// Overwrites the parameters of action `i`.
    pub fn set(&mut self, i: usize, weight: Utility, bias: Utility, qvalue: Utility) {
        self.weights[i] = weight;
        self.biases[i] = bias;
        self.qvalues[i] = qvalue;
    }
    /// Fails unless this triad has one slot per action of `stage`.
    pub fn check(&self, stage: Stage) -> Result<(), Error> {
        match self.arity() == stage.arity() {
            true => Ok(()),
            false => Err(Error::invalid(format!(
                "{} triad has {} slots, expected {}",
                stage,
                self.arity(),
                stage.arity()
            ))),
        }
    }
}

/// (weights, biases, qvalues) construction, rejecting ragged or empty arrays
impl TryFrom<(Vec<Utility>, Vec<Utility>, Vec<Utility>)> for Triad {
    type Error = Error;
    fn try_from(
        (weights, biases, qvalues): (Vec<Utility>, Vec<Utility>, Vec<Utility>),
    ) -> Result<Self, Self::Error> {
        let n = qvalues.len();
        match n > 0 && weights.len() == n && biases.len() == n {
            true => Ok(Self {
                weights,
                biases,
                qvalues,
            }),
            false => Err(Error::invalid(format!(
                "triad arrays of lengths {}/{}/{}",
                weights.len(),
                biases.len(),
                n
            ))),
        }
    }
}
