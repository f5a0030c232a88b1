use super::stage::Stage;

/// A choice (or, after settlement, a result) indexed into a stage's triad.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Bet,
    Stand,
    Hit,
    Win,
    Draw,
    Loss,
}

impl Action {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Bet => Stage::PreRound,
            Self::Stand | Self::Hit => Stage::InRound,
            Self::Win | Self::Draw | Self::Loss => Stage::PostRound,
        }
    }
    /// Position of this action in its stage's triad arrays.
    pub fn index(&self) -> usize {
        match self {
            Self::Bet => 0,
            Self::Stand => 0,
            Self::Hit => 1,
            Self::Win => 0,
            Self::Draw => 1,
            Self::Loss => 2,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Bet => write!(f, "BET"),
            Self::Stand => write!(f, "STAND"),
            Self::Hit => write!(f, "HIT"),
            Self::Win => write!(f, "WIN"),
            Self::Draw => write!(f, "DRAW"),
            Self::Loss => write!(f, "LOSS"),
        }
    }
}
