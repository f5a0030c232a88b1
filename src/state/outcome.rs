/// How a settled round ended, from the agent's side.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Outcome {
    Win = 0,
    Draw = 1,
    Loss = 2,
}

/// Tag written into state keys
impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome as u8
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Draw => write!(f, "DRAW"),
            Self::Loss => write!(f, "LOSS"),
        }
    }
}
