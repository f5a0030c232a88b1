use super::action::Action;

/// Phase of a round, which determines the available actions.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Stage {
    PreRound = 0,
    InRound = 1,
    PostRound = 2,
}

impl Stage {
    pub const fn all() -> [Self; 3] {
        [Self::PreRound, Self::InRound, Self::PostRound]
    }
    /// Actions in triad order.
    pub const fn actions(&self) -> &'static [Action] {
        match self {
            Self::PreRound => &[Action::Bet],
            Self::InRound => &[Action::Stand, Action::Hit],
            Self::PostRound => &[Action::Win, Action::Draw, Action::Loss],
        }
    }
    /// Number of actions, which is also the length of every triad array.
    pub const fn arity(&self) -> usize {
        self.actions().len()
    }
}

/// Tag written into state keys
impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage as u8
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PreRound => write!(f, "PRE_ROUND"),
            Self::InRound => write!(f, "IN_ROUND"),
            Self::PostRound => write!(f, "POST_ROUND"),
        }
    }
}
