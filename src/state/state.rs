use super::outcome::Outcome;
use super::stage::Stage;
use crate::Chips;
use crate::Error;
use crate::Result;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Universe;

/// The betting stage: how much the agent put down.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct PreRound {
    wager: Chips,
}

impl PreRound {
    pub fn new(wager: Chips) -> Self {
        Self { wager }
    }
    pub fn wager(&self) -> Chips {
        self.wager
    }
}

/// The playing stage: the dealer's shown card and the agent's hand.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct InRound {
    dealer: Card,
    hand: Hand,
}

impl InRound {
    /// Fails when the agent holds no cards.
    pub fn new(dealer: Card, hand: Hand) -> Result<Self> {
        match hand.is_empty() {
            true => Err(Error::invalid("in-round state without an agent hand")),
            false => Ok(Self { dealer, hand }),
        }
    }
    pub fn dealer(&self) -> Card {
        self.dealer
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    /// Raw face total of the agent's hand.
    pub fn total(&self) -> u8 {
        self.hand.faces()
    }
    /// Unseen cards given the dealer's shown card and the agent's hand.
    pub fn unknown(&self) -> Universe {
        Universe::excluding(
            std::iter::once(self.dealer.face()).chain(self.hand.cards().iter().map(Card::face)),
        )
    }
}

/// The settlement stage: the result and what it did to the agent's chips.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct PostRound {
    outcome: Outcome,
    delta: Chips,
}

impl PostRound {
    pub fn new(outcome: Outcome, delta: Chips) -> Self {
        Self { outcome, delta }
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn delta(&self) -> Chips {
        self.delta
    }
}

/// An immutable snapshot of the game at one stage transition.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub enum GameState {
    Pre(PreRound),
    In(InRound),
    Post(PostRound),
}

impl GameState {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Pre(_) => Stage::PreRound,
            Self::In(_) => Stage::InRound,
            Self::Post(_) => Stage::PostRound,
        }
    }
}

impl From<PreRound> for GameState {
    fn from(state: PreRound) -> Self {
        Self::Pre(state)
    }
}
impl From<InRound> for GameState {
    fn from(state: InRound) -> Self {
        Self::In(state)
    }
}
impl From<PostRound> for GameState {
    fn from(state: PostRound) -> Self {
        Self::Post(state)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pre(s) => write!(f, "{} wager={}", self.stage(), s.wager),
            Self::In(s) => write!(f, "{} dealer={} hand={}", self.stage(), s.dealer, s.hand),
            Self::Post(s) => write!(f, "{} {} delta={}", self.stage(), s.outcome, s.delta),
        }
    }
}
