use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `(face - 1) * 4 + suit`. Faces run from 1 (ace) to 13 (king); estimators
/// work on the raw face while hand valuation folds J/Q/K down to 10.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub const FACES: u8 = 13;

    /// Face number, 1 (ace) through 13 (king).
    pub fn face(&self) -> u8 {
        self.0 / 4 + 1
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Blackjack value with aces counted low. Face cards are worth 10.
    pub fn value(&self) -> u8 {
        self.face().min(10)
    }
    pub fn is_ace(&self) -> bool {
        self.face() == 1
    }
}

/// (face, Suit) construction, rejecting faces outside 1..=13
impl TryFrom<(u8, Suit)> for Card {
    type Error = Error;
    fn try_from((face, suit): (u8, Suit)) -> Result<Self, Self::Error> {
        match face {
            1..=Self::FACES => Ok(Self((face - 1) * 4 + u8::from(suit))),
            _ => Err(Error::invalid(format!("card face {} outside 1..=13", face))),
        }
    }
}

/// u8 isomorphism
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.face() {
            1 => write!(f, "A{}", self.suit()),
            11 => write!(f, "J{}", self.suit()),
            12 => write!(f, "Q{}", self.suit()),
            13 => write!(f, "K{}", self.suit()),
            n => write!(f, "{}{}", n, self.suit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert_eq!(n, u8::from(Card::from(n)));
        }
    }

    #[test]
    fn face_and_suit() {
        let card = Card::try_from((12, Suit::Clubs)).unwrap();
        assert_eq!(card.face(), 12);
        assert_eq!(card.suit(), Suit::Clubs);
        assert_eq!(card.value(), 10);
        assert_eq!(card.to_string(), "QC");
    }

    #[test]
    fn rejects_bad_faces() {
        assert!(Card::try_from((0, Suit::Hearts)).is_err());
        assert!(Card::try_from((14, Suit::Hearts)).is_err());
    }
}
