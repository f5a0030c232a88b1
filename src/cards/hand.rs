use super::card::Card;
use crate::TWENTY_ONE;

/// The cards held by one player during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Empties the hand, returning its cards for the discard pile.
    pub fn clear(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }
    /// Blackjack value: each ace counts 11 unless that busts the hand.
    pub fn value(&self) -> u8 {
        let hard = self
            .0
            .iter()
            .filter(|c| !c.is_ace())
            .map(Card::value)
            .sum::<u8>();
        self.0
            .iter()
            .filter(|c| c.is_ace())
            .fold(hard, |total, _| match total + 11 > TWENTY_ONE {
                true => total + 1,
                false => total + 11,
            })
    }
    pub fn is_bust(&self) -> bool {
        self.value() > TWENTY_ONE
    }
    /// Raw face total, without blackjack valuation.
    pub fn faces(&self) -> u8 {
        self.0.iter().map(Card::face).sum()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(faces: &[u8]) -> Hand {
        faces
            .iter()
            .map(|&f| Card::try_from((f, Suit::Spades)).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand(&[13, 12]).value(), 20);
    }

    #[test]
    fn ace_counts_eleven_when_safe() {
        assert_eq!(hand(&[1, 13]).value(), 21);
        assert_eq!(hand(&[1, 5]).value(), 16);
    }

    #[test]
    fn ace_counts_one_when_eleven_busts() {
        assert_eq!(hand(&[1, 9, 5]).value(), 15);
        assert_eq!(hand(&[1, 1]).value(), 12);
    }

    #[test]
    fn bust() {
        assert!(hand(&[10, 9, 5]).is_bust());
        assert!(!hand(&[10, 9, 2]).is_bust());
    }

    #[test]
    fn raw_faces() {
        assert_eq!(hand(&[13, 1]).faces(), 14);
    }
}
