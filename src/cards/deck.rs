use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// A single 52-card deck dealt from the top.
///
/// Shuffling takes the caller's generator so that whole sessions replay
/// identically under a fixed seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// A fresh deck in encoding order.
    pub fn ordered() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// A fresh deck, shuffled.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        deck.0.shuffle(rng);
        deck
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Returns the discard pile to the deck and shuffles everything.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, discard: impl IntoIterator<Item = Card>, rng: &mut R) {
        self.0.extend(discard);
        self.0.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draws_every_card_once() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::shuffled(rng);
        let mut seen = std::collections::HashSet::new();
        while let Some(card) = deck.draw() {
            assert!(seen.insert(card));
        }
        assert_eq!(seen.len(), 52);
        assert!(deck.is_empty());
    }

    #[test]
    fn reshuffle_restores_discards() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::shuffled(rng);
        let discard = (0..10).filter_map(|_| deck.draw()).collect::<Vec<_>>();
        assert_eq!(deck.len(), 42);
        deck.reshuffle(discard, rng);
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn seeded_shuffles_repeat() {
        let a = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        let b = Deck::shuffled(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
