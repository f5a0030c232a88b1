use crate::cards::Hand;
use crate::state::Outcome;

/// Settles the agent's hand against the dealer's.
///
/// An agent bust loses even when the dealer also busts.
pub fn showdown(agent: &Hand, dealer: &Hand) -> Outcome {
    match (agent.is_bust(), dealer.is_bust()) {
        (true, _) => Outcome::Loss,
        (false, true) => Outcome::Win,
        (false, false) => match agent.value().cmp(&dealer.value()) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Suit;

    fn hand(faces: &[u8]) -> Hand {
        faces
            .iter()
            .map(|&f| Card::try_from((f, Suit::Clubs)).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn higher_total_wins() {
        assert_eq!(showdown(&hand(&[10, 9]), &hand(&[10, 7])), Outcome::Win);
        assert_eq!(showdown(&hand(&[10, 7]), &hand(&[10, 9])), Outcome::Loss);
        assert_eq!(showdown(&hand(&[1, 13]), &hand(&[10, 5, 6])), Outcome::Draw);
    }

    #[test]
    fn busts() {
        assert_eq!(showdown(&hand(&[10, 9, 5]), &hand(&[10, 7])), Outcome::Loss);
        assert_eq!(showdown(&hand(&[10, 2]), &hand(&[10, 6, 8])), Outcome::Win);
        assert_eq!(showdown(&hand(&[10, 9, 5]), &hand(&[10, 6, 8])), Outcome::Loss);
    }
}
