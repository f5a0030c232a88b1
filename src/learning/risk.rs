use super::record::Record;
use crate::Probability;
use crate::TWENTY_ONE;
use crate::state::Action;
use crate::state::GameState;
use crate::state::InRound;
use crate::state::PostRound;

/// Heuristic risk of taking `action` from `state`.
///
/// - Betting: how far the running chip delta sits below its best, normalized
///   by the observed range. Zero until the range opens up.
/// - Playing: a blend of drawing odds over the unseen cards. Hitting reports
///   the complement of the blend.
/// - Settled: net results per game, counting `state`'s own outcome. This one
///   ranges over [-1, 1].
pub fn risk(state: &GameState, action: Action, record: &Record) -> Probability {
    match state {
        GameState::Pre(_) => betting(record),
        GameState::In(s) => playing(s, action),
        GameState::Post(s) => settled(s, record),
    }
}

/// Betting risk from the agent's chip history alone.
pub fn betting(record: &Record) -> Probability {
    let range = record.max() - record.min();
    match range {
        0 => 0.0,
        _ => 1.0 - (record.delta() - record.min()) as Probability / range as Probability,
    }
}

fn playing(state: &InRound, action: Action) -> Probability {
    let unknown = state.unknown();
    let total = state.total() as u16;
    let dealer = state.dealer().face() as u16;
    let limit = TWENTY_ONE as u16;
    let p_safe = unknown.probability(|x| x as u16 + total <= limit);
    if p_safe == 0.0 {
        return 0.0;
    }
    let p_exact = unknown.probability(|x| x as u16 + total == limit);
    let p_ahead = unknown.probability(|x| x as u16 + dealer < total);
    let p_dealer = unknown.probability(|x| x as u16 + dealer == limit);
    let p_clear = 1.0 - p_dealer;
    let risk = match p_clear > 0.0 {
        true => ((p_exact + p_ahead) * p_safe * p_dealer) / (p_safe * p_clear),
        false => 1.0,
    }
    .clamp(0.0, 1.0);
    match action {
        Action::Hit => 1.0 - risk,
        _ => risk,
    }
}

fn settled(state: &PostRound, record: &Record) -> Probability {
    let record = record.counting(state.outcome());
    let net = record.wins() as Probability + record.draws() as Probability
        - record.losses() as Probability;
    net / record.games() as Probability
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::cards::Suit;
    use crate::state::Outcome;
    use crate::state::PreRound;

    fn card(face: u8) -> Card {
        Card::try_from((face, Suit::Diamonds)).unwrap()
    }
    fn playing(dealer: u8, hand: &[u8]) -> GameState {
        let hand = hand.iter().map(|&f| card(f)).collect::<Vec<_>>();
        GameState::from(InRound::new(card(dealer), hand.into()).unwrap())
    }
    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn betting_without_history_is_zero() {
        let state = GameState::from(PreRound::new(20));
        assert_eq!(risk(&state, Action::Bet, &Record::default()), 0.0);
    }

    #[test]
    fn betting_rises_while_losing() {
        let state = GameState::from(PreRound::new(20));
        let mut record = Record::default();
        record.settle(Outcome::Loss, -20);
        record.settle(Outcome::Win, 40);
        assert_eq!(risk(&state, Action::Bet, &record), 0.0);
        record.settle(Outcome::Loss, -20);
        assert!(close(risk(&state, Action::Bet, &record), 0.5));
        record.settle(Outcome::Loss, -20);
        assert!(close(risk(&state, Action::Bet, &record), 1.0));
    }

    #[test]
    fn playing_blends_drawing_odds() {
        // dealer 10, hand 10 + 9: 49 unseen, 8 safe, 4 exact, 32 behind, 4 dealer 21s
        let state = playing(10, &[10, 9]);
        let stand = risk(&state, Action::Stand, &Record::default());
        let hit = risk(&state, Action::Hit, &Record::default());
        assert!(close(stand, 144.0 / 2205.0));
        assert!(close(hit, 1.0 - 144.0 / 2205.0));
    }

    #[test]
    fn playing_with_no_safe_card_is_zero() {
        let state = playing(5, &[13, 13]);
        assert_eq!(risk(&state, Action::Stand, &Record::default()), 0.0);
        assert_eq!(risk(&state, Action::Hit, &Record::default()), 0.0);
    }

    #[test]
    fn playing_stays_in_unit_interval() {
        for dealer in 1..=13 {
            for a in 1..=13 {
                for b in 1..=13 {
                    let state = playing(dealer, &[a, b]);
                    for action in [Action::Stand, Action::Hit] {
                        let r = risk(&state, action, &Record::default());
                        assert!((0.0..=1.0).contains(&r));
                    }
                }
            }
        }
    }

    #[test]
    fn settled_counts_its_own_outcome() {
        let win = GameState::from(PostRound::new(Outcome::Win, 20));
        assert_eq!(risk(&win, Action::Win, &Record::default()), 1.0);
        let mut record = Record::default();
        record.settle(Outcome::Loss, -10);
        let draw = GameState::from(PostRound::new(Outcome::Draw, 0));
        assert_eq!(risk(&draw, Action::Draw, &record), 0.0);
        let loss = GameState::from(PostRound::new(Outcome::Loss, -10));
        assert_eq!(risk(&loss, Action::Loss, &record), -1.0);
    }
}
