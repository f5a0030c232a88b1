use super::record::Record;
use super::risk::risk;
use crate::TWENTY_ONE;
use crate::Utility;
use crate::state::Action;
use crate::state::GameState;
use crate::state::InRound;

/// Expected payout of taking `action` from `state`, scaled by `fixed`.
///
/// Betting pays the wager weighted by its risk. Playing only pays on a hit:
/// each safe unseen face contributes its probability times
/// `fixed / (21 - face)`, and completing 21 exactly adds
/// `P(exact) * fixed / total`. A settled state reports its realized delta.
pub fn payout(state: &GameState, action: Action, record: &Record, fixed: Utility) -> Utility {
    match state {
        GameState::Pre(s) => s.wager() as Utility * risk(state, action, record),
        GameState::In(s) => match action {
            Action::Hit => hitting(s, fixed),
            _ => 0.0,
        },
        GameState::Post(s) => s.delta() as Utility,
    }
}

fn hitting(state: &InRound, fixed: Utility) -> Utility {
    let unknown = state.unknown();
    let n = unknown.len();
    if n == 0 {
        return 0.0;
    }
    let total = state.total() as u16;
    let limit = TWENTY_ONE as u16;
    let exact = match total {
        1..=20 => {
            unknown.probability(|x| x as u16 + total == limit) * fixed / total as Utility
        }
        _ => 0.0,
    };
    unknown
        .faces()
        .filter(|&(face, _)| face as u16 + total <= limit)
        .map(|(face, count)| {
            let p = count as Utility / n as Utility;
            p * fixed / (limit - face as u16) as Utility
        })
        .sum::<Utility>()
        + exact
}
