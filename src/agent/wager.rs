use crate::Chips;
use crate::Probability;
use crate::WAGERS;

/// Picks a wager from [`WAGERS`] for a given standing in [0, 1].
///
/// Standings up to 0.25, 0.5, 0.75 map to the first three sizes and anything
/// above to the largest. The pick steps down until it is affordable; a
/// balance below the smallest size is wagered whole.
pub fn wager(standing: Probability, balance: Chips) -> Chips {
    if WAGERS[0] > balance {
        return balance.max(0);
    }
    let bucket = match standing {
        s if s <= 0.25 => 0,
        s if s <= 0.50 => 1,
        s if s <= 0.75 => 2,
        _ => 3,
    };
    WAGERS[..=bucket]
        .iter()
        .rev()
        .copied()
        .find(|&w| w <= balance)
        .unwrap_or(WAGERS[0])
}
