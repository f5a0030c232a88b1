use crate::Chips;

/// A chip balance that never goes negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Account(Chips);

impl Account {
    pub fn new(chips: Chips) -> Self {
        Self(chips.max(0))
    }
    pub fn balance(&self) -> Chips {
        self.0
    }
    pub fn deposit(&mut self, chips: Chips) {
        self.0 += chips.max(0);
    }
    /// Takes up to `chips` out, returning what was actually paid.
    pub fn withdraw(&mut self, chips: Chips) -> Chips {
        let paid = chips.clamp(0, self.0);
        self.0 -= paid;
        paid
    }
    pub fn is_bankrupt(&self) -> bool {
        self.0 == 0
    }
}
