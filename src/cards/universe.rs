use super::card::Card;

/// The multiset of faces not yet observed, assuming one 52-card deck.
///
/// Each face starts with four copies and loses one per observation,
/// never dropping below zero. Faces outside 1..=13 are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Universe([u8; Card::FACES as usize]);

impl Universe {
    const COPIES: u8 = 4;

    pub fn full() -> Self {
        Self([Self::COPIES; Card::FACES as usize])
    }
    /// Unseen faces given the faces already known.
    pub fn excluding(known: impl IntoIterator<Item = u8>) -> Self {
        known.into_iter().fold(Self::full(), |mut universe, face| {
            universe.observe(face);
            universe
        })
    }
    /// Removes one copy of `face`.
    pub fn observe(&mut self, face: u8) {
        if let Some(n) = Self::index(face).map(|i| &mut self.0[i]) {
            *n = n.saturating_sub(1);
        }
    }
    /// Remaining copies of `face`.
    pub fn count(&self, face: u8) -> usize {
        Self::index(face).map_or(0, |i| self.0[i] as usize)
    }
    /// Total number of unseen cards.
    pub fn len(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Number of unseen cards whose face satisfies `predicate`.
    pub fn count_where(&self, predicate: impl Fn(u8) -> bool) -> usize {
        self.faces()
            .filter(|&(face, _)| predicate(face))
            .map(|(_, n)| n)
            .sum()
    }
    /// Probability that a uniformly drawn unseen card satisfies `predicate`.
    /// Zero when nothing is left to draw.
    pub fn probability(&self, predicate: impl Fn(u8) -> bool) -> f64 {
        match self.len() {
            0 => 0.0,
            n => self.count_where(predicate) as f64 / n as f64,
        }
    }
    /// Distinct faces with their remaining copies, skipping exhausted faces.
    pub fn faces(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (1..=Card::FACES)
            .map(|face| (face, self.count(face)))
            .filter(|&(_, n)| n > 0)
    }
    /// Every unseen card face, ascending, one entry per copy.
    pub fn cards(&self) -> Vec<u8> {
        self.faces()
            .flat_map(|(face, n)| std::iter::repeat_n(face, n))
            .collect()
    }
    fn index(face: u8) -> Option<usize> {
        match face {
            1..=Card::FACES => Some(face as usize - 1),
            _ => None,
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::full()
    }
}
