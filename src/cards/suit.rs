#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Hearts,
            1 => Self::Spades,
            2 => Self::Diamonds,
            3 => Self::Clubs,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hearts => write!(f, "H"),
            Self::Spades => write!(f, "S"),
            Self::Diamonds => write!(f, "D"),
            Self::Clubs => write!(f, "C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for suit in Suit::all() {
            assert_eq!(suit, Suit::from(u8::from(suit)));
        }
    }
}
