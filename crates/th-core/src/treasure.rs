//! Treasures hidden in towns.

use crate::dice::Dice;

/// A town's hidden treasure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Treasure {
    /// A crown.
    Crown,
    /// A trophy.
    Trophy,
    /// A gem.
    Gem,
    /// Worthless dust.
    Dust,
}

impl Treasure {
    /// Every treasure, in draw order.
    pub const ALL: [Treasure; 4] = [Self::Crown, Self::Trophy, Self::Gem, Self::Dust];

    /// The treasures a hunter must collect to win.
    pub const VALUABLE: [Treasure; 3] = [Self::Crown, Self::Trophy, Self::Gem];

    /// Draw a treasure uniformly.
    pub fn roll<D: Dice + ?Sized>(dice: &mut D) -> Self {
        Self::ALL[dice.below(Self::ALL.len() as u32) as usize]
    }

    /// Returns false for dust.
    pub fn is_valuable(self) -> bool {
        self != Self::Dust
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crown => write!(f, "crown"),
            Self::Trophy => write!(f, "trophy"),
            Self::Gem => write!(f, "gem"),
            Self::Dust => write!(f, "dust"),
        }
    }
}
