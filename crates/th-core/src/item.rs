//! Kit items a hunter can carry, buy, and sell.

/// An item in a hunter's kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    /// Needed to cross the desert.
    Water,
    /// Needed to cross the mountains.
    Rope,
    /// Needed to cross the jungle.
    Machete,
    /// Needed to cross the plains.
    Horse,
    /// Needed to cross the ocean.
    Boat,
    /// Needed to cross the marsh.
    Boots,
    /// Needed to dig for gold.
    Shovel,
    /// The samurai sword. Cuts through the jungle and ends brawls before
    /// they start, but only exists in sessions that unlock it.
    Sword,
}

impl Item {
    /// Every item, in catalog order.
    pub const ALL: [Item; 8] = [
        Self::Water,
        Self::Rope,
        Self::Machete,
        Self::Boots,
        Self::Shovel,
        Self::Horse,
        Self::Boat,
        Self::Sword,
    ];

    /// The six items that each cross one terrain.
    pub const CROSSING: [Item; 6] = [
        Self::Water,
        Self::Rope,
        Self::Machete,
        Self::Horse,
        Self::Boat,
        Self::Boots,
    ];

    /// Parse an item name, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "water" => Some(Self::Water),
            "rope" => Some(Self::Rope),
            "machete" => Some(Self::Machete),
            "horse" => Some(Self::Horse),
            "boat" => Some(Self::Boat),
            "boots" | "boot" => Some(Self::Boots),
            "shovel" => Some(Self::Shovel),
            "sword" | "samurai sword" => Some(Self::Sword),
            _ => None,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Rope => "Rope",
            Self::Machete => "Machete",
            Self::Horse => "Horse",
            Self::Boat => "Boat",
            Self::Boots => "Boots",
            Self::Shovel => "Shovel",
            Self::Sword => "Sword",
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
