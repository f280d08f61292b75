//! Terrain surrounding a town and the item needed to cross it.

use crate::config::Unlocks;
use crate::dice::Dice;
use crate::hunter::Hunter;
use crate::item::Item;

/// The six kinds of terrain a town can be surrounded by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    /// Crossed with a rope.
    Mountains,
    /// Crossed with a boat.
    Ocean,
    /// Crossed with a horse.
    Plains,
    /// Crossed with water.
    Desert,
    /// Crossed with a machete (or the sword, when unlocked).
    Jungle,
    /// Crossed with boots.
    Marsh,
}

impl TerrainKind {
    /// Every terrain kind, in draw order.
    pub const ALL: [TerrainKind; 6] = [
        Self::Mountains,
        Self::Ocean,
        Self::Plains,
        Self::Desert,
        Self::Jungle,
        Self::Marsh,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Ocean => "Ocean",
            Self::Plains => "Plains",
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Marsh => "Marsh",
        }
    }

    /// The item that always crosses this terrain.
    pub fn required_item(self) -> Item {
        match self {
            Self::Mountains => Item::Rope,
            Self::Ocean => Item::Boat,
            Self::Plains => Item::Horse,
            Self::Desert => Item::Water,
            Self::Jungle => Item::Machete,
            Self::Marsh => Item::Boots,
        }
    }
}

impl std::fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A crossing obstacle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    kind: TerrainKind,
    alternate: Option<Item>,
}

impl Terrain {
    /// Build a terrain, applying the session's unlocks.
    pub fn new(kind: TerrainKind, unlocks: Unlocks) -> Self {
        let alternate = match kind {
            TerrainKind::Jungle if unlocks.samurai_sword => Some(Item::Sword),
            _ => None,
        };
        Self { kind, alternate }
    }

    /// Draw a terrain uniformly from the six kinds.
    pub fn roll<D: Dice + ?Sized>(dice: &mut D, unlocks: Unlocks) -> Self {
        let kind = TerrainKind::ALL[dice.below(TerrainKind::ALL.len() as u32) as usize];
        Self::new(kind, unlocks)
    }

    /// The kind of terrain.
    pub fn kind(&self) -> TerrainKind {
        self.kind
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The item that always crosses this terrain.
    pub fn required_item(&self) -> Item {
        self.kind.required_item()
    }

    /// A second item that also crosses, if one is unlocked.
    pub fn alternate_item(&self) -> Option<Item> {
        self.alternate
    }

    /// The item the hunter would use to cross, preferring the required one.
    pub fn crossing_item(&self, hunter: &Hunter) -> Option<Item> {
        let required = self.required_item();
        if hunter.has_item(required) {
            return Some(required);
        }
        self.alternate.filter(|&item| hunter.has_item(item))
    }

    /// Returns true if the hunter carries something that crosses this terrain.
    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        self.crossing_item(hunter).is_some()
    }
}
