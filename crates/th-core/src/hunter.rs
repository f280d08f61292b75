//! The hunter: gold, kit, and collected treasures.

use std::collections::BTreeMap;

use log::debug;

use crate::dice::Dice;
use crate::item::Item;
use crate::narration::Narration;
use crate::treasure::Treasure;

/// What happened when a treasure was offered to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureFind {
    /// New to the collection.
    Added,
    /// Already collected.
    Duplicate,
    /// Dust; never kept.
    Worthless,
}

/// Outcome of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dig {
    /// No shovel in the kit; nothing was attempted.
    NoShovel,
    /// Dug and found nothing.
    Dirt,
    /// Dug up this much gold.
    Gold(u32),
}

impl Dig {
    /// Returns true if a dig actually happened.
    pub fn dug(self) -> bool {
        !matches!(self, Self::NoShovel)
    }

    /// Narrate the outcome.
    pub fn narrate(self) -> Narration {
        match self {
            Self::NoShovel => Narration::bad("You can't dig for gold without a shovel."),
            Self::Dirt => Narration::bad("You dug but only found dirt."),
            Self::Gold(gold) => Narration::good(format!("You dug up {gold} gold!")),
        }
    }
}

/// The player's character.
#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    gold: i64,
    kit: BTreeMap<Item, u32>,
    treasures: Vec<Treasure>,
}

impl Hunter {
    /// Create a hunter with an empty kit.
    pub fn new(name: impl Into<String>, gold: i64) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: BTreeMap::new(),
            treasures: Vec::new(),
        }
    }

    /// The hunter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current gold. Negative means the hunter is broke.
    pub fn gold(&self) -> i64 {
        self.gold
    }

    /// Add (or with a negative delta, remove) gold.
    pub fn change_gold(&mut self, delta: i64) {
        self.gold += delta;
    }

    /// Check if the kit holds at least one of `item`.
    pub fn has_item(&self, item: Item) -> bool {
        self.item_count(item) > 0
    }

    /// How many of `item` the kit holds.
    pub fn item_count(&self, item: Item) -> u32 {
        self.kit.get(&item).copied().unwrap_or(0)
    }

    /// Add one `item` to the kit.
    pub fn add_item(&mut self, item: Item) {
        *self.kit.entry(item).or_insert(0) += 1;
    }

    /// Remove one `item` from the kit. Returns false if there was none.
    pub fn remove_item(&mut self, item: Item) -> bool {
        match self.kit.get_mut(&item) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.kit.remove(&item);
                true
            }
            None => false,
        }
    }

    /// Items in the kit with their counts.
    pub fn kit(&self) -> impl Iterator<Item = (Item, u32)> + '_ {
        self.kit.iter().map(|(&item, &count)| (item, count))
    }

    /// Collected treasures, in the order they were found.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Offer a treasure to the collection. Dust and duplicates are left behind.
    pub fn add_treasure(&mut self, treasure: Treasure) -> TreasureFind {
        if !treasure.is_valuable() {
            TreasureFind::Worthless
        } else if self.treasures.contains(&treasure) {
            TreasureFind::Duplicate
        } else {
            self.treasures.push(treasure);
            TreasureFind::Added
        }
    }

    /// Returns true once every valuable treasure has been collected.
    pub fn has_all_treasures(&self) -> bool {
        Treasure::VALUABLE
            .iter()
            .all(|t| self.treasures.contains(t))
    }

    /// Dig for gold. Needs a shovel; half the time turns up 1-20 gold.
    pub fn dig_for_gold<D: Dice + ?Sized>(&mut self, dice: &mut D) -> Dig {
        if !self.has_item(Item::Shovel) {
            return Dig::NoShovel;
        }

        let roll = dice.chance();
        if roll < 0.5 {
            let gold = dice.below(20) + 1;
            self.change_gold(i64::from(gold));
            debug!("dig roll {roll:.3}: found {gold} gold");
            Dig::Gold(gold)
        } else {
            debug!("dig roll {roll:.3}: dirt");
            Dig::Dirt
        }
    }
}

impl std::fmt::Display for Hunter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} has {} gold", self.name, self.gold)?;

        if self.kit.is_empty() {
            write!(f, "\nKit: empty")?;
        } else {
            let items: Vec<String> = self
                .kit()
                .map(|(item, count)| {
                    if count > 1 {
                        format!("{item} x{count}")
                    } else {
                        item.to_string()
                    }
                })
                .collect();
            write!(f, "\nKit: {}", items.join(", "))?;
        }

        if self.treasures.is_empty() {
            write!(f, "\nTreasures: none")
        } else {
            let found: Vec<String> = self.treasures.iter().map(|t| format!("a {t}")).collect();
            write!(f, "\nTreasures: {}", found.join(", "))
        }
    }
}
