//! A town: its terrain, temperament, hidden treasure, and what the hunter
//! can do there.
//!
//! Town owns no hunter or shop. The session lends them to each operation,
//! and every operation returns what happened instead of stashing a message.

use log::{debug, info};

use crate::config::Unlocks;
use crate::dice::Dice;
use crate::error::HuntResult;
use crate::hunter::Hunter;
use crate::item::Item;
use crate::narration::Narration;
use crate::shop::{Receipt, Shop, ShopMode};
use crate::terrain::{Terrain, TerrainKind};
use crate::treasure::Treasure;

/// Probability of finding no trouble in a tough town.
const TOUGH_NO_TROUBLE: f64 = 0.66;
/// Probability of finding no trouble in a quiet town.
const QUIET_NO_TROUBLE: f64 = 0.33;
/// Probability that a crossing item breaks when breakage is on.
const BREAK_CHANCE: f64 = 0.5;

/// Outcome of trying to leave town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Departure {
    /// The hunter crossed the terrain.
    Crossed {
        /// The item used.
        item: Item,
        /// The terrain crossed.
        terrain: TerrainKind,
        /// The item broke and was lost.
        broke: bool,
    },
    /// The hunter lacks the crossing item.
    Blocked {
        /// The hunter's name.
        hunter: String,
        /// The item that would have crossed.
        needed: Item,
    },
}

impl Departure {
    /// Returns true if the hunter left town.
    pub fn left(&self) -> bool {
        matches!(self, Self::Crossed { .. })
    }

    /// Narrate the outcome.
    pub fn narrate(&self) -> Vec<Narration> {
        match self {
            Self::Crossed {
                item,
                terrain,
                broke,
            } => {
                let mut lines = vec![Narration::info(format!(
                    "You used your {item} to cross the {terrain}."
                ))];
                if *broke {
                    lines.push(Narration::info(format!(
                        "Unfortunately, your {item} broke."
                    )));
                }
                lines
            }
            Self::Blocked { hunter, needed } => vec![Narration::bad(format!(
                "You can't leave town, {hunter}. You don't have a {needed}."
            ))],
        }
    }
}

/// Outcome of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brawl {
    /// Nobody wanted to fight.
    NoTrouble,
    /// Won the brawl and this much gold.
    Won(u32),
    /// The opponent saw the sword and backed down.
    Yielded,
    /// Lost the brawl and paid this much gold.
    Lost(u32),
}

impl Brawl {
    /// The change to the hunter's gold.
    pub fn gold_change(self) -> i64 {
        match self {
            Self::NoTrouble | Self::Yielded => 0,
            Self::Won(gold) => i64::from(gold),
            Self::Lost(gold) => -i64::from(gold),
        }
    }

    /// Narrate the outcome.
    pub fn narrate(self) -> Vec<Narration> {
        let intro = Narration::plain("You want trouble, stranger!  You got it!");
        match self {
            Self::NoTrouble => vec![Narration::bad("You couldn't find any trouble")],
            Self::Won(gold) => vec![
                intro,
                Narration::plain("Oof! Umph! Ow!"),
                Narration::good("Okay, stranger! You proved yer mettle. Here, take my gold."),
                Narration::good(format!("You won the brawl and receive {gold} gold.")),
            ],
            Self::Yielded => vec![
                intro,
                Narration::good("The brawler takes one look at your sword and backs away."),
                Narration::good("Nobody picks a fight with a samurai."),
            ],
            Self::Lost(gold) => vec![
                intro,
                Narration::plain("Oof! Umph! Ow!"),
                Narration::bad(
                    "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                ),
                Narration::bad(format!("You lost the brawl and pay {gold} gold.")),
            ],
        }
    }
}

/// A town the hunter passes through.
#[derive(Debug, Clone)]
pub struct Town {
    terrain: Terrain,
    tough: bool,
    treasure: Treasure,
    searched: bool,
    dug: bool,
    visitor: Option<String>,
}

impl Town {
    /// Build a town from explicit parts.
    pub fn new(terrain: Terrain, tough: bool, treasure: Treasure) -> Self {
        Self {
            terrain,
            tough,
            treasure,
            searched: false,
            dug: false,
            visitor: None,
        }
    }

    /// Generate a random town.
    ///
    /// Draws terrain, then toughness, then treasure, so a given dice sequence
    /// always yields the same town.
    pub fn generate<D: Dice + ?Sized>(dice: &mut D, toughness: f64, unlocks: Unlocks) -> Self {
        let terrain = Terrain::roll(dice, unlocks);
        let tough = dice.chance() < toughness;
        let treasure = Treasure::roll(dice);
        debug!(
            "generated town: terrain={}, tough={tough}, treasure={treasure}",
            terrain.name()
        );
        Self::new(terrain, tough, treasure)
    }

    /// The surrounding terrain.
    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    /// Returns true for a tough town.
    pub fn is_tough(&self) -> bool {
        self.tough
    }

    /// The hunter currently in town, if one has arrived.
    pub fn visitor(&self) -> Option<&str> {
        self.visitor.as_deref()
    }

    /// Welcome a hunter to town.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) -> Vec<Narration> {
        self.visitor = Some(hunter.name().to_string());
        info!("{} arrives in a town by the {}", hunter.name(), self.terrain.name());

        let mood = if self.tough {
            "It's pretty rough around here, so watch yourself."
        } else {
            "We're just a sleepy little town with mild mannered folk."
        };
        vec![
            Narration::info(format!("Welcome to town, {}.", hunter.name())),
            Narration::info(mood),
        ]
    }

    /// Try to cross the terrain. This is the only way out of town.
    ///
    /// With `item_breakage` on, the crossing item breaks half the time.
    pub fn leave_town<D: Dice + ?Sized>(
        &self,
        hunter: &mut Hunter,
        dice: &mut D,
        item_breakage: bool,
    ) -> Departure {
        let Some(item) = self.terrain.crossing_item(hunter) else {
            return Departure::Blocked {
                hunter: hunter.name().to_string(),
                needed: self.terrain.required_item(),
            };
        };

        let broke = item_breakage && dice.chance() < BREAK_CHANCE;
        if broke {
            hunter.remove_item(item);
        }
        debug!(
            "crossed the {} with {item} (broke: {broke})",
            self.terrain.name()
        );

        Departure::Crossed {
            item,
            terrain: self.terrain.kind(),
            broke,
        }
    }

    /// Trade one item at the shop.
    pub fn enter_shop(
        &self,
        shop: &Shop,
        hunter: &mut Hunter,
        mode: ShopMode,
        item: Item,
    ) -> HuntResult<Receipt> {
        shop.enter(hunter, mode, item)
    }

    /// The line left behind after a shop visit.
    pub fn left_shop() -> Narration {
        Narration::info("You left the shop.")
    }

    /// Go looking for a brawl.
    ///
    /// Tough towns are more likely to turn up a fight, and the hunter is less
    /// likely to win it. Brawls are worth 1-10 gold either way.
    pub fn look_for_trouble<D: Dice + ?Sized>(&self, hunter: &mut Hunter, dice: &mut D) -> Brawl {
        let no_trouble = if self.tough {
            TOUGH_NO_TROUBLE
        } else {
            QUIET_NO_TROUBLE
        };

        let find = dice.chance();
        if find <= no_trouble {
            debug!("trouble roll {find:.3} <= {no_trouble}: no trouble");
            return Brawl::NoTrouble;
        }

        let stake = dice.below(10) + 1;
        let fight = dice.chance();
        let brawl = if fight > no_trouble {
            Brawl::Won(stake)
        } else if hunter.has_item(Item::Sword) {
            Brawl::Yielded
        } else {
            Brawl::Lost(stake)
        };
        debug!("trouble roll {find:.3}, fight roll {fight:.3}, stake {stake}: {brawl:?}");

        hunter.change_gold(brawl.gold_change());
        brawl
    }

    /// The treasure hidden here.
    pub fn treasure(&self) -> Treasure {
        self.treasure
    }

    /// Returns true once the town has been searched for treasure.
    pub fn searched(&self) -> bool {
        self.searched
    }

    /// Mark the town as searched. Never reset.
    pub fn mark_searched(&mut self) {
        self.searched = true;
    }

    /// Returns true once someone has dug for gold here.
    pub fn dug(&self) -> bool {
        self.dug
    }

    /// Mark the town as dug. Never reset.
    pub fn mark_dug(&mut self) {
        self.dug = true;
    }
}

impl std::fmt::Display for Town {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::FixedDice;
    use crate::narration::to_text;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn town(kind: TerrainKind, tough: bool) -> Town {
        Town::new(Terrain::new(kind, Unlocks::default()), tough, Treasure::Gem)
    }

    #[test]
    fn generate_draw_order() {
        // 0.25 -> Ocean, 0.1 < 0.4 -> tough, 0.6 -> Gem
        let mut dice = FixedDice::new([0.25, 0.1, 0.6]);
        let t = Town::generate(&mut dice, 0.4, Unlocks::default());
        assert_eq!(t.terrain().kind(), TerrainKind::Ocean);
        assert!(t.is_tough());
        assert_eq!(t.treasure(), Treasure::Gem);
        assert!(!t.searched());
        assert!(!t.dug());
        assert!(t.visitor().is_none());
    }

    #[test]
    fn arrival_depends_on_toughness() {
        let h = Hunter::new("Ann", 10);

        let mut rough = town(TerrainKind::Marsh, true);
        let text = to_text(&rough.hunter_arrives(&h));
        assert!(text.starts_with("Welcome to town, Ann."));
        assert!(text.contains("pretty rough"));
        assert_eq!(rough.visitor(), Some("Ann"));

        let mut sleepy = town(TerrainKind::Marsh, false);
        assert!(to_text(&sleepy.hunter_arrives(&h)).contains("sleepy little town"));
    }

    #[test]
    fn blocked_at_ocean_without_boat() {
        let t = town(TerrainKind::Ocean, false);
        let mut h = Hunter::new("Ann", 10);
        let mut dice = FixedDice::default();
        let departure = t.leave_town(&mut h, &mut dice, false);
        assert!(!departure.left());
        assert_eq!(
            departure,
            Departure::Blocked {
                hunter: "Ann".to_string(),
                needed: Item::Boat
            }
        );
        assert!(to_text(&departure.narrate()).contains("Boat"));
    }

    #[test]
    fn crossing_keeps_item_without_breakage() {
        let t = town(TerrainKind::Mountains, false);
        let mut h = Hunter::new("Ann", 10);
        h.add_item(Item::Rope);
        // a roll that would break it if breakage were on
        let mut dice = FixedDice::new([0.0]);
        let departure = t.leave_town(&mut h, &mut dice, false);
        assert!(departure.left());
        assert!(h.has_item(Item::Rope));
        assert_eq!(
            to_text(&departure.narrate()),
            "You used your Rope to cross the Mountains."
        );
    }

    #[test]
    fn crossing_item_breaks_on_low_roll() {
        let t = town(TerrainKind::Desert, true);
        let mut h = Hunter::new("Ann", 10);
        h.add_item(Item::Water);
        let mut dice = FixedDice::new([0.2]);
        let departure = t.leave_town(&mut h, &mut dice, true);
        assert_eq!(
            departure,
            Departure::Crossed {
                item: Item::Water,
                terrain: TerrainKind::Desert,
                broke: true
            }
        );
        assert!(!h.has_item(Item::Water));
        assert!(to_text(&departure.narrate()).contains("your Water broke"));
    }

    #[test]
    fn crossing_item_survives_high_roll() {
        let t = town(TerrainKind::Desert, true);
        let mut h = Hunter::new("Ann", 10);
        h.add_item(Item::Water);
        let mut dice = FixedDice::new([0.5]);
        assert!(t.leave_town(&mut h, &mut dice, true).left());
        assert!(h.has_item(Item::Water));
    }

    #[test]
    fn no_trouble_leaves_gold_alone() {
        let t = town(TerrainKind::Plains, true);
        let mut h = Hunter::new("Ann", 10);
        let mut dice = FixedDice::new([0.66]);
        assert_eq!(t.look_for_trouble(&mut h, &mut dice), Brawl::NoTrouble);
        assert_eq!(h.gold(), 10);
    }

    #[test]
    fn quiet_town_win() {
        let t = town(TerrainKind::Plains, false);
        let mut h = Hunter::new("Ann", 10);
        // 0.9 > 0.33 finds trouble, 0.45 -> stake 5, 0.9 > 0.33 wins
        let mut dice = FixedDice::new([0.9, 0.45, 0.9]);
        let brawl = t.look_for_trouble(&mut h, &mut dice);
        assert_eq!(brawl, Brawl::Won(5));
        assert_eq!(h.gold(), 15);
        assert!(to_text(&brawl.narrate()).contains("receive 5 gold"));
    }

    #[test]
    fn tough_town_loss() {
        let t = town(TerrainKind::Plains, true);
        let mut h = Hunter::new("Ann", 3);
        let mut dice = FixedDice::new([0.9, 0.95, 0.5]);
        assert_eq!(t.look_for_trouble(&mut h, &mut dice), Brawl::Lost(10));
        assert_eq!(h.gold(), -7);
    }

    #[test]
    fn sword_makes_the_brawler_yield() {
        let t = town(TerrainKind::Plains, true);
        let mut h = Hunter::new("Ann", 3);
        h.add_item(Item::Sword);
        let mut dice = FixedDice::new([0.9, 0.5, 0.1]);
        let brawl = t.look_for_trouble(&mut h, &mut dice);
        assert_eq!(brawl, Brawl::Yielded);
        assert_eq!(h.gold(), 3);
        assert!(to_text(&brawl.narrate()).contains("sword"));
    }

    #[test]
    fn flags_only_go_one_way() {
        let mut t = town(TerrainKind::Plains, false);
        t.mark_searched();
        t.mark_searched();
        assert!(t.searched());
        assert!(!t.dug());
        t.mark_dug();
        assert!(t.dug());
    }

    #[test]
    fn enter_shop_delegates() {
        let t = town(TerrainKind::Plains, false);
        let shop = Shop::new(0.5, Unlocks::default());
        let mut h = Hunter::new("Ann", 20);
        let receipt = t.enter_shop(&shop, &mut h, ShopMode::Buy, Item::Horse).unwrap();
        assert_eq!(receipt.gold, 12);
        assert!(h.has_item(Item::Horse));
        assert_eq!(Town::left_shop().text, "You left the shop.");
    }

    #[test]
    fn display() {
        assert_eq!(
            town(TerrainKind::Jungle, false).to_string(),
            "This nice little town is surrounded by Jungle."
        );
    }

    proptest! {
        #[test]
        fn same_seed_same_town(seed in any::<u64>(), toughness in 0.0f64..=1.0) {
            let a = Town::generate(&mut StdRng::seed_from_u64(seed), toughness, Unlocks::default());
            let b = Town::generate(&mut StdRng::seed_from_u64(seed), toughness, Unlocks::default());
            prop_assert_eq!(a.terrain(), b.terrain());
            prop_assert_eq!(a.is_tough(), b.is_tough());
            prop_assert_eq!(a.treasure(), b.treasure());
        }

        #[test]
        fn brawl_moves_gold_by_at_most_ten(
            tough in any::<bool>(),
            find in 0.0f64..1.0,
            stake in 0.0f64..1.0,
            fight in 0.0f64..1.0,
        ) {
            let t = town(TerrainKind::Plains, tough);
            let mut h = Hunter::new("Ann", 50);
            let mut dice = FixedDice::new([find, stake, fight]);
            let brawl = t.look_for_trouble(&mut h, &mut dice);
            let delta = h.gold() - 50;
            prop_assert_eq!(delta, brawl.gold_change());
            match brawl {
                Brawl::NoTrouble => prop_assert_eq!(delta, 0),
                Brawl::Won(g) => prop_assert!((1..=10).contains(&g) && delta > 0),
                Brawl::Lost(g) => prop_assert!((1..=10).contains(&g) && delta < 0),
                Brawl::Yielded => prop_assert!(false, "no sword, no yield"),
            }
        }
    }
}
