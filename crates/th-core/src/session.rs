//! Treasure hunter session management.
//!
//! `Session` owns the hunter, the shop, and the current town, and turns one
//! line of player input at a time into town and hunter operations. Leaving
//! town is the only transition that replaces the town.

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::dice::Dice;
use crate::error::{HuntError, HuntResult};
use crate::hunter::{Hunter, TreasureFind};
use crate::item::Item;
use crate::narration::Narration;
use crate::shop::{Shop, ShopMode};
use crate::town::Town;

/// A menu choice while in town.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buy something at the shop.
    Buy,
    /// Sell something at the shop.
    Sell,
    /// Move on to a different town.
    Move,
    /// Look for a brawl.
    LookForTrouble,
    /// Search the town for its treasure.
    HuntForTreasure,
    /// Dig for gold.
    DigForGold,
    /// Give up and quit.
    Exit,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Action; 7] = [
        Self::Buy,
        Self::Sell,
        Self::Move,
        Self::LookForTrouble,
        Self::HuntForTreasure,
        Self::DigForGold,
        Self::Exit,
    ];

    /// Parse a menu letter, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "b" => Some(Self::Buy),
            "s" => Some(Self::Sell),
            "m" => Some(Self::Move),
            "l" => Some(Self::LookForTrouble),
            "h" => Some(Self::HuntForTreasure),
            "d" => Some(Self::DigForGold),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }

    /// The menu line for this action.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Buy => "(B)uy something at the shop.",
            Self::Sell => "(S)ell something at the shop.",
            Self::Move => "(M)ove on to a different town.",
            Self::LookForTrouble => "(L)ook for trouble!",
            Self::HuntForTreasure => "(H)unt for treasure!",
            Self::DigForGold => "(D)ig for gold!",
            Self::Exit => "Give up the hunt and e(X)it.",
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player quit.
    Quit,
    /// The hunter's gold went negative.
    Broke,
    /// The hunter collected every treasure.
    Victory,
}

/// Where the session is in its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a menu choice.
    InTown,
    /// Waiting for the name of an item to buy or sell.
    Shopping(ShopMode),
    /// Finished; no further input is accepted.
    Over(Ending),
}

/// An interactive treasure hunter session.
pub struct Session<D: Dice = StdRng> {
    config: GameConfig,
    hunter: Hunter,
    shop: Shop,
    town: Town,
    news: Vec<Narration>,
    phase: Phase,
    towns_visited: u32,
    dice: D,
}

impl Session<StdRng> {
    /// Start a session with an RNG seeded from the config.
    pub fn new(name: &str, config: GameConfig) -> Self {
        let dice = StdRng::seed_from_u64(config.seed);
        Self::with_dice(name, config, dice)
    }
}

impl<D: Dice> Session<D> {
    /// Start a session drawing from the given dice.
    pub fn with_dice(name: &str, config: GameConfig, mut dice: D) -> Self {
        let mut hunter = Hunter::new(name.trim(), config.starting_gold);
        for &item in &config.starting_kit {
            hunter.add_item(item);
        }
        let shop = Shop::new(config.markdown, config.unlocks);
        let mut town = Town::generate(&mut dice, config.toughness, config.unlocks);
        let news = town.hunter_arrives(&hunter);
        info!(
            "session started: hunter={}, mode={}, seed={}",
            hunter.name(),
            config.mode,
            config.seed
        );

        Self {
            config,
            hunter,
            shop,
            town,
            news,
            phase: Phase::InTown,
            towns_visited: 1,
            dice,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the hunter.
    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    /// Get the shop.
    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    /// Get the current town.
    pub fn town(&self) -> &Town {
        &self.town
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How the session ended, if it has.
    pub fn ending(&self) -> Option<Ending> {
        match self.phase {
            Phase::Over(ending) => Some(ending),
            _ => None,
        }
    }

    /// Returns true once the session has ended.
    pub fn is_over(&self) -> bool {
        self.ending().is_some()
    }

    /// How many towns the hunter has been to, counting the current one.
    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// The latest town news.
    pub fn news(&self) -> &[Narration] {
        &self.news
    }

    /// The status block shown before each menu: news, hunter, and town.
    pub fn report(&self) -> Vec<Narration> {
        let mut lines = self.news.clone();
        lines.push(Narration::plain("***"));
        lines.extend(self.hunter.to_string().lines().map(Narration::plain));
        if !self.is_over() {
            lines.push(Narration::plain(self.town.to_string()));
        }
        lines
    }

    /// Process a line of player input and return what should be shown now.
    ///
    /// Town news is kept separately and shows up in [`report`](Self::report).
    pub fn process(&mut self, input: &str) -> HuntResult<Vec<Narration>> {
        match self.phase {
            Phase::Over(_) => Err(HuntError::GameOver),
            Phase::Shopping(mode) => self.do_trade(mode, input),
            Phase::InTown => {
                let action = Action::parse(input)
                    .ok_or_else(|| HuntError::InvalidChoice(input.trim().to_string()))?;
                let mut output = self.dispatch(action);
                output.extend(self.check_ending());
                Ok(output)
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Vec<Narration> {
        match action {
            Action::Buy => self.do_enter_shop(ShopMode::Buy),
            Action::Sell => self.do_enter_shop(ShopMode::Sell),
            Action::Move => self.do_move(),
            Action::LookForTrouble => self.do_look_for_trouble(),
            Action::HuntForTreasure => self.do_hunt(),
            Action::DigForGold => self.do_dig(),
            Action::Exit => {
                self.phase = Phase::Over(Ending::Quit);
                info!("{} quit after {} towns", self.hunter.name(), self.towns_visited);
                vec![Narration::plain(format!(
                    "Fare thee well, {}!",
                    self.hunter.name()
                ))]
            }
        }
    }

    fn do_enter_shop(&mut self, mode: ShopMode) -> Vec<Narration> {
        self.phase = Phase::Shopping(mode);
        vec![
            Narration::plain("Welcome to the shop! We have the finest wares in town."),
            Narration::plain(format!(
                "What're you lookin' to {mode}? (enter nothing to leave)"
            )),
        ]
    }

    fn do_trade(&mut self, mode: ShopMode, input: &str) -> HuntResult<Vec<Narration>> {
        // Whatever happens, this input ends the visit.
        self.phase = Phase::InTown;
        self.news = vec![Town::left_shop()];

        let name = input.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("nothing") {
            return Ok(Vec::new());
        }

        let item = Item::parse(name).ok_or_else(|| HuntError::UnknownItem(name.to_string()))?;
        let receipt = self
            .town
            .enter_shop(&self.shop, &mut self.hunter, mode, item)?;
        Ok(vec![receipt.narrate()])
    }

    fn do_move(&mut self) -> Vec<Narration> {
        let departure =
            self.town
                .leave_town(&mut self.hunter, &mut self.dice, self.config.item_breakage);

        if !departure.left() {
            self.news = departure.narrate();
            return Vec::new();
        }

        // The old town goes away, so its news is shown now.
        let farewell = departure.narrate();
        self.town = Town::generate(&mut self.dice, self.config.toughness, self.config.unlocks);
        self.news = self.town.hunter_arrives(&self.hunter);
        self.towns_visited += 1;
        farewell
    }

    fn do_look_for_trouble(&mut self) -> Vec<Narration> {
        let brawl = self.town.look_for_trouble(&mut self.hunter, &mut self.dice);
        self.news = brawl.narrate();
        Vec::new()
    }

    fn do_hunt(&mut self) -> Vec<Narration> {
        if self.town.searched() {
            return vec![Narration::bad("You have already searched this town.")];
        }

        let treasure = self.town.treasure();
        self.town.mark_searched();

        let outcome = match self.hunter.add_treasure(treasure) {
            TreasureFind::Added => {
                Narration::good(format!("You found a {treasure}! Into the bag it goes."))
            }
            TreasureFind::Duplicate => Narration::info(format!(
                "You found a {treasure}, but you already have one. You leave it behind."
            )),
            TreasureFind::Worthless => {
                Narration::bad("You found dust. Not worth carrying around.")
            }
        };
        vec![outcome]
    }

    fn do_dig(&mut self) -> Vec<Narration> {
        let output = if self.town.dug() {
            Narration::bad("You already dug for gold in this town.")
        } else {
            let dig = self.hunter.dig_for_gold(&mut self.dice);
            if dig.dug() {
                self.town.mark_dug();
            }
            dig.narrate()
        };
        self.news.clear();
        vec![output]
    }

    fn check_ending(&mut self) -> Option<Narration> {
        if self.is_over() {
            return None;
        }

        if self.hunter.gold() < 0 {
            self.phase = Phase::Over(Ending::Broke);
            info!("{} went broke with {} gold", self.hunter.name(), self.hunter.gold());
            return Some(Narration::bad("You're out of gold!"));
        }

        if self.hunter.has_all_treasures() {
            self.phase = Phase::Over(Ending::Victory);
            info!("{} collected every treasure", self.hunter.name());
            return Some(Narration::good(
                "Congratulations, you found the last of the three treasures, you win!",
            ));
        }

        None
    }
}
