//! Session configuration and game modes.

use crate::item::Item;

/// The mode chosen at the start of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default odds.
    Normal,
    /// Tougher towns, stingier shop, and items that break.
    Hard,
    /// Debug mode: a full kit and plenty of gold.
    Test,
    /// Normal odds with the samurai sword for sale.
    Samurai,
}

impl Mode {
    /// Parse the answer to the mode prompt. Anything unrecognised is Normal.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" | "hard" => Self::Hard,
            "test" => Self::Test,
            "s" | "samurai" => Self::Samurai,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
            Self::Test => write!(f, "test"),
            Self::Samurai => write!(f, "samurai"),
        }
    }
}

/// Items unlocked for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unlocks {
    /// The sword is sold in shops and accepted for crossing the jungle.
    pub samurai_sword: bool,
}

/// Configuration for a treasure hunter session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible sessions.
    pub seed: u64,
    /// The mode this configuration was built for.
    pub mode: Mode,
    /// Probability that a newly generated town is tough.
    pub toughness: f64,
    /// Fraction of the price refunded when selling.
    pub markdown: f64,
    /// Crossing items may break on use.
    pub item_breakage: bool,
    /// Gold the hunter starts with.
    pub starting_gold: i64,
    /// Items the hunter starts with.
    pub starting_kit: Vec<Item>,
    /// Session-wide unlocks.
    pub unlocks: Unlocks,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_mode(Mode::Normal)
    }
}

impl GameConfig {
    /// Build the configuration for a mode.
    pub fn for_mode(mode: Mode) -> Self {
        let base = Self {
            seed: 42,
            mode,
            toughness: 0.4,
            markdown: 0.5,
            item_breakage: false,
            starting_gold: 10,
            starting_kit: Vec::new(),
            unlocks: Unlocks::default(),
        };

        match mode {
            Mode::Normal => base,
            Mode::Hard => Self {
                toughness: 0.75,
                markdown: 0.25,
                item_breakage: true,
                ..base
            },
            Mode::Test => {
                let mut starting_kit = Item::CROSSING.to_vec();
                starting_kit.push(Item::Shovel);
                Self {
                    starting_gold: 107,
                    starting_kit,
                    ..base
                }
            }
            Mode::Samurai => Self {
                unlocks: Unlocks {
                    samurai_sword: true,
                },
                ..base
            },
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting gold.
    pub fn with_starting_gold(mut self, gold: i64) -> Self {
        self.starting_gold = gold;
        self
    }

    /// Set the town toughness probability (clamped to 0-1).
    pub fn with_toughness(mut self, toughness: f64) -> Self {
        self.toughness = toughness.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_normal() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.mode, Mode::Normal);
        assert_eq!(cfg.seed, 42);
        assert!((cfg.toughness - 0.4).abs() < f64::EPSILON);
        assert!((cfg.markdown - 0.5).abs() < f64::EPSILON);
        assert!(!cfg.item_breakage);
        assert_eq!(cfg.starting_gold, 10);
        assert!(cfg.starting_kit.is_empty());
        assert!(!cfg.unlocks.samurai_sword);
    }

    #[test]
    fn hard_mode() {
        let cfg = GameConfig::for_mode(Mode::Hard);
        assert!((cfg.toughness - 0.75).abs() < f64::EPSILON);
        assert!((cfg.markdown - 0.25).abs() < f64::EPSILON);
        assert!(cfg.item_breakage);
    }

    #[test]
    fn test_mode_has_every_crossing_item() {
        let cfg = GameConfig::for_mode(Mode::Test);
        assert_eq!(cfg.starting_gold, 107);
        for item in Item::CROSSING {
            assert!(cfg.starting_kit.contains(&item), "missing {item}");
        }
        assert!(cfg.starting_kit.contains(&Item::Shovel));
        assert!(!cfg.item_breakage);
    }

    #[test]
    fn samurai_mode_unlocks_sword() {
        let cfg = GameConfig::for_mode(Mode::Samurai);
        assert!(cfg.unlocks.samurai_sword);
        assert!((cfg.toughness - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_starting_gold(0)
            .with_toughness(3.0);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.starting_gold, 0);
        assert!((cfg.toughness - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_modes() {
        assert_eq!(Mode::parse("y"), Mode::Hard);
        assert_eq!(Mode::parse("HARD"), Mode::Hard);
        assert_eq!(Mode::parse("test"), Mode::Test);
        assert_eq!(Mode::parse("s"), Mode::Samurai);
        assert_eq!(Mode::parse("n"), Mode::Normal);
        assert_eq!(Mode::parse("whatever"), Mode::Normal);
        assert_eq!(Mode::parse(""), Mode::Normal);
    }
}
