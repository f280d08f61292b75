//! Core engine for Treasure Hunter.
//!
//! A hunter travels between randomly generated towns, trading at the shop,
//! brawling for gold, hunting for treasure, and digging for gold, until the
//! gold runs out or the player quits. This crate holds the town and session
//! state machine; console I/O lives in the frontend.

pub mod config;
pub mod dice;
pub mod error;
pub mod hunter;
pub mod item;
pub mod narration;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod treasure;

pub use config::{GameConfig, Mode, Unlocks};
pub use dice::{Dice, FixedDice};
pub use error::{HuntError, HuntResult};
pub use hunter::{Dig, Hunter, TreasureFind};
pub use item::Item;
pub use narration::{Narration, Tone};
pub use session::{Action, Ending, Phase, Session};
pub use shop::{Listing, Receipt, Shop, ShopMode};
pub use terrain::{Terrain, TerrainKind};
pub use town::{Brawl, Departure, Town};
pub use treasure::Treasure;
