//! Error types for the treasure hunter engine.

use thiserror::Error;

use crate::item::Item;

/// Result type for treasure hunter operations.
pub type HuntResult<T> = Result<T, HuntError>;

/// Errors that can occur while processing a turn.
///
/// These are input and precondition errors: the session keeps running after
/// any of them. Narrated failures (a blocked crossing, a missing shovel) are
/// not errors and come back as ordinary outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuntError {
    /// Unrecognised menu choice.
    #[error("Yikes! '{0}' is not a valid option. Try again.")]
    InvalidChoice(String),

    /// Item name that matches nothing in the game.
    #[error("never heard of a '{0}'")]
    UnknownItem(String),

    /// Item the shop does not deal in.
    #[error("we don't deal in {0}s here")]
    NotStocked(Item),

    /// Not enough gold for a purchase.
    #[error("a {item} costs {price} gold and you only have {gold}")]
    CannotAfford {
        /// The item the hunter tried to buy.
        item: Item,
        /// Its price.
        price: u32,
        /// The hunter's gold at the time.
        gold: i64,
    },

    /// Selling something the hunter isn't carrying.
    #[error("you don't have a {0} to sell")]
    NotCarrying(Item),

    /// Input arrived after the game ended.
    #[error("the game is over")]
    GameOver,
}
