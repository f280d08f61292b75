//! The town shop: a fixed price list and a markdown on resale.

use log::debug;

use crate::config::Unlocks;
use crate::error::{HuntError, HuntResult};
use crate::hunter::Hunter;
use crate::item::Item;
use crate::narration::Narration;

/// Whether the hunter is buying or selling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    /// Buying from the shop.
    Buy,
    /// Selling to the shop.
    Sell,
}

impl std::fmt::Display for ShopMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// One line of the shop's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    /// The item.
    pub item: Item,
    /// What the shop charges.
    pub price: u32,
    /// What the shop pays for one.
    pub resale: u32,
}

/// A completed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Bought or sold.
    pub mode: ShopMode,
    /// The item traded.
    pub item: Item,
    /// Gold paid (buying) or received (selling).
    pub gold: u32,
}

impl Receipt {
    /// Narrate the trade.
    pub fn narrate(&self) -> Narration {
        match self.mode {
            ShopMode::Buy => Narration::good(format!(
                "Ye' got yerself a {}. Come again soon. ({} gold)",
                self.item, self.gold
            )),
            ShopMode::Sell => Narration::good(format!(
                "Pleasure doin' business with you. You sold your {} for {} gold.",
                self.item, self.gold
            )),
        }
    }
}

/// Base price of an item.
fn base_price(item: Item) -> u32 {
    match item {
        Item::Water => 2,
        Item::Rope => 4,
        Item::Machete => 6,
        Item::Boots | Item::Shovel => 8,
        Item::Horse => 12,
        Item::Boat => 20,
        Item::Sword => 30,
    }
}

/// A shop shared by every town in a session.
#[derive(Debug, Clone)]
pub struct Shop {
    markdown: f64,
    unlocks: Unlocks,
}

impl Shop {
    /// Create a shop that refunds `markdown` of the price on sale.
    pub fn new(markdown: f64, unlocks: Unlocks) -> Self {
        Self {
            markdown: markdown.clamp(0.0, 1.0),
            unlocks,
        }
    }

    /// Fraction of the price refunded on sale.
    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// Returns true if the shop deals in `item`.
    pub fn stocks(&self, item: Item) -> bool {
        item != Item::Sword || self.unlocks.samurai_sword
    }

    /// Price of `item`, if stocked.
    pub fn price(&self, item: Item) -> Option<u32> {
        self.stocks(item).then(|| base_price(item))
    }

    /// What the shop pays for `item`, if stocked.
    pub fn resale(&self, item: Item) -> Option<u32> {
        self.price(item)
            .map(|price| (f64::from(price) * self.markdown).floor() as u32)
    }

    /// Every stocked item with its prices.
    pub fn catalog(&self) -> Vec<Listing> {
        Item::ALL
            .iter()
            .filter_map(|&item| {
                Some(Listing {
                    item,
                    price: self.price(item)?,
                    resale: self.resale(item)?,
                })
            })
            .collect()
    }

    /// Buy one `item` for the hunter.
    pub fn buy(&self, hunter: &mut Hunter, item: Item) -> HuntResult<Receipt> {
        let price = self.price(item).ok_or(HuntError::NotStocked(item))?;
        if hunter.gold() < i64::from(price) {
            return Err(HuntError::CannotAfford {
                item,
                price,
                gold: hunter.gold(),
            });
        }

        hunter.change_gold(-i64::from(price));
        hunter.add_item(item);
        debug!("{} bought {item} for {price}", hunter.name());

        Ok(Receipt {
            mode: ShopMode::Buy,
            item,
            gold: price,
        })
    }

    /// Sell one `item` from the hunter's kit.
    pub fn sell(&self, hunter: &mut Hunter, item: Item) -> HuntResult<Receipt> {
        let resale = self.resale(item).ok_or(HuntError::NotStocked(item))?;
        if !hunter.remove_item(item) {
            return Err(HuntError::NotCarrying(item));
        }

        hunter.change_gold(i64::from(resale));
        debug!("{} sold {item} for {resale}", hunter.name());

        Ok(Receipt {
            mode: ShopMode::Sell,
            item,
            gold: resale,
        })
    }

    /// Run one trade in the given mode.
    pub fn enter(&self, hunter: &mut Hunter, mode: ShopMode, item: Item) -> HuntResult<Receipt> {
        match mode {
            ShopMode::Buy => self.buy(hunter, item),
            ShopMode::Sell => self.sell(hunter, item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> Shop {
        Shop::new(0.5, Unlocks::default())
    }

    #[test]
    fn buy_deducts_price() {
        let mut h = Hunter::new("Ann", 10);
        let receipt = shop().buy(&mut h, Item::Rope).unwrap();
        assert_eq!(receipt.gold, 4);
        assert_eq!(h.gold(), 6);
        assert!(h.has_item(Item::Rope));
    }

    #[test]
    fn buy_too_expensive() {
        let mut h = Hunter::new("Ann", 10);
        let err = shop().buy(&mut h, Item::Boat).unwrap_err();
        assert_eq!(
            err,
            HuntError::CannotAfford {
                item: Item::Boat,
                price: 20,
                gold: 10
            }
        );
        assert_eq!(h.gold(), 10);
        assert!(!h.has_item(Item::Boat));
    }

    #[test]
    fn sell_refunds_markdown() {
        let mut h = Hunter::new("Ann", 0);
        h.add_item(Item::Horse);
        let receipt = shop().sell(&mut h, Item::Horse).unwrap();
        assert_eq!(receipt.gold, 6);
        assert_eq!(h.gold(), 6);
        assert!(!h.has_item(Item::Horse));
    }

    #[test]
    fn hard_markdown_rounds_down() {
        let hard = Shop::new(0.25, Unlocks::default());
        assert_eq!(hard.resale(Item::Machete), Some(1));
        assert_eq!(hard.resale(Item::Boat), Some(5));
    }

    #[test]
    fn sell_missing_item() {
        let mut h = Hunter::new("Ann", 0);
        let err = shop().sell(&mut h, Item::Water).unwrap_err();
        assert_eq!(err, HuntError::NotCarrying(Item::Water));
        assert_eq!(h.gold(), 0);
    }

    #[test]
    fn sword_needs_unlock() {
        let mut h = Hunter::new("Ann", 100);
        assert_eq!(
            shop().buy(&mut h, Item::Sword).unwrap_err(),
            HuntError::NotStocked(Item::Sword)
        );
        assert!(shop().catalog().iter().all(|l| l.item != Item::Sword));

        let samurai = Shop::new(
            0.5,
            Unlocks {
                samurai_sword: true,
            },
        );
        samurai.buy(&mut h, Item::Sword).unwrap();
        assert!(h.has_item(Item::Sword));
        assert_eq!(h.gold(), 70);
    }

    #[test]
    fn catalog_lists_stock() {
        let catalog = shop().catalog();
        assert_eq!(catalog.len(), 7);
        let water = catalog[0];
        assert_eq!(water.item, Item::Water);
        assert_eq!(water.price, 2);
        assert_eq!(water.resale, 1);
    }

    #[test]
    fn enter_dispatches_on_mode() {
        let mut h = Hunter::new("Ann", 10);
        let bought = shop().enter(&mut h, ShopMode::Buy, Item::Water).unwrap();
        assert_eq!(bought.mode, ShopMode::Buy);
        let sold = shop().enter(&mut h, ShopMode::Sell, Item::Water).unwrap();
        assert_eq!(sold.mode, ShopMode::Sell);
        assert_eq!(h.gold(), 9);
    }

    #[test]
    fn receipt_narration() {
        let r = Receipt {
            mode: ShopMode::Sell,
            item: Item::Boat,
            gold: 10,
        };
        assert!(r.narrate().text.contains("sold your Boat for 10 gold"));
    }
}
