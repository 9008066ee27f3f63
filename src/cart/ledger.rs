//! The cart ledger: one entry per distinct game, kept in insertion order.
//!
//! The ledger is the single source of truth for the cart. Readers borrow a
//! snapshot through [`CartLedger::cart_items`] and re-read it after each
//! mutation; [`CartLedger::revision`] tells them whether anything changed
//! since their last read. Operations on unknown ids are no-ops.

use super::game::{Game, GameId};
use super::money;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// One (game, quantity) entry. `quantity` is never zero while the entry is
/// held by a ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    game: Arc<Game>,
    quantity: u32,
}

impl CartItem {
    pub fn game(&self) -> &Arc<Game> {
        &self.game
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unrounded `price × quantity`, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.game
            .price()
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

#[derive(Debug, Default)]
pub struct CartLedger {
    items: Vec<CartItem>,
    revision: u64,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the entry for `game.id()`, or insert it with quantity 1.
    pub fn add_or_increment(&mut self, game: Arc<Game>) {
        let id = game.id();
        match self.position(id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(1);
                debug!(game_id = id, quantity = item.quantity, "cart entry incremented");
            }
            None => {
                debug!(game_id = id, name = game.name(), "cart entry added");
                self.items.push(CartItem { game, quantity: 1 });
            }
        }
        self.bump();
    }

    /// Set the quantity of an existing entry. Zero or negative removes it;
    /// an unknown id is ignored. Requests above `u32::MAX` are stored as
    /// `u32::MAX`, so [`quantity_of`](Self::quantity_of) may report less than
    /// was asked for.
    pub fn update_quantity(&mut self, id: GameId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_game(id);
            return;
        }
        let Some(idx) = self.position(id) else {
            return;
        };
        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        let item = &mut self.items[idx];
        if item.quantity == quantity {
            return;
        }
        item.quantity = quantity;
        debug!(game_id = id, quantity, "cart entry quantity set");
        self.bump();
    }

    pub fn remove_game(&mut self, id: GameId) {
        if let Some(idx) = self.position(id) {
            self.items.remove(idx);
            debug!(game_id = id, "cart entry removed");
            self.bump();
        }
    }

    /// The "+" button of a cart row.
    pub fn increment(&mut self, id: GameId) {
        if let Some(current) = self.quantity_of(id) {
            self.update_quantity(id, i64::from(current) + 1);
        }
    }

    /// The "-" button of a cart row. At quantity 1 the entry is removed.
    pub fn decrement(&mut self, id: GameId) {
        if let Some(current) = self.quantity_of(id) {
            self.update_quantity(id, i64::from(current) - 1);
        }
    }

    pub fn cart_items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn quantity_of(&self, id: GameId) -> Option<u32> {
        self.position(id).map(|idx| self.items[idx].quantity)
    }

    /// Sum of `price × quantity` over all entries, rounded half-up to cents.
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        let sum = self
            .items
            .iter()
            .map(CartItem::line_total)
            .fold(Decimal::ZERO, |acc, line| {
                acc.checked_add(line).unwrap_or(Decimal::MAX)
            });
        money::round_currency(sum)
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bumped on every mutation that changed the ledger.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: GameId) -> Option<usize> {
        self.items.iter().position(|i| i.game.id() == id)
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
