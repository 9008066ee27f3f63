//! Shopping cart: the ledger of selected games, money helpers, and the
//! checkout boundary.

pub mod checkout;
pub mod game;
pub mod ledger;
pub mod money;

pub use game::{Game, GameId};
pub use ledger::{CartItem, CartLedger};
