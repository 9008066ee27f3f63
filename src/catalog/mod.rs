//! The game catalog shown on the Explore screen.

use crate::cart::{Game, GameId};
use crate::config::GameConfig;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate game id {0} in catalog")]
    DuplicateId(GameId),
    #[error("game {id} has a negative price ({price})")]
    NegativePrice { id: GameId, price: Decimal },
}

/// Ordered, id-unique list of games. Entries are shared with the cart.
#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<Arc<Game>>,
}

impl Catalog {
    pub fn from_config(entries: &[GameConfig]) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut games = Vec::with_capacity(entries.len());
        for entry in entries {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateId(entry.id));
            }
            let game = Game::new(
                entry.id,
                entry.name.as_str(),
                entry.description.as_str(),
                entry.price,
                entry.image.as_str(),
            )
            .ok_or(CatalogError::NegativePrice {
                id: entry.id,
                price: entry.price,
            })?;
            games.push(Arc::new(game));
        }
        Ok(Self { games })
    }

    pub fn games(&self) -> &[Arc<Game>] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
