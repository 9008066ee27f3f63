use rust_decimal::Decimal;

pub type GameId = u32;

/// A game offered by the store. Immutable once built; shared between the
/// catalog and the cart through `Arc<Game>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: GameId,
    name: String,
    description: String,
    price: Decimal,
    image: String,
}

impl Game {
    /// Returns `None` when `price` is negative.
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Option<Self> {
        if price.is_sign_negative() && !price.is_zero() {
            return None;
        }
        Some(Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Image reference (asset path or key), shown as-is.
    pub fn image(&self) -> &str {
        &self.image
    }
}
