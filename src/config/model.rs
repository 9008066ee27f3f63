//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML.
//! Every field has a sensible default so the application works out of the box.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::GameId;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_catalog")]
    pub catalog: Vec<GameConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            catalog: default_catalog(),
        }
    }
}

/// A game entry offered on the Explore screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Unit price. Quote it in TOML (`price = "19.99"`) to keep it exact.
    pub price: Decimal,
    #[serde(default)]
    pub image: String,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Route of the tab selected at startup (`home`, `explore`, `cart`, `profile`).
    #[serde(default = "default_start_tab")]
    pub start_tab: String,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            start_tab: default_start_tab(),
            status_timeout_secs: default_status_timeout(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_currency_symbol() -> String {
    "€".to_string()
}
fn default_start_tab() -> String {
    "profile".to_string()
}
fn default_status_timeout() -> u64 {
    4
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/gameverse/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

fn game(id: GameId, name: &str, description: &str, cents: i64, image: &str) -> GameConfig {
    GameConfig {
        id,
        name: name.into(),
        description: description.into(),
        price: Decimal::new(cents, 2),
        image: image.into(),
    }
}

fn default_catalog() -> Vec<GameConfig> {
    vec![
        game(
            1,
            "Hollow Knight",
            "Hand-drawn action adventure in a ruined insect kingdom",
            1499,
            "hollow_knight.png",
        ),
        game(2, "Celeste", "Precision platformer about climbing a mountain", 1999, "celeste.png"),
        game(
            3,
            "Stardew Valley",
            "Farming and life sim in Pelican Town",
            1399,
            "stardew_valley.png",
        ),
        game(4, "Hades", "Rogue-like dungeon crawler out of the Underworld", 2499, "hades.png"),
        game(5, "Terraria", "Dig, fight, explore, build", 999, "terraria.png"),
        game(6, "Dead Cells", "Rogue-lite metroidvania action platformer", 2499, "dead_cells.png"),
        game(7, "Cuphead", "Run and gun in a 1930s cartoon style", 1999, "cuphead.png"),
        game(8, "Among Us", "Online social deduction on a spaceship", 500, "among_us.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.currency_symbol, "€");
        assert_eq!(cfg.ui.start_tab, "profile");
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.catalog.len(), default_catalog().len());
    }

    #[test]
    fn test_parse_catalog_and_ui() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            currency_symbol = "$"
            start_tab = "cart"

            [[catalog]]
            id = 10
            name = "Tetris"
            price = "1.005"

            [[catalog]]
            id = 11
            name = "Portal"
            description = "Thinking with portals"
            price = "9.99"
            image = "portal.png"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.currency_symbol, "$");
        assert_eq!(cfg.ui.start_tab, "cart");
        assert_eq!(cfg.ui.status_timeout_secs, 4);
        assert_eq!(cfg.catalog.len(), 2);
        assert_eq!(cfg.catalog[0].price.to_string(), "1.005");
        assert_eq!(cfg.catalog[0].description, "");
        assert_eq!(cfg.catalog[1].image, "portal.png");
    }
}
