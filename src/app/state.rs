use crate::app::form::RegisterForm;
use crate::app::nav::NavTab;
use crate::cart::{money, CartLedger, Game, GameId};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Longest a status message stays up, whatever the config asks for.
const MAX_STATUS_TIMEOUT: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub cart: CartLedger,
    pub tab: NavTab,
    pub explore_selected: usize,
    pub cart_selected: usize,
    pub register: RegisterForm,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
    /// Ledger revision the views were last refreshed against.
    seen_revision: u64,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog, cart: CartLedger) -> Self {
        let tab = NavTab::from_route(&config.ui.start_tab).unwrap_or(NavTab::Profile);
        let seen_revision = cart.revision();
        Self {
            config,
            catalog,
            cart,
            tab,
            explore_selected: 0,
            cart_selected: 0,
            register: RegisterForm::default(),
            status: None,
            should_quit: false,
            dirty: true,
            seen_revision,
        }
    }

    pub fn select_tab(&mut self, tab: NavTab) {
        if self.tab != tab {
            self.tab = tab;
            self.dirty = true;
        }
    }

    /// Re-read the ledger if it changed since the last refresh. Returns
    /// whether a refresh happened.
    pub fn sync_cart(&mut self) -> bool {
        let revision = self.cart.revision();
        if revision == self.seen_revision {
            return false;
        }
        self.seen_revision = revision;
        self.cart_selected = self.cart_selected.min(self.cart.len().saturating_sub(1));
        self.dirty = true;
        true
    }

    pub fn selected_catalog_game(&self) -> Option<&Arc<Game>> {
        self.catalog.games().get(self.explore_selected)
    }

    pub fn selected_cart_game_id(&self) -> Option<GameId> {
        self.cart
            .cart_items()
            .get(self.cart_selected)
            .map(|item| item.game().id())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let (selected, len) = match self.tab {
            NavTab::Explore => (&mut self.explore_selected, self.catalog.len()),
            NavTab::Cart => (&mut self.cart_selected, self.cart.len()),
            _ => return,
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        *selected = selected.saturating_add_signed(delta).min(len - 1);
        self.dirty = true;
    }

    pub fn format_price(&self, amount: rust_decimal::Decimal) -> String {
        money::format_price(&self.config.ui.currency_symbol, amount)
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Error, text.into());
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        let timeout =
            Duration::from_secs(self.config.ui.status_timeout_secs).min(MAX_STATUS_TIMEOUT);
        let now = Instant::now();
        self.status = Some(StatusMessage {
            text,
            kind,
            expires_at: now.checked_add(timeout).unwrap_or(now),
        });
        self.dirty = true;
    }

    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref status) = self.status {
            return status.text.clone();
        }
        let count = self.cart.total_quantity();
        if count == 0 {
            "Cart is empty".to_string()
        } else {
            format!(
                "Cart: {} item{} | {}",
                count,
                if count == 1 { "" } else { "s" },
                self.format_price(self.cart.subtotal())
            )
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_state() -> AppState {
        let config = AppConfig::default();
        let catalog = Catalog::from_config(&config.catalog).unwrap();
        AppState::new(config, catalog, CartLedger::new())
    }

    #[test]
    fn test_start_tab_from_config() {
        let state = test_state();
        assert_eq!(state.tab, NavTab::Profile);

        let mut config = AppConfig::default();
        config.ui.start_tab = "explore".into();
        let catalog = Catalog::from_config(&config.catalog).unwrap();
        let state = AppState::new(config, catalog, CartLedger::new());
        assert_eq!(state.tab, NavTab::Explore);
    }

    #[test]
    fn test_sync_cart_only_on_change() {
        let mut state = test_state();
        assert!(!state.sync_cart());
        let game = state.catalog.games()[0].clone();
        state.cart.add_or_increment(game);
        assert!(state.sync_cart());
        assert!(!state.sync_cart());
    }

    #[test]
    fn test_sync_clamps_cart_selection() {
        let mut state = test_state();
        for game in state.catalog.games()[..3].to_vec() {
            state.cart.add_or_increment(game);
        }
        state.sync_cart();
        state.cart_selected = 2;
        let last = state.selected_cart_game_id().unwrap();
        state.cart.remove_game(last);
        state.sync_cart();
        assert_eq!(state.cart_selected, 1);
    }

    #[test]
    fn test_move_selection_is_bounded() {
        let mut state = test_state();
        state.select_tab(NavTab::Explore);
        state.move_selection(-1);
        assert_eq!(state.explore_selected, 0);
        state.move_selection(100);
        assert_eq!(state.explore_selected, state.catalog.len() - 1);

        state.select_tab(NavTab::Cart);
        state.move_selection(1);
        assert_eq!(state.cart_selected, 0);
    }

    #[test]
    fn test_status_expires() {
        let mut state = test_state();
        state.info("hello");
        assert_eq!(state.status_line(), "hello");
        let later = Instant::now() + Duration::from_secs(60);
        state.expire_status(later);
        assert!(state.status.is_none());
        assert_eq!(state.status_line(), "Cart is empty");
    }

    #[test]
    fn test_huge_status_timeout_is_capped() {
        let mut state = test_state();
        state.config.ui.status_timeout_secs = u64::MAX;
        state.info("hi");
        let status = state.status.clone().unwrap();
        assert!(status.expires_at <= Instant::now() + MAX_STATUS_TIMEOUT);
        state.expire_status(Instant::now() + MAX_STATUS_TIMEOUT + Duration::from_secs(1));
        assert!(state.status.is_none());
    }

    #[test]
    fn test_status_line_summarizes_cart() {
        let mut state = test_state();
        let game = state.catalog.games()[1].clone();
        state.cart.add_or_increment(game.clone());
        state.cart.add_or_increment(game);
        assert_eq!(state.status_line(), "Cart: 2 items | €39.98");
    }
}
