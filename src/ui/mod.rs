mod cart;
mod explore;
mod home;
mod layout;
mod nav_bar;
mod register;
mod status_bar;
mod theme;

use crate::app::nav::NavTab;
use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    match state.tab {
        NavTab::Home => home::render(frame, app_layout.screen, state),
        NavTab::Explore => explore::render(frame, app_layout.screen, state),
        NavTab::Cart => cart::render(frame, app_layout.screen, state),
        NavTab::Profile => register::render(frame, app_layout.screen, state),
    }
    nav_bar::render(frame, app_layout.nav_bar, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_nav_bar_lists_every_tab() {
        let screen = draw(&test_state());
        for tab in NavTab::ALL {
            assert!(screen.contains(tab.label()), "missing {}", tab.label());
        }
    }

    #[test]
    fn test_empty_cart_screen() {
        let mut state = test_state();
        state.select_tab(NavTab::Cart);
        let screen = draw(&state);
        assert!(screen.contains("Your cart is empty"));
        assert!(!screen.contains("Total:"));
    }

    #[test]
    fn test_cart_screen_shows_rows_and_total() {
        let mut state = test_state();
        let celeste = state.catalog.games()[1].clone();
        let among_us = state.catalog.games()[7].clone();
        state.cart.add_or_increment(celeste.clone());
        state.cart.add_or_increment(celeste);
        state.cart.add_or_increment(among_us);
        state.select_tab(NavTab::Cart);

        let screen = draw(&state);
        assert!(screen.contains("Celeste"));
        assert!(screen.contains("Among Us"));
        assert!(screen.contains(" -  2  + "));
        assert!(screen.contains("Total:"));
        assert!(screen.contains("€44.98"));
    }

    #[test]
    fn test_register_screen_masks_passwords() {
        let mut state = test_state();
        state.register.focus_next();
        state.register.focus_next();
        for c in "secret".chars() {
            state.register.focused_input_mut().insert_char(c);
        }
        let screen = draw(&state);
        assert!(screen.contains("••••••"));
        assert!(!screen.contains("secret"));
        assert!(screen.contains("Confirm password"));
    }

    #[test]
    fn test_explore_lists_catalog() {
        let mut state = test_state();
        state.select_tab(NavTab::Explore);
        let screen = draw(&state);
        assert!(screen.contains("Hollow Knight"));
        assert!(screen.contains("€14.99"));
        assert!(screen.contains("hollow_knight.png"));
    }
}
