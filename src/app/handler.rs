use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::nav::NavTab;
use crate::app::state::AppState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    let actions = match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_status(Instant::now());
            vec![]
        }
    };

    // Views re-read the ledger after any mutation made by the key handlers.
    state.sync_cart();
    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if let KeyCode::F(n @ 1..=4) = key.code {
        state.select_tab(NavTab::ALL[usize::from(n) - 1]);
        return vec![];
    }

    // The sign-up form takes every other key as text
    if state.tab == NavTab::Profile {
        return handle_register_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            state.select_tab(NavTab::ALL[idx]);
            return vec![];
        }
        KeyCode::Tab => {
            state.select_tab(state.tab.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.select_tab(state.tab.prev());
            return vec![];
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.move_selection(-1);
            return vec![];
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.move_selection(1);
            return vec![];
        }
        _ => {}
    }

    match state.tab {
        NavTab::Explore => handle_explore_key(state, key),
        NavTab::Cart => handle_cart_key(state, key),
        NavTab::Home | NavTab::Profile => vec![],
    }
}

fn handle_explore_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('a') => {
            if let Some(game) = state.selected_catalog_game().cloned() {
                state.cart.add_or_increment(game.clone());
                state.info(format!("Added {} to the cart", game.name()));
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_cart_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('c') {
        return vec![Action::Checkout];
    }
    let Some(id) = state.selected_cart_game_id() else {
        return vec![];
    };
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => state.cart.increment(id),
        KeyCode::Char('-') | KeyCode::Left => state.cart.decrement(id),
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => state.cart.remove_game(id),
        _ => {}
    }
    vec![]
}

fn handle_register_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('l') {
        return vec![Action::NavigateToLogin];
    }
    if key.code == KeyCode::Esc {
        state.select_tab(NavTab::Home);
        return vec![];
    }

    state.dirty = true;
    let form = &mut state.register;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Enter => {
            if form.is_last_focused() {
                return vec![Action::SubmitRegistration];
            }
            form.focus_next();
        }
        KeyCode::Char(c) if !ctrl => form.focused_input_mut().insert_char(c),
        KeyCode::Backspace => form.focused_input_mut().delete_back(),
        KeyCode::Delete => form.focused_input_mut().delete_forward(),
        KeyCode::Left => form.focused_input_mut().move_left(),
        KeyCode::Right => form.focused_input_mut().move_right(),
        KeyCode::Home => form.focused_input_mut().move_home(),
        KeyCode::End => form.focused_input_mut().move_end(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::FieldKind;
    use crate::app::state::tests::test_state;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn type_str(state: &mut AppState, s: &str) {
        for c in s.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_function_keys_switch_tabs() {
        let mut state = test_state();
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.tab, NavTab::Cart);
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.tab, NavTab::Explore);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.tab, NavTab::Cart);
    }

    #[test]
    fn test_add_from_explore_then_adjust_in_cart() {
        let mut state = test_state();
        state.select_tab(NavTab::Explore);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('a'));
        let second = state.catalog.games()[1].id();
        assert_eq!(state.cart.quantity_of(second), Some(2));

        press(&mut state, KeyCode::F(3));
        press(&mut state, KeyCode::Char('+'));
        assert_eq!(state.cart.quantity_of(second), Some(3));
        for _ in 0..3 {
            press(&mut state, KeyCode::Char('-'));
        }
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_remove_selected_row() {
        let mut state = test_state();
        for game in state.catalog.games()[..2].to_vec() {
            state.cart.add_or_increment(game);
        }
        state.select_tab(NavTab::Cart);
        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart_selected, 0);
    }

    #[test]
    fn test_checkout_key_emits_action() {
        let mut state = test_state();
        state.select_tab(NavTab::Cart);
        assert_eq!(press(&mut state, KeyCode::Char('c')), vec![Action::Checkout]);
    }

    #[test]
    fn test_register_form_captures_text() {
        let mut state = test_state();
        assert_eq!(state.tab, NavTab::Profile);
        type_str(&mut state, "q1");
        assert_eq!(state.tab, NavTab::Profile);
        assert_eq!(state.register.input(FieldKind::Username).text, "q1");

        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        assert!(state.register.is_last_focused());
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            vec![Action::SubmitRegistration]
        );
    }

    #[test]
    fn test_ctrl_l_requests_login() {
        let mut state = test_state();
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(key)));
        assert_eq!(actions, vec![Action::NavigateToLogin]);
        assert!(state.register.input(FieldKind::Username).text.is_empty());
    }

    #[test]
    fn test_quit_outside_form() {
        let mut state = test_state();
        state.select_tab(NavTab::Home);
        assert_eq!(press(&mut state, KeyCode::Char('q')), vec![Action::Quit]);
    }
}
