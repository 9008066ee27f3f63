mod app;
mod cart;
mod catalog;
mod config;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::nav::NavTab;
use crate::app::state::AppState;
use crate::cart::checkout::{self, CheckoutError};
use crate::cart::CartLedger;
use crate::catalog::Catalog;
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    let catalog = Catalog::from_config(&cfg.catalog).context("Invalid catalog in config")?;
    info!(games = catalog.len(), "catalog loaded");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let state = AppState::new(cfg, catalog, CartLedger::new());
    let result = run_app(&mut terminal, state).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (1s, drives the clock and status expiry)
    let tick_tx = event_tx;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(1));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        let tick = matches!(event, AppEvent::Tick);
        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            apply_action(&mut state, action);
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // The clock in the status bar moves on every tick
        if state.dirty || tick {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::Checkout => match checkout::checkout(&state.cart) {
            Ok(never) => match never {},
            Err(CheckoutError::EmptyCart) => state.error("Your cart is empty"),
            Err(e @ CheckoutError::NotImplemented { .. }) => {
                warn!(error = %e, items = state.cart.total_quantity(), "checkout requested");
                state.error(format!("Checkout unavailable: {}", e));
            }
        },
        Action::SubmitRegistration => {
            use crate::app::form::FieldKind;
            let lengths: Vec<usize> = FieldKind::ALL
                .iter()
                .map(|k| state.register.input(*k).text.chars().count())
                .collect();
            info!(?lengths, "sign-up submitted");
            state.register.clear();
            state.select_tab(NavTab::Home);
            state.info("Registration is not connected to an account service");
        }
        Action::NavigateToLogin => {
            info!("sign-in requested");
            state.info("Sign in is not available");
        }
        Action::Quit => state.should_quit = true,
    }
}
