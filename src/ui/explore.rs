use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" EXPLORE - Enter to add to cart ")
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::screen());

    if state.catalog.is_empty() {
        let empty = List::new([ListItem::new(Span::styled(
            "No games available",
            Theme::muted(),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state
        .catalog
        .games()
        .iter()
        .map(|game| {
            let in_cart = state
                .cart
                .quantity_of(game.id())
                .map(|q| format!("  [{} in cart]", q))
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(game.name().to_string(), Theme::title()),
                    Span::styled(in_cart, Theme::link()),
                    Span::styled(image_label(game.image()), Theme::muted()),
                ]),
                Line::from(vec![
                    Span::styled(state.format_price(game.price()), Theme::price()),
                    Span::raw("  "),
                    Span::styled(game.description().to_string(), Theme::muted()),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::selected_row())
        .highlight_symbol("▌ ");
    let mut list_state = ListState::default().with_selected(Some(state.explore_selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn image_label(image: &str) -> String {
    if image.is_empty() {
        String::new()
    } else {
        format!("  ({})", image)
    }
}
