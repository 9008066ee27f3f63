use crate::app::state::AppState;
use crate::ui::layout::centered_column;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let area = centered_column(area, 60);
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("GameVerse", Theme::title())).alignment(Alignment::Center),
        Line::default(),
        Line::from(Span::styled(
            format!("{} games in the store", state.catalog.len()),
            Theme::muted(),
        ))
        .alignment(Alignment::Center),
    ];

    if !state.cart.is_empty() {
        lines.push(
            Line::from(Span::styled(
                format!(
                    "{} in your cart ({})",
                    state.cart.total_quantity(),
                    state.format_price(state.cart.subtotal())
                ),
                Theme::muted(),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::default());
    for (keys, what) in [
        ("F1-F4", "switch screens"),
        ("↑/↓", "move selection"),
        ("Enter", "add a game to the cart (Explore)"),
        ("+/-", "change quantity (Cart)"),
        ("d", "remove from cart"),
        ("c", "check out"),
        ("q", "quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>8}  ", keys), Theme::link()),
            Span::styled(what, Theme::muted()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .style(Theme::screen())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
