use crate::app::state::AppState;
use crate::cart::CartItem;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" GAME CART ")
        .title_style(Theme::title())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::screen());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = state.cart.cart_items();
    if items.is_empty() {
        let y = inner.y + inner.height / 2;
        let line_area = Rect::new(inner.x, y, inner.width, 1.min(inner.height));
        let empty = Paragraph::new(Span::styled("Your cart is empty", Theme::muted()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, line_area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(2),    // Rows
            Constraint::Length(4), // Total + checkout
        ])
        .split(inner);

    let width = chunks[0].width.saturating_sub(2) as usize;
    let rows: Vec<ListItem> = items.iter().map(|item| row(state, item, width)).collect();
    let list = List::new(rows)
        .highlight_style(Theme::selected_row())
        .highlight_symbol("▌ ");
    let mut list_state = ListState::default().with_selected(Some(state.cart_selected));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    render_footer(frame, chunks[1], state);
}

fn row<'a>(state: &AppState, item: &'a CartItem, width: usize) -> ListItem<'a> {
    let game = item.game();
    let price = state.format_price(game.price());
    let control = format!(" -  {}  + ", item.quantity());
    let pad = width.saturating_sub(price.width() + control.width());

    ListItem::new(vec![
        Line::from(Span::styled(game.name(), Theme::title())),
        Line::from(vec![
            Span::styled(price, Theme::price()),
            Span::raw(" ".repeat(pad)),
            Span::styled(control, Theme::quantity_control()),
        ]),
        Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(Theme::BG_CONTROL),
        )),
    ])
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let total = state.format_price(state.cart.subtotal());
    let pad = (area.width as usize).saturating_sub("Total:".width() + total.width());

    let lines = vec![
        Line::from(vec![
            Span::styled("Total:", Theme::title()),
            Span::raw(" ".repeat(pad)),
            Span::styled(total, Theme::title()),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Theme::border(),
        )),
        Line::default(),
        Line::from(Span::styled("  CHECKOUT (c)  ", Theme::button())).alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
