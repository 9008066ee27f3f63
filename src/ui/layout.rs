use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub screen: Rect,
    pub nav_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical: screen | nav bar | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Active screen
            Constraint::Length(3), // Bottom navigation
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        screen: chunks[0],
        nav_bar: chunks[1],
        status_bar: chunks[2],
    }
}

/// A rect of at most `width` columns centered horizontally in `area`.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let w = width.min(area.width);
    Rect::new(area.x + (area.width - w) / 2, area.y, w, area.height)
}
