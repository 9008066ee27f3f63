use crate::app::nav::NavTab;
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border())
        .style(Theme::nav_bar());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(NavTab::ALL.map(|_| Constraint::Ratio(1, NavTab::ALL.len() as u32)))
        .split(inner);

    for (tab, cell) in NavTab::ALL.into_iter().zip(cells.iter()) {
        let style = Theme::nav_item(tab == state.tab);
        let mut lines = vec![Line::from(Span::styled(
            format!("{} {}", tab.icon(), tab.label()),
            style,
        ))];
        if cell.height > 1 {
            lines.push(Line::from(Span::styled(
                format!("F{}", tab.index() + 1),
                Theme::muted(),
            )));
        }
        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, *cell);
    }
}
