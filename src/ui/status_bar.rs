use crate::app::state::*;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = match state.status.as_ref().map(|s| s.kind) {
        Some(StatusKind::Error) => Theme::status_error(),
        _ => Theme::status_bar(),
    };
    let text = format!(" {} ", state.status_line());
    let clock = format!(
        " {} [{}] ",
        Local::now().format(&state.config.ui.timestamp_format),
        state.tab.label().to_uppercase()
    );

    // Pad to fill remaining space
    let remaining = (area.width as usize).saturating_sub(text.width() + clock.width());
    let line = Line::from(vec![
        Span::styled(text, style),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(clock, Theme::status_bar()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
