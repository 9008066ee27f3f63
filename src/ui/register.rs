use crate::app::form::FieldKind;
use crate::app::state::AppState;
use crate::ui::layout::centered_column;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Rows taken by one labelled input: label line plus a bordered field.
const FIELD_HEIGHT: u16 = 4;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(Block::default().style(Theme::screen()), area);
    let area = centered_column(area, 56);

    let mut constraints = vec![
        Constraint::Length(2), // Brand
        Constraint::Length(2), // Heading
    ];
    constraints.extend(FieldKind::ALL.map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.extend([
        Constraint::Length(2), // Submit
        Constraint::Min(0),
        Constraint::Length(1), // Sign-in link
    ]);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled("◆ GameVerse", Theme::title())).alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(Span::styled("Create account", Theme::title())), chunks[1]);

    for (i, kind) in FieldKind::ALL.into_iter().enumerate() {
        render_field(frame, chunks[2 + i], state, kind);
    }

    let submit = 2 + FieldKind::ALL.len();
    frame.render_widget(
        Paragraph::new(Span::styled("  Sign up (Enter on last field)  ", Theme::button()))
            .alignment(Alignment::Center),
        chunks[submit],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Already have an account? ", Theme::muted()),
            Span::styled("Sign in (Ctrl-L)", Theme::link()),
        ]))
        .alignment(Alignment::Center),
        chunks[submit + 2],
    );
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState, kind: FieldKind) {
    let focused = state.register.focused() == kind;
    let label = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    frame.render_widget(Paragraph::new(Span::styled(kind.label(), Theme::title())), label);

    let field = Rect::new(
        area.x,
        area.y + 1,
        area.width,
        area.height.saturating_sub(1).min(3),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .padding(Padding::horizontal(1))
        .style(Theme::input_field());
    let inner = block.inner(field);
    frame.render_widget(block, field);

    let value = state.register.display_value(kind);
    let text = if value.is_empty() {
        Span::styled(kind.placeholder(), Theme::muted())
    } else {
        Span::raw(value)
    };
    frame.render_widget(Paragraph::new(text), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + state.register.display_cursor() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
