use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(0x19, 0x11, 0x21);
    pub const BG_SURFACE: Color = Color::Rgb(0x28, 0x20, 0x38);
    pub const BG_CONTROL: Color = Color::Rgb(0x33, 0x33, 0x33);
    pub const ACCENT: Color = Color::Rgb(0x8C, 0x30, 0xE8);
    pub const NAV_ACTIVE: Color = Color::Rgb(0x7A, 0x00, 0xFF);
    pub const TEXT_LIGHT: Color = Color::White;
    pub const TEXT_MUTED: Color = Color::Rgb(0xCC, 0xCC, 0xCC);
    pub const TEXT_DIM: Color = Color::Rgb(0xAA, 0xAA, 0xAA);

    pub fn screen() -> Style {
        Style::default().fg(Self::TEXT_LIGHT).bg(Self::BG_DARK)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn price() -> Style {
        Style::default()
            .fg(Self::TEXT_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn quantity_control() -> Style {
        Style::default().fg(Self::TEXT_LIGHT).bg(Self::BG_CONTROL)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Self::TEXT_LIGHT)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn link() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn input_field() -> Style {
        Style::default().fg(Self::TEXT_LIGHT).bg(Self::BG_SURFACE)
    }

    pub fn nav_bar() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn nav_item(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Self::NAV_ACTIVE)
                .bg(Self::BG_SURFACE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::TEXT_DIM).bg(Self::BG_SURFACE)
        }
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_LIGHT).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }
}
