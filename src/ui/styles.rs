use ratatui::style::{Color, Modifier, Style};

/// Header label colour
const HEADER_COLOR: Color = Color::Indexed(205);

/// Cursor marker colour
const CURSOR_COLOR: Color = Color::Indexed(212);

/// Struck-through todo colour
const STRICKEN_COLOR: Color = Color::Indexed(240);

/// Styles for the display surface, passed explicitly to `render`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub cursor: Style,
    pub running_marker: Style,
    pub todo: Style,
    pub stricken: Style,
    pub prompt: Style,
    pub placeholder: Style,
    pub help_key: Style,
    pub help_desc: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header: Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
            cursor: Style::default()
                .fg(CURSOR_COLOR)
                .add_modifier(Modifier::BOLD),
            running_marker: Style::default().fg(CURSOR_COLOR),
            todo: Style::default(),
            stricken: Style::default()
                .fg(STRICKEN_COLOR)
                .add_modifier(Modifier::CROSSED_OUT),
            prompt: Style::default(),
            placeholder: Style::default().fg(STRICKEN_COLOR),
            help_key: Style::default().fg(Color::Gray),
            help_desc: Style::default().fg(Color::DarkGray),
        }
    }
}

impl Theme {
    /// Modifiers only, no colours
    pub fn plain() -> Self {
        Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::BOLD),
            running_marker: Style::default(),
            todo: Style::default(),
            stricken: Style::default().add_modifier(Modifier::CROSSED_OUT),
            prompt: Style::default(),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            help_key: Style::default(),
            help_desc: Style::default().add_modifier(Modifier::DIM),
        }
    }

    pub fn new(color: bool) -> Self {
        if color {
            Self::default()
        } else {
            Self::plain()
        }
    }
}
