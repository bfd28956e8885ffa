use crate::app::{AppState, InputMode};
use crate::input::text_field::PLACEHOLDER;
use crate::ui::styles::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Column where the field text starts, after the "> " prompt
const FIELD_COLUMN: u16 = 2;

/// Row of the field inside the entry block
const FIELD_ROW: u16 = 3;

/// Render the todo entry prompt and place the terminal cursor in the field
pub fn render_input_form(f: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let InputMode::Entering { is_edit, field } = &app.input_mode else {
        return;
    };

    let title = if *is_edit { "Edit to-do:" } else { "Enter a to-do:" };
    let (visible, cursor_col) = field.view();
    let field_span = if field.is_empty() {
        Span::styled(PLACEHOLDER, theme.placeholder)
    } else {
        Span::raw(visible)
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(title, theme.prompt)),
        Line::raw(""),
        Line::from(vec![Span::styled("> ", theme.cursor), field_span]),
        Line::raw(""),
        Line::from(Span::styled(
            "(press Enter to submit, Esc to cancel)",
            theme.help_desc,
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);

    let x = area.x + FIELD_COLUMN + cursor_col as u16;
    let y = area.y + FIELD_ROW;
    if x < area.right() && y < area.bottom() {
        f.set_cursor(x, y);
    }
}
