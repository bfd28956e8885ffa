use crate::app::AppState;
use crate::ui::styles::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Rows above the first todo: blank spacer and title
const LIST_HEADER_ROWS: usize = 2;

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn chars_width(chars: &[char]) -> usize {
    chars.iter().map(|c| char_width(*c)).sum()
}

/// Greedy word wrap to `width` display columns; words wider than a line are split
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        // Hard-split words that cannot fit on any line
        while chars_width(&word) > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut taken = 0;
            let mut taken_width = 0;
            while taken < word.len() && taken_width + char_width(word[taken]) <= width {
                taken_width += char_width(word[taken]);
                taken += 1;
            }
            let rest = word.split_off(taken.max(1));
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word_width = chars_width(&word);
        let sep = if current_width > 0 { 1 } else { 0 };
        if current_width + sep + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        } else if sep == 1 {
            current.push(' ');
            current_width += 1;
        }
        current.extend(word.iter());
        current_width += word_width;
    }
    lines.push(current);
    lines
}

/// Rows the todo block needs, including the blank spacer and title
pub fn list_height(app: &AppState) -> u16 {
    if app.todos.is_empty() {
        return 0;
    }
    let width = app.todo_width() as usize;
    let rows: usize = app
        .todos
        .items
        .iter()
        .map(|todo| wrap_text(&todo.text, width).len())
        .sum();
    (rows + LIST_HEADER_ROWS).min(u16::MAX as usize) as u16
}

/// First row to show so the selected todo fits inside `height` rows
pub fn list_scroll(app: &AppState, height: u16) -> u16 {
    let width = app.todo_width() as usize;
    let mut rows = app.todos.items.iter().map(|todo| wrap_text(&todo.text, width).len());

    let above: usize = rows.by_ref().take(app.todos.cursor).sum();
    let selected = rows.next().unwrap_or(1);
    let bottom = LIST_HEADER_ROWS + above + selected;

    bottom
        .saturating_sub(height as usize)
        .min(LIST_HEADER_ROWS + above)
        .min(u16::MAX as usize) as u16
}

/// Render the todo list with cursor marker and strike-through
pub fn render_list_pane(f: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let width = app.todo_width() as usize;
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled("To do list:", theme.header)),
    ];

    for (i, todo) in app.todos.items.iter().enumerate() {
        let style = if todo.stricken { theme.stricken } else { theme.todo };
        for (row, text) in wrap_text(&todo.text, width).into_iter().enumerate() {
            let marker = if row == 0 && i == app.todos.cursor {
                Span::styled(">", theme.cursor)
            } else {
                Span::raw(" ")
            };
            lines.push(Line::from(vec![marker, Span::raw(" "), Span::styled(text, style)]));
        }
    }

    let scroll = list_scroll(app, area.height);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}
