use crate::app::AppState;
use crate::input::keymap::Binding;
use crate::ui::styles::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SHORT_SEPARATOR: &str = " • ";
const COLUMN_GAP: usize = 4;

fn entry_len(binding: &Binding) -> usize {
    binding.help_key.chars().count() + 1 + binding.help_desc.chars().count()
}

fn entry_spans(binding: &Binding, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(binding.help_key, theme.help_key),
        Span::raw(" "),
        Span::styled(binding.help_desc, theme.help_desc),
    ]
}

/// Help footer lines: one short line, or the grouped full list in columns
pub fn help_lines(app: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let availability = app.availability();

    if !app.show_full_help {
        let mut spans = Vec::new();
        for (i, binding) in app.keymap.short_help(availability).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SHORT_SEPARATOR, theme.help_desc));
            }
            spans.extend(entry_spans(binding, theme));
        }
        return vec![Line::from(spans)];
    }

    let groups = app.keymap.full_help(availability);
    let widths: Vec<usize> = groups
        .iter()
        .map(|group| group.iter().map(|b| entry_len(b)).max().unwrap_or(0))
        .collect();
    let rows = groups.iter().map(|g| g.len()).max().unwrap_or(0);

    (0..rows)
        .map(|row| {
            let mut spans = Vec::new();
            for (col, group) in groups.iter().enumerate() {
                let used = match group.get(row) {
                    Some(binding) => {
                        spans.extend(entry_spans(binding, theme));
                        entry_len(binding)
                    }
                    None => 0,
                };
                if col + 1 < groups.len() {
                    spans.push(Span::raw(" ".repeat(widths[col] - used + COLUMN_GAP)));
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Rows the help block needs, including the blank spacer
pub fn help_height(app: &AppState, theme: &Theme) -> u16 {
    if app.quitting {
        return 0;
    }
    help_lines(app, theme).len() as u16 + 1
}

/// Render the keybindings help footer
pub fn render_keybindings(f: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let mut lines = vec![Line::raw("")];
    lines.extend(help_lines(app, theme));
    f.render_widget(Paragraph::new(lines), area);
}
