pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod log_pane;
pub mod styles;
pub mod timers_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::{help_height, render_keybindings};
use layout::{create_layout, BlockHeights, ENTRY_HEIGHT};
use list_pane::{list_height, render_list_pane};
use log_pane::{log_height, render_log_pane};
use ratatui::{layout::Rect, Frame};
use styles::Theme;
use timers_pane::render_timers_pane;

fn block_heights(app: &AppState, theme: &Theme, area: Rect) -> BlockHeights {
    BlockHeights {
        list: list_height(app),
        entry: if app.is_entering() { ENTRY_HEIGHT } else { 0 },
        log: log_height(app),
        help: help_height(app, theme),
    }
    .fit_list(area.height)
}

/// Rows the frame occupies from the top of `area`
pub fn frame_height(app: &AppState, theme: &Theme, area: Rect) -> u16 {
    block_heights(app, theme, area).total().min(area.height)
}

/// Main render function - draws the entire frame from a read-only state
pub fn render(f: &mut Frame, app: &AppState, theme: &Theme) {
    let size = f.size();
    let layout = create_layout(size, block_heights(app, theme, size));

    render_timers_pane(f, app, theme, layout.timers_area);

    if let Some(list_area) = layout.list_area {
        render_list_pane(f, app, theme, list_area);
    }

    if let Some(entry_area) = layout.entry_area {
        render_input_form(f, app, theme, entry_area);
    }

    if let Some(log_area) = layout.log_area {
        render_log_pane(f, theme, log_area);
    }

    // Help footer is dropped from the final frame
    if let Some(help_area) = layout.help_area {
        render_keybindings(f, app, theme, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{handle_event, AppEvent};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    /// Render into an in-memory buffer and return plain text (no styles)
    fn render_to_string(app: &AppState, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(f, app, &Theme::plain()))
            .unwrap();

        let buf = terminal.backend().buffer().clone();
        let width = buf.area.width as usize;
        let lines: Vec<String> = buf
            .content
            .chunks(width)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect();

        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        lines[..end].join("\n")
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty())));
    }

    #[test]
    fn test_initial_frame() {
        let app = AppState::new(true);
        let output = render_to_string(&app, 80, 24);
        assert_eq!(
            output,
            "Focus time: 0.0\nBreak time: 0.0\n\n? toggle help • q/ctrl+c quit"
        );
    }

    #[test]
    fn test_frame_with_todos_and_running_timer() {
        let mut app = AppState::new(true);
        app.todos.create("buy milk".to_string());
        app.todos.create("walk dog".to_string());
        app.todos.toggle_strike(1);
        press(&mut app, KeyCode::Char(' '));
        handle_event(&mut app, AppEvent::Tick(std::time::Duration::from_millis(125_500)));

        let output = render_to_string(&app, 80, 24);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Focus time: 2:05.5 ●");
        assert_eq!(lines[1], "Break time: 0.0");
        assert_eq!(lines[3], "To do list:");
        assert_eq!(lines[4], "> buy milk");
        assert_eq!(lines[5], "  walk dog");
    }

    #[test]
    fn test_entry_prompt_frame() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Enter);
        let output = render_to_string(&app, 80, 24);
        assert!(output.contains("Enter a to-do:"));
        assert!(output.contains("> todo..."));
        assert!(output.contains("(press Enter to submit, Esc to cancel)"));

        press(&mut app, KeyCode::Char('x'));
        let output = render_to_string(&app, 80, 24);
        assert!(output.contains("> x"));
    }

    #[test]
    fn test_final_frame_has_no_help() {
        let mut app = AppState::new(true);
        press(&mut app, KeyCode::Char('q'));
        let output = render_to_string(&app, 80, 24);
        assert_eq!(output, "Focus time: 0.0\nBreak time: 0.0");
    }

    #[test]
    fn test_cursor_row_stays_visible_in_long_list() {
        let mut app = AppState::new(true);
        for i in 0..40 {
            app.todos.create(format!("item {}", i));
        }
        app.todos.move_cursor(39);

        let output = render_to_string(&app, 80, 24);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Focus time: 0.0");
        assert!(lines.contains(&"> item 39"));
        assert!(!lines.contains(&"  item 0"));
        // Help footer is still drawn below the list
        assert_eq!(lines.last(), Some(&"? toggle help • q/ctrl+c quit"));
    }

    #[test]
    fn test_frame_height() {
        let area = Rect::new(0, 0, 80, 24);
        let mut app = AppState::new(true);
        assert_eq!(frame_height(&app, &Theme::plain(), area), 4);

        app.todos.create("buy milk".to_string());
        app.quitting = true;
        assert_eq!(frame_height(&app, &Theme::plain(), area), 5);

        for i in 0..40 {
            app.todos.create(format!("item {}", i));
        }
        assert_eq!(frame_height(&app, &Theme::plain(), area), 24);
    }
}
