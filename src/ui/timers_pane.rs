use crate::app::AppState;
use crate::domain::{format_duration, TimerKind};
use crate::ui::styles::Theme;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Header line for one stopwatch: label, elapsed time, running marker
pub fn timer_line(app: &AppState, theme: &Theme, which: TimerKind) -> Line<'static> {
    let mut spans = vec![
        Span::styled(which.label(), theme.header),
        Span::raw(" "),
        Span::raw(format_duration(app.displayed_elapsed(which))),
    ];
    if app.timers.is_running(which) {
        spans.push(Span::styled(" ●", theme.running_marker));
    }
    Line::from(spans)
}

/// Render the focus and break time header lines
pub fn render_timers_pane(f: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let lines = vec![
        timer_line(app, theme, TimerKind::Focus),
        timer_line(app, theme, TimerKind::Rest),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
