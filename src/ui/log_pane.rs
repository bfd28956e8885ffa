use crate::app::AppState;
use crate::ui::layout::LOG_HEIGHT;
use crate::ui::styles::Theme;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};
use tui_logger::TuiLoggerWidget;

/// Rows the log pane needs; hidden on the final frame
pub fn log_height(app: &AppState) -> u16 {
    if app.show_log && !app.quitting {
        LOG_HEIGHT
    } else {
        0
    }
}

/// Render the records collected by the in-memory logger
pub fn render_log_pane(f: &mut Frame, theme: &Theme, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" Log ")
                .border_style(theme.placeholder),
        )
        .style(theme.help_desc);
    f.render_widget(widget, area);
}
