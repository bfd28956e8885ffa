use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by the two timer header lines
pub const TIMERS_HEIGHT: u16 = 2;

/// Rows taken by the text entry prompt block
pub const ENTRY_HEIGHT: u16 = 6;

/// Rows taken by the log pane when open
pub const LOG_HEIGHT: u16 = 8;

/// Heights of the optional blocks; 0 omits a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockHeights {
    pub list: u16,
    pub entry: u16,
    pub log: u16,
    pub help: u16,
}

impl BlockHeights {
    /// Cap the list so every block fits in `rows`; the list scrolls instead
    pub fn fit_list(mut self, rows: u16) -> Self {
        let fixed = TIMERS_HEIGHT + self.entry + self.log + self.help;
        self.list = self.list.min(rows.saturating_sub(fixed));
        self
    }

    /// Rows from the top of the frame to the end of the last block
    pub fn total(&self) -> u16 {
        TIMERS_HEIGHT + self.list + self.entry + self.log + self.help
    }
}

/// Main layout structure
pub struct MainLayout {
    pub timers_area: Rect,
    pub list_area: Option<Rect>,
    pub entry_area: Option<Rect>,
    pub log_area: Option<Rect>,
    pub help_area: Option<Rect>,
}

/// Stack the frame blocks top to bottom
pub fn create_layout(area: Rect, heights: BlockHeights) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TIMERS_HEIGHT),
            Constraint::Length(heights.list),
            Constraint::Length(heights.entry),
            Constraint::Length(heights.log),
            Constraint::Length(heights.help),
            Constraint::Min(0),
        ])
        .split(area);

    let present = |rect: Rect, height: u16| if height > 0 { Some(rect) } else { None };

    MainLayout {
        timers_area: chunks[0],
        list_area: present(chunks[1], heights.list),
        entry_area: present(chunks[2], heights.entry),
        log_area: present(chunks[3], heights.log),
        help_area: present(chunks[4], heights.help),
    }
}
