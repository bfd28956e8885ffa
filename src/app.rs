use crate::domain::{Availability, TimerKind, TimerPair, TodoList};
use crate::input::keymap::Keymap;
use crate::input::text_field::{todo_width, TextField};
use log::{debug, info};
use std::time::Instant;

/// Terminal width assumed until the first resize arrives
pub const DEFAULT_WIDTH: u16 = 80;

/// Input routing mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the todo field; `is_edit` replaces the selected item on submit
    Entering { is_edit: bool, field: TextField },
}

/// Main application state
pub struct AppState {
    pub timers: TimerPair,
    pub todos: TodoList,
    pub input_mode: InputMode,
    pub keymap: Keymap,
    pub show_full_help: bool,
    /// Log pane open
    pub show_log: bool,
    /// Alternate full-screen surface active
    pub alt_screen: bool,
    pub suspended: bool,
    /// Final frame pending; hides the help footer
    pub quitting: bool,
    pub width: u16,
}

impl AppState {
    pub fn new(alt_screen: bool) -> Self {
        Self {
            timers: TimerPair::new(),
            todos: TodoList::new(),
            input_mode: InputMode::Normal,
            keymap: Keymap::default(),
            show_full_help: false,
            show_log: false,
            alt_screen,
            suspended: false,
            quitting: false,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn availability(&self) -> Availability {
        self.timers.availability()
    }

    pub fn is_entering(&self) -> bool {
        matches!(self.input_mode, InputMode::Entering { .. })
    }

    /// Width of the todo column and text field
    pub fn todo_width(&self) -> u16 {
        todo_width(self.width)
    }

    /// Record a new terminal width and propagate it to an open text field
    pub fn resize(&mut self, width: u16) {
        self.width = width;
        let field_width = self.todo_width();
        if let InputMode::Entering { field, .. } = &mut self.input_mode {
            field.width = field_width;
        }
    }

    /// Advance the running stopwatch
    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timers.tick(delta);
    }

    pub fn start_timers(&mut self) {
        if self.timers.start() {
            info!("Focus stopwatch started");
        }
    }

    pub fn switch_timers(&mut self) {
        if self.timers.toggle_switch() {
            if let Some(active) = self.timers.active() {
                info!("Switched to {:?} stopwatch", active);
            }
        }
    }

    pub fn pause_timers(&mut self) {
        if self.timers.pause_both() {
            info!("Stopwatches paused");
        }
    }

    pub fn begin_suspend(&mut self) {
        self.suspended = true;
        self.timers.record_suspend(Instant::now());
        info!("Suspending");
    }

    pub fn resume(&mut self) {
        self.suspended = false;
        match self.timers.record_resume(Instant::now()) {
            Some((which, gap)) => info!("Resumed, credited {}ms to {:?}", gap.num_milliseconds(), which),
            None => info!("Resumed"),
        }
    }

    /// Elapsed time shown for a stopwatch, suspend offset included
    pub fn displayed_elapsed(&self, which: TimerKind) -> chrono::Duration {
        self.timers.elapsed(which)
    }

    pub fn move_selection_up(&mut self) {
        self.todos.move_cursor(-1);
    }

    pub fn move_selection_down(&mut self) {
        self.todos.move_cursor(1);
    }

    /// Open the text field for a new todo
    pub fn start_create_todo(&mut self) {
        self.input_mode = InputMode::Entering {
            is_edit: false,
            field: TextField::new(self.todo_width()),
        };
    }

    /// Open the text field pre-filled with the selected todo
    pub fn start_edit_todo(&mut self) {
        let Some(todo) = self.todos.selected() else {
            return;
        };
        self.input_mode = InputMode::Entering {
            is_edit: true,
            field: TextField::with_value(&todo.text, self.todo_width()),
        };
    }

    /// Commit the text field as a create or edit, back to normal mode
    pub fn submit_entry(&mut self) {
        let mode = std::mem::replace(&mut self.input_mode, InputMode::Normal);
        if let InputMode::Entering { is_edit, field } = mode {
            let text = field.value();
            if is_edit {
                let cursor = self.todos.cursor;
                if self.todos.edit(cursor, text) {
                    debug!("Edited todo {}", cursor);
                }
            } else {
                self.todos.create(text);
                debug!("Created todo {}", self.todos.len() - 1);
            }
        }
    }

    /// Discard the text field without touching the list
    pub fn cancel_entry(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn remove_selected(&mut self) {
        let cursor = self.todos.cursor;
        if self.todos.remove(cursor).is_some() {
            debug!("Removed todo {}", cursor);
        }
    }

    pub fn strike_selected(&mut self) {
        let cursor = self.todos.cursor;
        if self.todos.toggle_strike(cursor) {
            debug!("Toggled strike on todo {}", cursor);
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_full_help = !self.show_full_help;
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
        debug!("Log pane {}", if self.show_log { "shown" } else { "hidden" });
    }
}
