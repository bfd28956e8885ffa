use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maximum number of characters a todo can hold
pub const CHAR_LIMIT: usize = 256;

/// Columns reserved around the todo column
pub const TODO_WIDTH_MARGIN: u16 = 10;

/// Narrowest todo column regardless of terminal width
pub const MIN_TODO_WIDTH: u16 = 20;

pub const PLACEHOLDER: &str = "todo...";

/// Width of the todo column for a terminal of the given width
pub fn todo_width(terminal_width: u16) -> u16 {
    terminal_width
        .saturating_sub(TODO_WIDTH_MARGIN)
        .max(MIN_TODO_WIDTH)
}

/// What a key did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Edited,
    Submit,
    Cancel,
    Ignored,
}

/// Single-line text input with a character cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: Vec<char>,
    /// Cursor position in chars, `0..=value.len()`
    cursor: usize,
    pub char_limit: usize,
    pub width: u16,
}

impl TextField {
    pub fn new(width: u16) -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            char_limit: CHAR_LIMIT,
            width,
        }
    }

    /// Field pre-filled with `text`, cursor at the end
    pub fn with_value(text: &str, width: u16) -> Self {
        let mut field = Self::new(width);
        field.value = text.chars().take(field.char_limit).collect();
        field.cursor = field.value.len();
        field
    }

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) -> bool {
        if self.value.len() >= self.char_limit {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn delete_to_start(&mut self) {
        self.value.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn delete_to_end(&mut self) {
        self.value.truncate(self.cursor);
    }

    /// Apply a key press to the field
    pub fn handle_key(&mut self, key: KeyEvent) -> FieldOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Enter => FieldOutcome::Submit,
            KeyCode::Esc => FieldOutcome::Cancel,

            KeyCode::Backspace => {
                self.backspace();
                FieldOutcome::Edited
            }
            KeyCode::Delete => {
                self.delete();
                FieldOutcome::Edited
            }
            KeyCode::Left => {
                self.move_left();
                FieldOutcome::Edited
            }
            KeyCode::Right => {
                self.move_right();
                FieldOutcome::Edited
            }
            KeyCode::Home => {
                self.move_home();
                FieldOutcome::Edited
            }
            KeyCode::End => {
                self.move_end();
                FieldOutcome::Edited
            }

            // Emacs-style line editing
            KeyCode::Char('a') if ctrl => {
                self.move_home();
                FieldOutcome::Edited
            }
            KeyCode::Char('e') if ctrl => {
                self.move_end();
                FieldOutcome::Edited
            }
            KeyCode::Char('u') if ctrl => {
                self.delete_to_start();
                FieldOutcome::Edited
            }
            KeyCode::Char('k') if ctrl => {
                self.delete_to_end();
                FieldOutcome::Edited
            }

            KeyCode::Char(c) if !ctrl && !alt => {
                if self.insert(c) {
                    FieldOutcome::Edited
                } else {
                    FieldOutcome::Ignored
                }
            }

            _ => FieldOutcome::Ignored,
        }
    }

    /// The visible slice of the value and the cursor column inside it.
    ///
    /// Scrolls horizontally so the cursor always fits within `width`.
    pub fn view(&self) -> (String, usize) {
        let width = (self.width as usize).max(1);
        let start = if self.cursor >= width {
            self.cursor + 1 - width
        } else {
            0
        };
        let end = (start + width).min(self.value.len());
        let visible: String = self.value[start..end].iter().collect();
        (visible, self.cursor - start)
    }
}
