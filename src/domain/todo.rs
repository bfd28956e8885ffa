/// A single todo entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub text: String,
    /// Struck through (done) but kept in the list
    pub stricken: bool,
}

impl Todo {
    pub fn new(text: String) -> Self {
        Self {
            text,
            stricken: false,
        }
    }
}

/// Ordered todo list with a cursor.
///
/// The cursor stays within `0..len` whenever the list is non-empty and is 0
/// when it is empty. Strike state lives on each `Todo`, so removals need no
/// renumbering.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    pub items: Vec<Todo>,
    pub cursor: usize,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item under the cursor
    pub fn selected(&self) -> Option<&Todo> {
        self.items.get(self.cursor)
    }

    /// Append a new item; the cursor does not follow it
    pub fn create(&mut self, text: String) {
        self.items.push(Todo::new(text));
    }

    /// Replace the text at `index`, keeping its strike state
    pub fn edit(&mut self, index: usize, text: String) -> bool {
        match self.items.get_mut(index) {
            Some(todo) => {
                todo.text = text;
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index` and pull the cursor back inside the list
    pub fn remove(&mut self, index: usize) -> Option<Todo> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);

        if !self.items.is_empty() && self.cursor >= self.items.len() {
            self.cursor -= 1;
        }
        if self.items.is_empty() {
            self.cursor = 0;
        }
        Some(removed)
    }

    pub fn toggle_strike(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(todo) => {
                todo.stricken = !todo.stricken;
                true
            }
            None => false,
        }
    }

    /// Move the cursor by `delta`, clamped to the list bounds
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, last as isize) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.create(text.to_string());
        }
        list
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_create_strike_remove_scenario() {
        let mut list = TodoList::new();
        assert_eq!(list.cursor, 0);

        list.create("buy milk".to_string());
        assert_eq!(list.items, vec![Todo::new("buy milk".to_string())]);
        assert_eq!(list.cursor, 0);

        assert!(list.toggle_strike(0));
        assert!(list.items[0].stricken);

        let removed = list.remove(0).unwrap();
        assert_eq!(removed.text, "buy milk");
        assert!(list.is_empty());
        assert_eq!(list.cursor, 0);
    }

    #[test]
    fn test_create_does_not_move_cursor() {
        let mut list = list_of(&["a", "b"]);
        list.move_cursor(1);
        list.create("c".to_string());
        assert_eq!(list.cursor, 1);
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_last_pulls_cursor_back() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_cursor(2);
        assert_eq!(list.cursor, 2);

        list.remove(2);
        assert_eq!(texts(&list), vec!["a", "b"]);
        assert_eq!(list.cursor, 1);
    }

    #[test]
    fn test_remove_middle_keeps_strike_with_item() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle_strike(2);
        list.move_cursor(1);

        list.remove(1);
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert_eq!(list.cursor, 1);
        assert!(!list.items[0].stricken);
        assert!(list.items[1].stricken);
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut list = TodoList::new();
        assert!(list.remove(0).is_none());
        assert_eq!(list.cursor, 0);
    }

    #[test]
    fn test_edit_keeps_strike() {
        let mut list = list_of(&["a"]);
        list.toggle_strike(0);
        assert!(list.edit(0, "alpha".to_string()));
        assert_eq!(list.items[0].text, "alpha");
        assert!(list.items[0].stricken);
    }

    #[test]
    fn test_edit_and_strike_on_empty_are_noops() {
        let mut list = TodoList::new();
        assert!(!list.edit(0, "x".to_string()));
        assert!(!list.toggle_strike(0));
        assert!(list.is_empty());
    }

    #[test]
    fn test_move_cursor_clamps() {
        let mut list = list_of(&["a", "b", "c"]);
        list.move_cursor(-1);
        assert_eq!(list.cursor, 0);

        list.move_cursor(1);
        list.move_cursor(1);
        list.move_cursor(1);
        assert_eq!(list.cursor, 2);

        let mut empty = TodoList::new();
        empty.move_cursor(1);
        assert_eq!(empty.cursor, 0);
    }

    #[test]
    fn test_remove_then_create_keeps_count_but_appends() {
        let mut list = list_of(&["a", "b", "c"]);
        let removed = list.remove(0).unwrap();
        list.create(removed.text);
        assert_eq!(list.len(), 3);
        assert_eq!(texts(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_cursor_invariant_over_mixed_sequence() {
        let mut list = TodoList::new();
        // create, create, down, create, remove, remove, down, remove, create, remove, remove
        let ops: [(char, isize); 11] = [
            ('c', 0),
            ('c', 0),
            ('m', 1),
            ('c', 0),
            ('r', 0),
            ('r', 0),
            ('m', 1),
            ('r', 0),
            ('c', 0),
            ('r', 0),
            ('r', 0),
        ];
        for (op, delta) in ops {
            let before = list.len();
            match op {
                'c' => {
                    list.create("x".to_string());
                    assert_eq!(list.len(), before + 1);
                }
                'r' => {
                    let cursor = list.cursor;
                    if list.remove(cursor).is_some() {
                        assert_eq!(list.len(), before - 1);
                    } else {
                        assert_eq!(before, 0);
                    }
                }
                _ => list.move_cursor(delta),
            }
            if list.is_empty() {
                assert_eq!(list.cursor, 0);
            } else {
                assert!(list.cursor < list.len());
            }
        }
    }
}
