use crate::domain::Availability;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical normal-mode actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Suspend,
    StartFirst,
    SwitchTimer,
    PauseTimers,
    MoveUp,
    MoveDown,
    CreateTodo,
    EditTodo,
    RemoveTodo,
    StrikeTodo,
    ToggleHelp,
    ToggleFullscreen,
    ToggleLog,
}

impl Action {
    /// Whether the timer availability state enables this action
    pub fn enabled(&self, availability: Availability) -> bool {
        match self {
            Self::StartFirst => availability.can_start(),
            Self::SwitchTimer => availability.can_switch(),
            Self::PauseTimers => availability.can_pause(),
            _ => true,
        }
    }
}

/// A key plus the modifiers that must accompany it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Shift is ignored since it is already folded into the character
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let significant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        self.code == key.code && (key.modifiers & significant) == self.modifiers
    }
}

/// Keys bound to an action plus its help entry
#[derive(Debug, Clone)]
pub struct Binding {
    pub action: Action,
    pub keys: Vec<KeyChord>,
    pub help_key: &'static str,
    pub help_desc: &'static str,
}

impl Binding {
    fn new(
        action: Action,
        keys: Vec<KeyChord>,
        help_key: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            action,
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys.iter().any(|chord| chord.matches(key))
    }
}

/// The normal-mode key bindings
#[derive(Debug, Clone)]
pub struct Keymap {
    pub bindings: Vec<Binding>,
}

impl Default for Keymap {
    fn default() -> Self {
        use KeyChord as K;
        let char_key = |c| K::plain(KeyCode::Char(c));

        Self {
            bindings: vec![
                Binding::new(Action::Quit, vec![char_key('q'), K::ctrl('c')], "q/ctrl+c", "quit"),
                Binding::new(
                    Action::Suspend,
                    vec![K::ctrl('z')],
                    "ctrl+z",
                    "suspend program (timers will be updated upon resume)",
                ),
                Binding::new(Action::StartFirst, vec![char_key(' ')], "space", "start focus stopwatch"),
                Binding::new(Action::SwitchTimer, vec![char_key(' ')], "space", "switch stopwatch"),
                Binding::new(Action::PauseTimers, vec![char_key('p')], "p", "stop stopwatches"),
                Binding::new(Action::MoveUp, vec![char_key('k'), K::plain(KeyCode::Up)], "k/↑", "move up"),
                Binding::new(
                    Action::MoveDown,
                    vec![char_key('j'), K::plain(KeyCode::Down)],
                    "j/↓",
                    "move down",
                ),
                Binding::new(Action::CreateTodo, vec![K::plain(KeyCode::Enter)], "enter", "create a todo"),
                Binding::new(Action::EditTodo, vec![char_key('e')], "e", "edit a todo"),
                Binding::new(Action::RemoveTodo, vec![char_key('r')], "r", "remove a todo"),
                Binding::new(Action::StrikeTodo, vec![char_key('s')], "s", "strike a todo"),
                Binding::new(Action::ToggleHelp, vec![char_key('?')], "?", "toggle help"),
                Binding::new(Action::ToggleFullscreen, vec![char_key('f')], "f", "toggle alt screen"),
                Binding::new(Action::ToggleLog, vec![char_key('l')], "l", "toggle log"),
            ],
        }
    }
}

impl Keymap {
    pub fn binding(&self, action: Action) -> Option<&Binding> {
        self.bindings.iter().find(|b| b.action == action)
    }

    /// First enabled action bound to `key`
    pub fn resolve(&self, key: &KeyEvent, availability: Availability) -> Option<Action> {
        self.bindings
            .iter()
            .filter(|b| b.action.enabled(availability))
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    /// Enabled bindings for the collapsed help footer
    pub fn short_help(&self, availability: Availability) -> Vec<&Binding> {
        self.enabled_of(&[Action::ToggleHelp, Action::Quit], availability)
    }

    /// Enabled bindings for the expanded help footer, grouped into columns
    pub fn full_help(&self, availability: Availability) -> Vec<Vec<&Binding>> {
        vec![
            self.enabled_of(
                &[
                    Action::CreateTodo,
                    Action::EditTodo,
                    Action::RemoveTodo,
                    Action::StrikeTodo,
                    Action::MoveUp,
                    Action::MoveDown,
                ],
                availability,
            ),
            self.enabled_of(
                &[
                    Action::StartFirst,
                    Action::SwitchTimer,
                    Action::ToggleFullscreen,
                    Action::ToggleLog,
                    Action::ToggleHelp,
                    Action::Quit,
                    Action::Suspend,
                    Action::PauseTimers,
                ],
                availability,
            ),
        ]
    }

    fn enabled_of(&self, actions: &[Action], availability: Availability) -> Vec<&Binding> {
        actions
            .iter()
            .filter(|a| a.enabled(availability))
            .filter_map(|a| self.binding(*a))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_space_resolves_by_availability() {
        let keymap = Keymap::default();
        let space = key(KeyCode::Char(' '));

        assert_eq!(
            keymap.resolve(&space, Availability::NeverStarted),
            Some(Action::StartFirst)
        );
        assert_eq!(
            keymap.resolve(&space, Availability::Running),
            Some(Action::SwitchTimer)
        );
        assert_eq!(
            keymap.resolve(&space, Availability::PausedAfterStart),
            Some(Action::StartFirst)
        );
    }

    #[test]
    fn test_pause_disabled_until_running() {
        let keymap = Keymap::default();
        let p = key(KeyCode::Char('p'));
        assert_eq!(keymap.resolve(&p, Availability::NeverStarted), None);
        assert_eq!(keymap.resolve(&p, Availability::Running), Some(Action::PauseTimers));
    }

    #[test]
    fn test_modifier_matching() {
        let keymap = Keymap::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        let plain_z = key(KeyCode::Char('z'));
        let shifted_question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);

        assert_eq!(keymap.resolve(&ctrl_c, Availability::NeverStarted), Some(Action::Quit));
        assert_eq!(keymap.resolve(&ctrl_z, Availability::NeverStarted), Some(Action::Suspend));
        assert_eq!(keymap.resolve(&plain_z, Availability::NeverStarted), None);
        assert_eq!(
            keymap.resolve(&shifted_question, Availability::NeverStarted),
            Some(Action::ToggleHelp)
        );
    }

    #[test]
    fn test_help_hides_disabled_bindings() {
        let keymap = Keymap::default();

        let short: Vec<&str> = keymap
            .short_help(Availability::NeverStarted)
            .iter()
            .map(|b| b.help_desc)
            .collect();
        assert_eq!(short, vec!["toggle help", "quit"]);

        let full = keymap.full_help(Availability::NeverStarted);
        assert_eq!(full.len(), 2);
        assert_eq!(full[0].len(), 6);
        let timer_group: Vec<Action> = full[1].iter().map(|b| b.action).collect();
        assert!(timer_group.contains(&Action::StartFirst));
        assert!(!timer_group.contains(&Action::SwitchTimer));
        assert!(!timer_group.contains(&Action::PauseTimers));
        assert!(timer_group.contains(&Action::ToggleLog));

        let running: Vec<Action> = keymap.full_help(Availability::Running)[1]
            .iter()
            .map(|b| b.action)
            .collect();
        assert!(!running.contains(&Action::StartFirst));
        assert!(running.contains(&Action::SwitchTimer));
        assert!(running.contains(&Action::PauseTimers));
    }
}
