use crate::app::{AppState, InputMode};
use crate::input::keymap::Action;
use crate::input::text_field::FieldOutcome;
use crossterm::event::KeyEvent;
use log::{debug, info};
use std::time::Duration;

/// Events delivered to the dispatcher by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    /// The process was continued after a suspend
    Resume,
    /// Wall-clock time since the previous tick
    Tick(Duration),
}

/// Requests to the terminal, executed in order by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterAltScreen,
    ExitAltScreen,
    Suspend,
    Quit,
}

/// Dispatch one event, returning the terminal commands it produced
pub fn handle_event(app: &mut AppState, event: AppEvent) -> Vec<Command> {
    match event {
        AppEvent::Resize { width, height } => {
            debug!("Resized to {}x{}", width, height);
            app.resize(width);
            Vec::new()
        }
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resume => {
            app.resume();
            Vec::new()
        }
        AppEvent::Tick(delta) => {
            app.tick(delta);
            Vec::new()
        }
    }
}

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<Command> {
    if app.is_entering() {
        handle_entering_mode(app, key);
        Vec::new()
    } else {
        handle_normal_mode(app, key)
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Vec<Command> {
    let Some(action) = app.keymap.resolve(&key, app.availability()) else {
        return Vec::new();
    };

    match action {
        Action::Quit => {
            app.quitting = true;
            info!("Quitting");
            let mut commands = Vec::new();
            // Leave the alternate screen before exiting so the terminal is restored
            if app.alt_screen {
                app.alt_screen = false;
                commands.push(Command::ExitAltScreen);
            }
            commands.push(Command::Quit);
            commands
        }
        Action::Suspend => {
            app.begin_suspend();
            vec![Command::Suspend]
        }
        Action::StartFirst => {
            app.start_timers();
            Vec::new()
        }
        Action::SwitchTimer => {
            app.switch_timers();
            Vec::new()
        }
        Action::PauseTimers => {
            app.pause_timers();
            Vec::new()
        }
        Action::MoveUp => {
            app.move_selection_up();
            Vec::new()
        }
        Action::MoveDown => {
            app.move_selection_down();
            Vec::new()
        }
        Action::CreateTodo => {
            app.start_create_todo();
            Vec::new()
        }
        Action::EditTodo => {
            app.start_edit_todo();
            Vec::new()
        }
        Action::RemoveTodo => {
            app.remove_selected();
            Vec::new()
        }
        Action::StrikeTodo => {
            app.strike_selected();
            Vec::new()
        }
        Action::ToggleHelp => {
            app.toggle_help();
            Vec::new()
        }
        Action::ToggleFullscreen => {
            app.alt_screen = !app.alt_screen;
            info!("Alternate screen {}", if app.alt_screen { "on" } else { "off" });
            if app.alt_screen {
                vec![Command::EnterAltScreen]
            } else {
                vec![Command::ExitAltScreen]
            }
        }
        Action::ToggleLog => {
            app.toggle_log();
            Vec::new()
        }
    }
}

/// Handle keys while the todo text field has focus
fn handle_entering_mode(app: &mut AppState, key: KeyEvent) {
    let outcome = match &mut app.input_mode {
        InputMode::Entering { field, .. } => field.handle_key(key),
        InputMode::Normal => return,
    };

    match outcome {
        FieldOutcome::Submit => app.submit_entry(),
        FieldOutcome::Cancel => app.cancel_entry(),
        FieldOutcome::Edited | FieldOutcome::Ignored => {}
    }
}
