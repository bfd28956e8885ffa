pub mod handler;
pub mod keymap;
pub mod text_field;

pub use handler::{handle_event, AppEvent, Command};
