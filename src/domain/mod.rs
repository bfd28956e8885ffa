pub mod enums;
pub mod timer;
pub mod todo;

pub use enums::{Availability, TimerKind};
pub use timer::{format_duration, TimerPair};
pub use todo::TodoList;
