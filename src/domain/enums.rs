/// Which of the two stopwatches an operation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Focus,
    Rest,
}

impl TimerKind {
    /// The other stopwatch of the pair
    pub fn other(&self) -> Self {
        match self {
            Self::Focus => Self::Rest,
            Self::Rest => Self::Focus,
        }
    }

    /// Header label used by the display surface
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus time:",
            Self::Rest => "Break time:",
        }
    }
}

/// Availability of the start / switch / pause affordances.
///
/// Derived from whether the timers were ever started and whether one of them
/// is currently running; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    NeverStarted,
    Running,
    PausedAfterStart,
}

impl Availability {
    pub fn can_start(&self) -> bool {
        !matches!(self, Self::Running)
    }

    pub fn can_switch(&self) -> bool {
        matches!(self, Self::Running)
    }

    pub fn can_pause(&self) -> bool {
        matches!(self, Self::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_kind_other() {
        assert_eq!(TimerKind::Focus.other(), TimerKind::Rest);
        assert_eq!(TimerKind::Rest.other(), TimerKind::Focus);
    }

    #[test]
    fn test_availability_table() {
        assert!(Availability::NeverStarted.can_start());
        assert!(!Availability::NeverStarted.can_switch());
        assert!(!Availability::NeverStarted.can_pause());

        assert!(!Availability::Running.can_start());
        assert!(Availability::Running.can_switch());
        assert!(Availability::Running.can_pause());

        assert!(Availability::PausedAfterStart.can_start());
        assert!(!Availability::PausedAfterStart.can_switch());
        assert!(!Availability::PausedAfterStart.can_pause());
    }
}
