use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Error type for the terminal surface
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to initialise terminal: {0}")]
    Init(io::Error),
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to suspend process: {0}")]
    Suspend(io::Error),
}

/// Enter raw mode (and optionally the alternate screen) and build the terminal.
///
/// Any failure after raw mode is on puts the terminal back before returning.
pub fn init(alt_screen: bool) -> Result<Tui, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Init)?;
    let terminal = with_rollback(setup(alt_screen), || leave(alt_screen))?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    Ok(terminal)
}

fn setup(alt_screen: bool) -> io::Result<Tui> {
    let mut stdout = io::stdout();
    if alt_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    if !alt_screen {
        let height = terminal.size()?.height;
        push_to_scrollback(terminal.backend_mut(), height)?;
    }
    terminal.clear()?;
    Ok(terminal)
}

/// Best-effort undo of `init`, used when setup fails halfway
fn leave(alt_screen: bool) {
    let _ = disable_raw_mode();
    if alt_screen {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run `rollback` when setup failed, then report the failure as `Init`
fn with_rollback<T>(
    result: io::Result<T>,
    rollback: impl FnOnce(),
) -> Result<T, TerminalError> {
    result.map_err(|err| {
        rollback();
        TerminalError::Init(err)
    })
}

/// Leave raw mode and the alternate screen if it is active
pub fn restore(terminal: &mut Tui, alt_screen: bool) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    if alt_screen {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;
    Ok(())
}

/// Switch between the alternate and the normal screen buffer
pub fn set_alt_screen(terminal: &mut Tui, alt_screen: bool) -> Result<(), TerminalError> {
    if alt_screen {
        execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        let height = terminal.size()?.height;
        push_to_scrollback(terminal.backend_mut(), height)?;
    }
    terminal.clear()?;
    Ok(())
}

/// Scroll the visible screen into scrollback, leaving the viewport blank.
///
/// Clearing the normal buffer afterwards then erases nothing the user wrote.
pub fn push_to_scrollback<W: Write>(w: &mut W, height: u16) -> io::Result<()> {
    queue!(w, MoveTo(0, height.saturating_sub(1)))?;
    for _ in 0..height {
        queue!(w, Print("\r\n"))?;
    }
    w.flush()
}

/// Move the cursor to the first row below a frame `rows` tall.
///
/// A frame filling the screen is scrolled up one row to make room, so the
/// shell prompt never lands on top of it.
pub fn park_cursor_below<W: Write>(w: &mut W, rows: u16, height: u16) -> io::Result<()> {
    if rows < height {
        queue!(w, MoveTo(0, rows))?;
    } else {
        queue!(w, MoveTo(0, height.saturating_sub(1)), Print("\r\n"))?;
    }
    w.flush()
}

/// Hand the terminal back to the shell and stop the process.
///
/// Returns once the process has been continued, with the terminal set up
/// again.
pub fn suspend(terminal: &mut Tui, alt_screen: bool) -> Result<(), TerminalError> {
    restore(terminal, alt_screen)?;
    raise_stop()?;

    enable_raw_mode()?;
    if alt_screen {
        execute!(terminal.backend_mut(), EnterAlternateScreen)?;
    } else {
        let height = terminal.size()?.height;
        push_to_scrollback(terminal.backend_mut(), height)?;
    }
    terminal.clear()?;
    Ok(())
}

/// Stop the process with SIGTSTP; returns after SIGCONT
#[cfg(unix)]
fn raise_stop() -> Result<(), TerminalError> {
    let ret = unsafe { libc::raise(libc::SIGTSTP) };
    if ret != 0 {
        return Err(TerminalError::Suspend(io::Error::last_os_error()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn raise_stop() -> Result<(), TerminalError> {
    log::warn!("Suspend is not supported on this platform");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_messages() {
        let err = TerminalError::Init(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert_eq!(err.to_string(), "failed to initialise terminal: no tty");

        let err: TerminalError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.to_string(), "terminal I/O error: closed");
    }

    #[test]
    fn test_rollback_runs_only_on_failure() {
        let mut rolled_back = false;
        let ok = with_rollback(Ok(7), || rolled_back = true);
        assert_eq!(ok.ok(), Some(7));
        assert!(!rolled_back);

        let failed: Result<(), _> = with_rollback(
            Err(io::Error::new(io::ErrorKind::Other, "no alt screen")),
            || rolled_back = true,
        );
        assert!(rolled_back);
        assert!(matches!(failed, Err(TerminalError::Init(_))));
    }

    #[test]
    fn test_push_to_scrollback_scrolls_whole_screen() {
        let mut out = Vec::new();
        push_to_scrollback(&mut out, 3).unwrap();
        let out = String::from_utf8(out).unwrap();

        // Bottom row, then one line feed per screen row; no erase sequence
        assert_eq!(out, "\x1b[3;1H\r\n\r\n\r\n");
    }

    #[test]
    fn test_park_cursor_below_frame() {
        let mut out = Vec::new();
        park_cursor_below(&mut out, 2, 24).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[3;1H");

        let mut out = Vec::new();
        park_cursor_below(&mut out, 24, 24).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[24;1H\r\n");
    }
}
