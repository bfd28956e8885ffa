mod app;
mod domain;
mod input;
mod terminal;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use input::{handle_event, AppEvent, Command};
use log::{info, LevelFilter};
use std::time::{Duration, Instant};
use terminal::{TerminalError, Tui};
use ui::styles::Theme;

#[derive(Parser)]
#[command(name = "focuswatch")]
#[command(about = "A focus/break stopwatch pair with a lightweight todo list", long_about = None)]
struct Cli {
    /// Start on the normal screen instead of the alternate full-screen surface
    #[arg(long)]
    inline: bool,

    /// Tick interval in milliseconds
    #[arg(
        long,
        default_value_t = ticker::DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..=100)
    )]
    tick_ms: u64,

    /// Render without colours
    #[arg(long)]
    no_color: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal owns stdout, so log records are only collected in memory
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    tui_logger::init_logger(level)
        .map_err(|e| anyhow::anyhow!("Failed to initialise logger: {}", e))?;
    tui_logger::set_default_level(level);

    run_tui(&cli)
}

fn run_tui(cli: &Cli) -> Result<()> {
    let mut app = AppState::new(!cli.inline);
    let theme = Theme::new(!cli.no_color);
    let tick_rate = ticker::tick_duration(cli.tick_ms);
    info!(
        "Starting: alt_screen={} tick={}ms color={}",
        app.alt_screen, cli.tick_ms, !cli.no_color
    );

    // Setup terminal
    let mut terminal = terminal::init(app.alt_screen)?;

    // Run app
    let result = run_app(&mut terminal, &mut app, &theme, tick_rate);

    // Restore terminal before reporting any error
    let restored = terminal::restore(&mut terminal, app.alt_screen);
    result?;
    restored?;
    Ok(())
}

fn run_app(
    terminal: &mut Tui,
    app: &mut AppState,
    theme: &Theme,
    tick_rate: Duration,
) -> Result<(), TerminalError> {
    let size = terminal.size()?;
    handle_event(
        app,
        AppEvent::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let mut last_tick = Instant::now();

    loop {
        // Render, with log records moved into the pane's buffer first
        tui_logger::move_events();
        terminal.draw(|f| ui::render(f, app, theme))?;

        // Handle events with timeout for ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let mut commands = Vec::new();
        if event::poll(timeout)? {
            let app_event = match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
                _ => None,
            };
            if let Some(app_event) = app_event {
                commands = handle_event(app, app_event);
            }
        }

        // Tick timers
        let since_tick = last_tick.elapsed();
        if since_tick >= tick_rate {
            handle_event(app, AppEvent::Tick(since_tick));
            last_tick = Instant::now();
        }

        for command in commands {
            match command {
                Command::EnterAltScreen => terminal::set_alt_screen(terminal, true)?,
                Command::ExitAltScreen => terminal::set_alt_screen(terminal, false)?,
                Command::Suspend => {
                    terminal::suspend(terminal, app.alt_screen)?;
                    handle_event(app, AppEvent::Resume);
                    // The suspended gap is credited through the offset, not ticks
                    last_tick = Instant::now();
                }
                Command::Quit => {
                    // Final frame, without the help footer, with the cursor
                    // parked below it for the shell prompt
                    let area = terminal.draw(|f| ui::render(f, app, theme))?.area;
                    let rows = ui::frame_height(app, theme, area);
                    terminal::park_cursor_below(terminal.backend_mut(), rows, area.height)?;
                    return Ok(());
                }
            }
        }
    }
}
