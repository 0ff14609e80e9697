//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producers feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key and resize events
//! - Cover timer: sends `CoverElapsed` when the cover has been shown long enough
//! The event loop consumes from the channel one event at a time. While a
//! page turn is animating it also wakes every frame to advance the turn.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;
use crate::timer::AutoAdvance;

use super::state::{Action, App, AppEvent, Effect};
use super::update::{handle_background_event, update};
use super::view::{max_scroll, render};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Turning pages
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(Action::Previous),
        KeyCode::Home | KeyCode::Char('i') => Some(Action::Contents),

        // Within a page
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('o') => Some(Action::OpenLink),

        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let event = match event::read() {
                // Only presses: some terminals also report releases.
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
                Ok(Event::Resize(..)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(event).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Open the book and run until the reader quits.
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// every exit path out of the loop.
pub fn run(config: &Config, catalog: Catalog) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, config, catalog);

    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Term, config: &Config, catalog: Catalog) -> Result<()> {
    let mut app = App::new(config.start_page, catalog, config.motion.clone());
    let mut auto_advance = AutoAdvance::new(config.cover_delay());
    let frame = config.frame();

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());
    sync_cover_timer(&mut auto_advance, &app, &tx);
    info!(page = %app.page(), "book opened");

    let mut last_tick = Instant::now();
    loop {
        let size = terminal.size()?;
        app.max_scroll = max_scroll(&app, Rect::new(0, 0, size.width, size.height));
        app.ui.scroll = app.ui.scroll.min(app.max_scroll);
        terminal.draw(|f| render(&app, f))?;

        if app.should_quit {
            break;
        }

        // Block on the next event, or wake for the next frame while turning.
        let event = if app.turn.is_settled() {
            match rx.recv() {
                Ok(event) => Some(event),
                Err(_) => break, // all senders dropped
            }
        } else {
            match rx.recv_timeout(frame) {
                Ok(event) => Some(event),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        };

        let now = Instant::now();
        app.turn.tick(now - last_tick);
        last_tick = now;

        let Some(event) = event else {
            continue;
        };

        let before = app.page();
        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    let transition = update(app.page(), app.ui, &action, &app.catalog, app.max_scroll);
                    if let Some(effect) = app.apply(transition) {
                        handle_effect(effect, &mut app);
                    }
                }
            }
            background => handle_background_event(&mut app, &mut auto_advance, background),
        }

        if app.page() != before {
            // A turn starting from rest should not absorb the idle time.
            last_tick = Instant::now();
            sync_cover_timer(&mut auto_advance, &app, &tx);
        }
    }

    auto_advance.cancel();
    info!(page = %app.page(), "book closed");
    Ok(())
}

/// Arm the cover timer on the cover, disarm it anywhere else.
fn sync_cover_timer(auto_advance: &mut AutoAdvance, app: &App, tx: &mpsc::Sender<AppEvent>) {
    let tx = tx.clone();
    auto_advance.sync(app.page(), move |id| {
        let _ = tx.send(AppEvent::CoverElapsed(id));
    });
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App) {
    match effect {
        Effect::OpenLink { url } => match open::that(&url) {
            Ok(()) => {
                debug!(%url, "opened link");
                app.status = Some(format!("Opened {}", url));
            }
            Err(e) => {
                warn!(%url, error = %e, "could not open link");
                app.status = Some(format!("Could not open {}: {}", url, e));
            }
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
