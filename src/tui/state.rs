//! TUI state algebra: pure types, zero effects.
//!
//! The navigator is owned here, by the top-level App, and handed to the
//! pure layers by reference. Nothing reaches it through global state.
//!
//! Design principle: `PageUi` carries only per-page transient state
//! (contents cursor, scroll). It resets on every navigation. Content lives
//! in the catalog and is never copied into UI state.

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::MotionConfig;
use crate::motion::PageTurn;
use crate::navigator::{Navigation, Navigator};
use crate::timer::TimerId;
use crate::types::Page;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` and `Resize`
/// - The cover's scoped timer sends `CoverElapsed`
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Terminal was resized; redraw.
    Resize,
    /// The cover's auto-advance timer ran out.
    CoverElapsed(TimerId),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Single owner of the current page and last direction.
    pub navigator: Navigator,
    pub catalog: Catalog,
    /// Animation between the previous page and the current one.
    pub turn: PageTurn,
    pub ui: PageUi,
    pub motion: MotionConfig,
    /// One-line message shown in the help bar until the next navigation.
    pub status: Option<String>,
    /// Furthest the current page can scroll at the last drawn size.
    pub max_scroll: u16,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Per-page transient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageUi {
    /// Focused entry among the selectable contents entries.
    pub cursor: usize,
    /// Lines scrolled off the top.
    pub scroll: u16,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Follow the page's "next" link.
    Next,
    /// Follow the page's "previous" link.
    Previous,
    /// Jump to the index.
    Contents,
    /// Move the contents cursor or scroll up.
    Up,
    /// Move the contents cursor or scroll down.
    Down,
    /// Open the focused contents entry.
    Select,
    /// Open the page's outbound link in the system browser.
    OpenLink,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Stay on the current page with updated per-page state.
    Stay(PageUi),
    /// Turn to another page.
    Navigate(Page),
    /// Stay put and tell the reader why.
    Notice(String),
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a URL in the system's default handler.
    OpenLink { url: String },
}

// ============================================================================
// CONSTRUCTORS & MUTATION
// ============================================================================

impl App {
    /// Open the book on `start`. The start page is already at rest.
    pub fn new(start: Page, catalog: Catalog, motion: MotionConfig) -> Self {
        App {
            navigator: Navigator::new(start),
            catalog,
            turn: PageTurn::settled(start, &motion),
            ui: PageUi::default(),
            motion,
            status: None,
            max_scroll: 0,
            should_quit: false,
        }
    }

    /// The logical current page (the one a turn is heading to).
    pub fn page(&self) -> Page {
        self.navigator.current()
    }

    /// Navigate and start the page turn from whatever is on screen now.
    pub fn navigate(&mut self, target: Page) -> Navigation {
        let outgoing = self.turn.mounted().page;
        let nav = self.navigator.navigate(target);
        self.turn = PageTurn::start(outgoing, &nav, &self.motion);
        self.ui = PageUi::default();
        self.status = None;
        nav
    }

    /// Apply a transition. Returns the effect, if any, for the effects layer.
    pub fn apply(&mut self, transition: Transition) -> Option<Effect> {
        match transition {
            Transition::Stay(ui) => {
                self.ui = ui;
                None
            }
            Transition::Navigate(page) => {
                self.navigate(page);
                None
            }
            Transition::Notice(message) => {
                debug!(%message, "notice");
                self.status = Some(message);
                None
            }
            Transition::Quit => {
                self.should_quit = true;
                None
            }
            Transition::Effect(effect) => Some(effect),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
