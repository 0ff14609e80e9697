//! TUI color semantics and style constants.
//!
//! A printed-book palette: warm paper, dark ink, a brass accent.
//! The cover is bound in leather with gold tooling. All colors are RGB so
//! page turns can fade them toward the paper.
//!
//! Color semantics:
//! - Ink: body text
//! - Accent (brass): chapter numbers, rules, interactive hints
//! - Muted: subtitles, secondary text
//! - Faint: folios, dotted leaders
//! - Gold on leather: the cover only

use ratatui::style::{Color, Modifier, Style};

use crate::types::Page;

// ============================================================================
// PALETTE
// ============================================================================

pub const PAPER: Color = Color::Rgb(0xfa, 0xf8, 0xf5);
pub const INK: Color = Color::Rgb(0x2a, 0x2a, 0x2a);
pub const INK_SOFT: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
pub const MUTED: Color = Color::Rgb(0x6a, 0x6a, 0x6a);
pub const FAINT: Color = Color::Rgb(0xa8, 0x99, 0x84);
pub const ACCENT: Color = Color::Rgb(0xd4, 0xa5, 0x74);
pub const LEATHER: Color = Color::Rgb(0x5a, 0x2f, 0x20);
pub const GOLD: Color = Color::Rgb(0xd4, 0xaf, 0x37);
pub const PARCHMENT: Color = Color::Rgb(0xd9, 0xc8, 0x9e);

// ============================================================================
// PAGE STYLES
// ============================================================================

/// Background and default text of an inner page.
pub const STYLE_PAGE: Style = Style::new().fg(INK).bg(PAPER);

/// Background and default text of the cover.
pub const STYLE_COVER: Style = Style::new().fg(GOLD).bg(LEATHER);

/// Body text.
pub const STYLE_BODY: Style = Style::new().fg(INK_SOFT);

/// Page and chapter titles.
pub const STYLE_HEADING: Style = Style::new().fg(INK).add_modifier(Modifier::BOLD);

/// "Chapter 2.1", section numbers.
pub const STYLE_KICKER: Style = Style::new().fg(ACCENT);

/// Subtitles, secondary copy.
pub const STYLE_MUTED: Style = Style::new().fg(MUTED);

/// Folios, leaders, rules.
pub const STYLE_FAINT: Style = Style::new().fg(FAINT);

/// Tech-stack tags.
pub const STYLE_TAG: Style = Style::new().fg(INK_SOFT).bg(Color::Rgb(0xf0, 0xed, 0xe8));

/// Focused contents entry.
pub const STYLE_CURSOR: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

/// Cover title band.
pub const STYLE_BAND: Style = Style::new()
    .fg(Color::Rgb(0x2d, 0x24, 0x16))
    .bg(PARCHMENT)
    .add_modifier(Modifier::BOLD);

// ============================================================================
// CHROME STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(PAPER).bg(INK).add_modifier(Modifier::BOLD);

/// Key hints in the help line.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(ACCENT);

/// Help line text.
pub const STYLE_HELP: Style = Style::new().fg(MUTED).bg(PAPER);

/// Transient status message.
pub const STYLE_STATUS: Style = Style::new().fg(LEATHER).bg(PAPER).add_modifier(Modifier::ITALIC);

/// Background style a page is drawn on.
pub fn page_style(page: Page) -> Style {
    match page {
        Page::Cover => STYLE_COVER,
        _ => STYLE_PAGE,
    }
}

// ============================================================================
// TESTS
// ============================================================================
