//! Domain types for bookfolio.
//!
//! The page enumeration is closed: every page the reader can show is a
//! variant here, and every slug in the content data must parse back into
//! one of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookError;

// ============================================================================
// PAGES
// ============================================================================

/// A page of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Cover,
    Index,
    Foreword,
    ProjectStrumspace,
    ProjectShakespeare,
    ProjectCompiler,
    MoreProjects,
    WorkExperience,
}

impl Page {
    /// Every page, in reading order.
    pub const ALL: [Page; 8] = [
        Page::Cover,
        Page::Index,
        Page::Foreword,
        Page::ProjectStrumspace,
        Page::ProjectShakespeare,
        Page::ProjectCompiler,
        Page::MoreProjects,
        Page::WorkExperience,
    ];

    /// Stable kebab-case identifier, as used in content links and on the CLI.
    pub fn slug(self) -> &'static str {
        match self {
            Page::Cover => "cover",
            Page::Index => "index",
            Page::Foreword => "foreword",
            Page::ProjectStrumspace => "project-strumspace",
            Page::ProjectShakespeare => "project-shakespeare",
            Page::ProjectCompiler => "project-compiler",
            Page::MoreProjects => "more-projects",
            Page::WorkExperience => "work-experience",
        }
    }

    /// Look a page up by slug. Returns None for anything outside the enumeration.
    pub fn from_slug(slug: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_slug(s.trim()).ok_or_else(|| BookError::UnknownPage(s.to_string()))
    }
}

// ============================================================================
// DIRECTION
// ============================================================================

/// Which way the book is being read for a single navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Classify a move from `from` to `to` against `order`.
    ///
    /// Forward only when the target sits strictly later in the order.
    /// A target missing from the order ranks below every real position,
    /// so it always reads as backward; so does staying put.
    pub fn between(order: &PageOrder, from: Page, to: Page) -> Direction {
        // Option<usize> orders None below Some(_).
        if order.position(to) > order.position(from) {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// +1.0 for forward, -1.0 for backward. Used to mirror turn poses.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

// ============================================================================
// PAGE ORDER
// ============================================================================

/// The fixed sequence that defines "forward" for any pair of pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrder {
    pages: Vec<Page>,
}

impl PageOrder {
    /// The book's reading order: cover through work experience.
    pub fn canonical() -> Self {
        PageOrder {
            pages: Page::ALL.to_vec(),
        }
    }

    /// Build a custom order. Repeated pages keep their first position.
    pub fn new(pages: impl IntoIterator<Item = Page>) -> Self {
        let mut ordered: Vec<Page> = Vec::new();
        for page in pages {
            if !ordered.contains(&page) {
                ordered.push(page);
            }
        }
        PageOrder { pages: ordered }
    }

    pub fn position(&self, page: Page) -> Option<usize> {
        self.pages.iter().position(|&p| p == page)
    }

    pub fn contains(&self, page: Page) -> bool {
        self.position(page).is_some()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

impl Default for PageOrder {
    fn default() -> Self {
        PageOrder::canonical()
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Output format for the non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
