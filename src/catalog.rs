//! Content catalog: the static record behind every page.
//!
//! Lookups are pure reads keyed by page. Links inside records are stored as
//! slugs, since they are data, and resolve through the page enumeration.
//! A slug that names no page is a data defect. It is reported by
//! `integrity_defects` and never followed.

use serde::Serialize;
use thiserror::Error;

use crate::content;
use crate::types::{Page, PageOrder};

// ============================================================================
// RECORDS
// ============================================================================

/// Everything the renderer needs to draw one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub page: Page,
    /// Small line above the title, e.g. "Chapter 2.1".
    pub kicker: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Page-number marker, e.g. "— 1 —".
    pub folio: &'static str,
    pub body: PageBody,
    /// Hero image reference.
    pub image: Option<&'static str>,
    /// Outbound link, e.g. a project's source repository.
    pub source_url: Option<&'static str>,
    pub links: PageLinks,
}

/// The previous/next controls of a page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageLinks {
    pub previous: Option<Link>,
    pub next: Option<Link>,
}

/// A labelled reference to another page, by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub target: &'static str,
}

impl Link {
    pub const fn new(label: &'static str, target: &'static str) -> Self {
        Link { label, target }
    }

    /// The page this link points at, if the slug names one.
    pub fn resolve(&self) -> Option<Page> {
        Page::from_slug(self.target)
    }
}

/// Page-specific content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageBody {
    Cover {
        monogram: &'static str,
        author: &'static str,
    },
    Contents {
        entries: Vec<TocEntry>,
    },
    Prose {
        paragraphs: Vec<&'static str>,
        skill_groups: Vec<SkillGroup>,
    },
    Project {
        description: &'static str,
        features: Vec<&'static str>,
        tech_stack: Vec<&'static str>,
    },
    Collection {
        categories: Vec<Category>,
        note: &'static str,
    },
    Timeline {
        roles: Vec<Role>,
        closing: &'static str,
    },
}

/// One line in the table of contents.
#[derive(Debug, Clone, Serialize)]
pub struct TocEntry {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Slug of the page this entry opens. Section headings have none.
    pub target: Option<&'static str>,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn resolve(&self) -> Option<Page> {
        self.target.and_then(Page::from_slug)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub name: &'static str,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub items: Vec<Showcase>,
}

/// A short project blurb on the more-projects page.
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Role {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub achievements: Vec<&'static str>,
    /// Glyph stamped on the timeline.
    pub mark: &'static str,
}

// ============================================================================
// CATALOG
// ============================================================================

/// All page records, keyed by page.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Title of the book itself.
    pub title: &'static str,
    records: Vec<PageRecord>,
}

/// A reference in the content that the page enumeration cannot satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityDefect {
    #[error("{page}: link {label:?} points at unknown page {target:?}")]
    DanglingLink {
        page: Page,
        label: &'static str,
        target: &'static str,
    },

    #[error("{page}: contents entry {number} points at unknown page {target:?}")]
    DanglingEntry {
        page: Page,
        number: &'static str,
        target: &'static str,
    },

    #[error("{0}: page is in the reading order but has no content")]
    MissingRecord(Page),

    #[error("{0}: page has content but is not in the reading order")]
    Unordered(Page),
}

impl Catalog {
    pub fn new(title: &'static str, records: Vec<PageRecord>) -> Self {
        Catalog { title, records }
    }

    /// The portfolio that ships with the binary.
    pub fn builtin() -> Self {
        Catalog::new(content::BOOK_TITLE, content::records())
    }

    /// Record for `page`, if the catalog has one.
    pub fn record(&self, page: Page) -> Option<&PageRecord> {
        self.records.iter().find(|r| r.page == page)
    }

    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// Every reference the page enumeration or `order` cannot satisfy.
    pub fn integrity_defects(&self, order: &PageOrder) -> Vec<IntegrityDefect> {
        let mut defects = Vec::new();

        for &page in order.pages() {
            if self.record(page).is_none() {
                defects.push(IntegrityDefect::MissingRecord(page));
            }
        }

        for record in &self.records {
            if !order.contains(record.page) {
                defects.push(IntegrityDefect::Unordered(record.page));
            }

            let links = [record.links.previous, record.links.next];
            for link in links.into_iter().flatten() {
                if !link.resolve().is_some_and(|p| order.contains(p)) {
                    defects.push(IntegrityDefect::DanglingLink {
                        page: record.page,
                        label: link.label,
                        target: link.target,
                    });
                }
            }

            if let PageBody::Contents { entries } = &record.body {
                for entry in flatten_toc(entries) {
                    let Some(target) = entry.target else { continue };
                    if !entry.resolve().is_some_and(|p| order.contains(p)) {
                        defects.push(IntegrityDefect::DanglingEntry {
                            page: record.page,
                            number: entry.number,
                            target,
                        });
                    }
                }
            }
        }

        defects
    }
}

/// Depth-first walk of a contents tree: each entry, then its children.
pub fn flatten_toc(entries: &[TocEntry]) -> Vec<&TocEntry> {
    let mut out = Vec::new();
    for entry in entries {
        out.push(entry);
        out.extend(flatten_toc(&entry.children));
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(page: Page, links: PageLinks) -> PageRecord {
        PageRecord {
            page,
            kicker: "",
            title: "stub",
            subtitle: None,
            folio: "",
            body: PageBody::Collection {
                categories: Vec::new(),
                note: "",
            },
            image: None,
            source_url: None,
            links,
        }
    }

    #[test]
    fn builtin_catalog_covers_every_page() {
        let catalog = Catalog::builtin();
        for page in Page::ALL {
            let record = catalog.record(page).expect("record for every page");
            assert_eq!(record.page, page);
        }
    }

    #[test]
    fn builtin_catalog_has_no_integrity_defects() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.integrity_defects(&PageOrder::canonical()), Vec::new());
    }

    #[test]
    fn builtin_chapter_links_follow_the_reading_order() {
        let catalog = Catalog::builtin();
        let next = |page: Page| {
            catalog
                .record(page)
                .and_then(|r| r.links.next)
                .and_then(|l| l.resolve())
        };
        assert_eq!(next(Page::Foreword), Some(Page::ProjectStrumspace));
        assert_eq!(next(Page::ProjectStrumspace), Some(Page::ProjectShakespeare));
        assert_eq!(next(Page::ProjectShakespeare), Some(Page::ProjectCompiler));
        assert_eq!(next(Page::ProjectCompiler), Some(Page::MoreProjects));
        assert_eq!(next(Page::MoreProjects), Some(Page::WorkExperience));
        assert_eq!(next(Page::WorkExperience), Some(Page::Index));

        let previous = catalog
            .record(Page::MoreProjects)
            .and_then(|r| r.links.previous)
            .and_then(|l| l.resolve());
        assert_eq!(previous, Some(Page::ProjectCompiler));
    }

    #[test]
    fn dangling_sibling_link_is_reported() {
        let links = PageLinks {
            previous: Some(Link::new("Index", "index")),
            next: Some(Link::new("Next Chapter", "project-aurora")),
        };
        let catalog = Catalog::new(
            "test",
            vec![stub(Page::Index, PageLinks::default()), stub(Page::Foreword, links)],
        );
        let order = PageOrder::new([Page::Index, Page::Foreword]);

        assert_eq!(
            catalog.integrity_defects(&order),
            vec![IntegrityDefect::DanglingLink {
                page: Page::Foreword,
                label: "Next Chapter",
                target: "project-aurora",
            }]
        );
    }

    #[test]
    fn missing_and_unordered_records_are_reported() {
        let catalog = Catalog::new("test", vec![stub(Page::WorkExperience, PageLinks::default())]);
        let order = PageOrder::new([Page::Index]);

        let defects = catalog.integrity_defects(&order);
        assert!(defects.contains(&IntegrityDefect::MissingRecord(Page::Index)));
        assert!(defects.contains(&IntegrityDefect::Unordered(Page::WorkExperience)));
    }

    #[test]
    fn record_lookup_misses_cleanly() {
        let catalog = Catalog::new("test", Vec::new());
        assert!(catalog.record(Page::Foreword).is_none());
    }

    #[test]
    fn flatten_walks_children_in_order() {
        let catalog = Catalog::builtin();
        let Some(PageBody::Contents { entries }) = catalog.record(Page::Index).map(|r| &r.body)
        else {
            panic!("index should carry contents");
        };
        let numbers: Vec<&str> = flatten_toc(entries).iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec!["1", "2", "2.1", "2.2", "2.3", "2.4", "3"]);
    }

    #[test]
    fn defect_messages_name_the_bad_slug() {
        let defect = IntegrityDefect::DanglingLink {
            page: Page::MoreProjects,
            label: "Previous",
            target: "project-echo",
        };
        assert_eq!(
            defect.to_string(),
            "more-projects: link \"Previous\" points at unknown page \"project-echo\""
        );
    }
}
