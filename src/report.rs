//! Plain-text and JSON output for the non-interactive commands.
//!
//! Pure functions: (catalog data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::catalog::{flatten_toc, Catalog, IntegrityDefect, PageBody, PageRecord, TocEntry};
use crate::error::Result;
use crate::types::{OutputFormat, Page, PageOrder};

/// Format the table of contents: reading order plus the index page's entries.
pub fn format_contents(catalog: &Catalog, order: &PageOrder, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(contents_human(catalog, order)),
        OutputFormat::Json => contents_json(catalog, order),
    }
}

/// Format a single page's content.
pub fn format_page(record: &PageRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(page_human(record)),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(record)?)),
    }
}

/// Format the result of an integrity check.
pub fn format_defects(defects: &[IntegrityDefect], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(defects_human(defects)),
        OutputFormat::Json => {
            let messages: Vec<String> = defects.iter().map(|d| d.to_string()).collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&messages)?))
        }
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn contents_human(catalog: &Catalog, order: &PageOrder) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", catalog.title));
    for (i, &page) in order.pages().iter().enumerate() {
        let title = catalog.record(page).map_or("(no content)", |r| r.title);
        out.push_str(&format!("{:>2}. {:<20} {}\n", i + 1, page.slug(), title));
    }

    if let Some(PageBody::Contents { entries }) = catalog.record(Page::Index).map(|r| &r.body) {
        out.push('\n');
        out.push_str("=== Index ===\n");
        push_toc(&mut out, entries, 0);
    }

    out
}

fn push_toc(out: &mut String, entries: &[TocEntry], depth: usize) {
    let indent = "  ".repeat(depth);
    for entry in entries {
        let target = entry.target.map(|t| format!("  → {}", t)).unwrap_or_default();
        out.push_str(&format!("{}{} {}{}\n", indent, entry.number, entry.title, target));
        push_toc(out, &entry.children, depth + 1);
    }
}

fn page_human(record: &PageRecord) -> String {
    let mut out = String::new();

    if !record.kicker.is_empty() {
        out.push_str(&format!("{}\n", record.kicker));
    }
    out.push_str(&format!("=== {} ===\n", record.title));
    if let Some(subtitle) = record.subtitle {
        out.push_str(&format!("{}\n", subtitle));
    }
    out.push('\n');

    match &record.body {
        PageBody::Cover { monogram, author } => {
            out.push_str(&format!("[{}]\nby {}\n", monogram, author));
        }
        PageBody::Contents { entries } => {
            for entry in flatten_toc(entries) {
                out.push_str(&format!("{:<5} {}\n", entry.number, entry.title));
            }
        }
        PageBody::Prose {
            paragraphs,
            skill_groups,
        } => {
            for paragraph in paragraphs {
                out.push_str(&format!("{}\n\n", paragraph));
            }
            for group in skill_groups {
                out.push_str(&format!("{}: {}\n", group.name, group.skills.join(", ")));
            }
        }
        PageBody::Project {
            description,
            features,
            tech_stack,
        } => {
            out.push_str(&format!("{}\n\nKey Features:\n", description));
            for feature in features {
                out.push_str(&format!("  • {}\n", feature));
            }
            out.push_str(&format!("\nTech Stack: {}\n", tech_stack.join(", ")));
        }
        PageBody::Collection { categories, note } => {
            for category in categories {
                out.push_str(&format!("{}\n", category.name));
                for item in &category.items {
                    out.push_str(&format!("  • {}: {}\n", item.title, item.description));
                }
                out.push('\n');
            }
            out.push_str(&format!("{}\n", note));
        }
        PageBody::Timeline { roles, closing } => {
            for role in roles {
                out.push_str(&format!(
                    "{} {} — {}\n  {} · {}\n  {}\n",
                    role.mark, role.company, role.role, role.period, role.location, role.summary
                ));
                for achievement in &role.achievements {
                    out.push_str(&format!("    • {}\n", achievement));
                }
                out.push('\n');
            }
            out.push_str(&format!("\"{}\"\n", closing));
        }
    }

    if let Some(url) = record.source_url {
        out.push_str(&format!("\nSource: {}\n", url));
    }
    if !record.folio.is_empty() {
        out.push_str(&format!("\n{}\n", record.folio));
    }

    out
}

fn defects_human(defects: &[IntegrityDefect]) -> String {
    if defects.is_empty() {
        return "Catalog OK: every link names a page in the reading order.\n".to_string();
    }

    let mut out = format!("=== {} integrity defect(s) ===\n", defects.len());
    for defect in defects {
        out.push_str(&format!("  {}\n", defect));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct ContentsJson<'a> {
    title: &'a str,
    order: Vec<OrderedPage<'a>>,
    entries: &'a [TocEntry],
}

#[derive(Serialize)]
struct OrderedPage<'a> {
    page: Page,
    title: Option<&'a str>,
    folio: Option<&'a str>,
}

fn contents_json(catalog: &Catalog, order: &PageOrder) -> Result<String> {
    let entries: &[TocEntry] = match catalog.record(Page::Index).map(|r| &r.body) {
        Some(PageBody::Contents { entries }) => entries,
        _ => &[],
    };

    let doc = ContentsJson {
        title: catalog.title,
        order: order
            .pages()
            .iter()
            .map(|&page| {
                let record = catalog.record(page);
                OrderedPage {
                    page,
                    title: record.map(|r| r.title),
                    folio: record.map(|r| r.folio).filter(|f| !f.is_empty()),
                }
            })
            .collect(),
        entries,
    };

    Ok(format!("{}\n", serde_json::to_string_pretty(&doc)?))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Link, PageLinks};

    fn builtin() -> (Catalog, PageOrder) {
        (Catalog::builtin(), PageOrder::canonical())
    }

    #[test]
    fn human_contents_lists_pages_in_order() {
        let (catalog, order) = builtin();
        let out = format_contents(&catalog, &order, OutputFormat::Human).unwrap();

        let cover = out.find("cover").unwrap();
        let work = out.find("work-experience").unwrap();
        assert!(cover < work);
        assert!(out.contains("2.3 MIPS Compiler  → project-compiler"));
    }

    #[test]
    fn json_contents_is_valid_json() {
        let (catalog, order) = builtin();
        let out = format_contents(&catalog, &order, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["title"], "My Journey");
        assert_eq!(parsed["order"][0]["page"], "cover");
        assert_eq!(parsed["order"][7]["page"], "work-experience");
        assert_eq!(parsed["entries"][1]["children"][0]["target"], "project-strumspace");
    }

    #[test]
    fn human_project_page_shows_features_and_source() {
        let (catalog, _) = builtin();
        let record = catalog.record(Page::ProjectCompiler).unwrap();
        let out = format_page(record, OutputFormat::Human).unwrap();

        assert!(out.starts_with("Chapter 2.3\n=== MIPS Compiler ==="));
        assert!(out.contains("  • Recursive descent parser with grammar design"));
        assert!(out.contains("Tech Stack: C++, MIPS Assembly, Compilers, Systems"));
        assert!(out.contains("Source: https://github.com/LuhemRevorg/WLP4Comp"));
    }

    #[test]
    fn json_page_tags_its_body_kind() {
        let (catalog, _) = builtin();
        let record = catalog.record(Page::WorkExperience).unwrap();
        let out = format_page(record, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["page"], "work-experience");
        assert_eq!(parsed["body"]["kind"], "timeline");
        assert_eq!(parsed["body"]["roles"][0]["company"], "Shopify");
        assert_eq!(parsed["links"]["next"]["target"], "index");
    }

    #[test]
    fn clean_check_says_so() {
        let out = format_defects(&[], OutputFormat::Human).unwrap();
        assert!(out.starts_with("Catalog OK"));
    }

    #[test]
    fn defects_are_listed() {
        let defects = vec![IntegrityDefect::DanglingLink {
            page: Page::Foreword,
            label: "Next Chapter",
            target: "project-aurora",
        }];
        let out = format_defects(&defects, OutputFormat::Human).unwrap();
        assert!(out.contains("1 integrity defect(s)"));
        assert!(out.contains("project-aurora"));

        let json = format_defects(&defects, OutputFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn contents_without_an_index_record_still_lists_the_order() {
        let catalog = Catalog::new(
            "Empty",
            vec![PageRecord {
                page: Page::Cover,
                kicker: "",
                title: "Cover",
                subtitle: None,
                folio: "",
                body: PageBody::Cover { monogram: "X", author: "Y" },
                image: None,
                source_url: None,
                links: PageLinks {
                    previous: None,
                    next: Some(Link::new("Open", "index")),
                },
            }],
        );
        let order = PageOrder::new([Page::Cover, Page::Index]);
        let out = format_contents(&catalog, &order, OutputFormat::Human).unwrap();
        assert!(out.contains("index                (no content)"));
        assert!(!out.contains("=== Index ==="));
    }
}
