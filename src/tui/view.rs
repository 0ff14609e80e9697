//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each page has a dedicated view function chosen by an exhaustive match
//! on `Page`. The mounted page is drawn at rest into an off-screen buffer
//! and composited into the frame at its current pose, so a page turn never
//! shows two pages at once.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::catalog::{PageBody, PageRecord, TocEntry};
use crate::types::Page;

use super::compose;
use super::state::{App, PageUi};
use super::theme;

/// Columns of paper left blank on either side of the text.
const MARGIN: u16 = 2;

/// Builds the lines of one page from its record and per-page state.
type PageView = fn(&PageRecord, &PageUi) -> Vec<Line<'static>>;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the book to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let [title, body, help] = layout(frame.area());

    frame.render_widget(render_title(app), title);
    frame.render_widget(Clear, body);
    frame.buffer_mut().set_style(body, theme::STYLE_PAGE);
    render_mounted(app, frame.buffer_mut(), body);
    frame.render_widget(render_help(app), help);
}

/// Title bar, page body, help line.
fn layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // page
        Constraint::Length(1), // help
    ])
    .areas(area)
}

/// Select the view for a page. Adding a page does not build until it is
/// listed here.
fn view_for(page: Page) -> PageView {
    match page {
        Page::Cover => cover_view,
        Page::Index => contents_view,
        Page::Foreword => prose_view,
        Page::ProjectStrumspace | Page::ProjectShakespeare | Page::ProjectCompiler => project_view,
        Page::MoreProjects => collection_view,
        Page::WorkExperience => timeline_view,
    }
}

/// Lines of `page` as it should look at rest.
fn page_lines(app: &App, page: Page, ui: &PageUi) -> Vec<Line<'static>> {
    match app.catalog.record(page) {
        Some(record) => view_for(page)(record, ui),
        None => missing_view(page),
    }
}

fn page_paragraph(lines: Vec<Line<'static>>, ui: &PageUi) -> Paragraph<'static> {
    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((ui.scroll, 0))
}

/// The text area of a page drawn at the origin.
fn text_area(width: u16, height: u16) -> Rect {
    Rect::new(MARGIN.min(width), 0, width.saturating_sub(2 * MARGIN), height)
}

/// Draw the mounted page into `area` of `dst`, posed.
fn render_mounted(app: &App, dst: &mut Buffer, area: Rect) {
    let mounted = app.turn.mounted();
    // The per-page state belongs to the current page; an exiting page is
    // shown as it was first opened.
    let ui = if mounted.page == app.page() {
        app.ui
    } else {
        PageUi::default()
    };

    let mut sheet = Buffer::empty(Rect::new(0, 0, area.width, area.height));
    sheet.set_style(sheet.area, theme::page_style(mounted.page));
    page_paragraph(page_lines(app, mounted.page, &ui), &ui)
        .render(text_area(area.width, area.height), &mut sheet);

    compose::project(&sheet, dst, area, mounted.pose, theme::PAPER);
}

/// How far the current page can scroll in a frame of `area`.
pub fn max_scroll(app: &App, area: Rect) -> u16 {
    let [_, body, _] = layout(area);
    let text = text_area(body.width, body.height);
    if text.width == 0 {
        return 0;
    }

    let ui = PageUi::default();
    let total = page_paragraph(page_lines(app, app.page(), &ui), &ui).line_count(text.width);
    u16::try_from(total.saturating_sub(usize::from(text.height))).unwrap_or(u16::MAX)
}

// ============================================================================
// CHROME
// ============================================================================

/// Title bar: book title, then the kicker and title of the page on screen.
fn render_title(app: &App) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(format!(" {}", app.catalog.title))];
    if let Some(record) = app.catalog.record(app.turn.mounted().page) {
        spans.push(Span::raw("  ·  "));
        if !record.kicker.is_empty() {
            spans.push(Span::raw(format!("{}: ", record.kicker)));
        }
        spans.push(Span::raw(record.title));
    }
    Paragraph::new(Line::from(spans)).style(theme::STYLE_TITLE)
}

/// Help line: the status message if any, otherwise the keys for the
/// current page and the folio of the page on screen.
fn render_help(app: &App) -> Paragraph<'static> {
    if let Some(status) = &app.status {
        return Paragraph::new(Span::styled(format!(" {}", status), theme::STYLE_STATUS))
            .style(theme::STYLE_HELP);
    }

    let record = app.catalog.record(app.page());
    let mut spans = Vec::new();
    let mut hint = |key: &'static str, label: String| {
        spans.push(Span::styled(format!(" [{}] ", key), theme::STYLE_INTERACTIVE));
        spans.push(Span::raw(label));
    };

    match app.page() {
        Page::Cover => hint("Enter", "open the book".into()),
        Page::Index => {
            hint("↑↓", "move".into());
            hint("Enter", "open".into());
        }
        _ => {
            hint("↑↓", "scroll".into());
            hint("i", "index".into());
        }
    }
    if let Some(record) = record.filter(|_| app.page() != Page::Cover) {
        if let Some(link) = record.links.previous {
            hint("←", link.label.to_string());
        }
        if let Some(link) = record.links.next {
            hint("→", link.label.to_string());
        }
        if record.source_url.is_some() {
            hint("o", "source".into());
        }
    }
    hint("q", "quit".into());

    let on_screen = app.catalog.record(app.turn.mounted().page);
    if let Some(record) = on_screen.filter(|r| !r.folio.is_empty()) {
        spans.push(Span::styled(format!("   {}", record.folio), theme::STYLE_FAINT));
    }

    Paragraph::new(Line::from(spans)).style(theme::STYLE_HELP)
}

// ============================================================================
// SHARED PIECES
// ============================================================================

fn blank() -> Line<'static> {
    Line::from("")
}

fn rule() -> Line<'static> {
    Line::from(Span::styled("─".repeat(24), theme::STYLE_FAINT))
}

fn bullet(text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", theme::STYLE_KICKER),
        Span::styled(text, theme::STYLE_BODY),
    ])
}

/// Kicker, title, subtitle and rule.
fn heading(record: &PageRecord) -> Vec<Line<'static>> {
    let mut lines = vec![blank()];
    if !record.kicker.is_empty() {
        lines.push(Line::from(Span::styled(record.kicker.to_uppercase(), theme::STYLE_KICKER)));
    }
    lines.push(Line::from(Span::styled(record.title, theme::STYLE_HEADING)));
    if let Some(subtitle) = record.subtitle {
        lines.push(Line::from(Span::styled(subtitle, theme::STYLE_MUTED)));
    }
    lines.push(rule());
    lines.push(blank());
    lines
}

/// Figure reference, source link, folio.
fn footer(record: &PageRecord) -> Vec<Line<'static>> {
    let mut lines = vec![blank()];
    if let Some(image) = record.image {
        lines.push(Line::from(Span::styled(format!("[figure: {}]", image), theme::STYLE_FAINT)));
    }
    if let Some(url) = record.source_url {
        lines.push(Line::from(vec![
            Span::styled("Source ", theme::STYLE_MUTED),
            Span::styled(url, theme::STYLE_INTERACTIVE),
        ]));
    }
    if !record.folio.is_empty() {
        lines.push(blank());
        lines.push(Line::from(Span::styled(record.folio, theme::STYLE_FAINT)).centered());
    }
    lines
}

fn framed(record: &PageRecord, body: Vec<Line<'static>>) -> Vec<Line<'static>> {
    let mut lines = heading(record);
    lines.extend(body);
    lines.extend(footer(record));
    lines
}

// ============================================================================
// PAGE VIEWS
// ============================================================================

fn cover_view(record: &PageRecord, _ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Cover { monogram, author } = &record.body else {
        return mismatched_view(record);
    };

    let mut lines = vec![blank(); 3];
    lines.push(Line::from(Span::styled("╭──────╮", theme::STYLE_COVER)).centered());
    lines.push(Line::from(Span::styled(format!("│  {:<2}  │", monogram), theme::STYLE_COVER)).centered());
    lines.push(Line::from(Span::styled("╰──────╯", theme::STYLE_COVER)).centered());
    lines.push(blank());
    lines.push(Line::from(Span::styled(format!("  {}  ", record.title), theme::STYLE_BAND)).centered());
    if let Some(subtitle) = record.subtitle {
        lines.push(Line::from(Span::styled(subtitle, theme::STYLE_COVER)).centered());
    }
    lines.push(blank());
    lines.push(Line::from(Span::styled(*author, theme::STYLE_COVER)).centered());
    lines
}

fn contents_view(record: &PageRecord, ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Contents { entries } = &record.body else {
        return mismatched_view(record);
    };

    let mut body = Vec::new();
    let mut selectable = 0;
    push_entries(&mut body, entries, 0, ui.cursor, &mut selectable);
    framed(record, body)
}

/// One line per entry, depth-first. `selectable` counts entries with a
/// target so the cursor lines up with `update::selectable_entries`.
fn push_entries(
    lines: &mut Vec<Line<'static>>,
    entries: &[TocEntry],
    depth: usize,
    cursor: usize,
    selectable: &mut usize,
) {
    for entry in entries {
        let focused = entry.target.is_some() && *selectable == cursor;
        if entry.target.is_some() {
            *selectable += 1;
        }

        let marker = if focused { "▸ " } else { "  " };
        let title_style = if focused {
            theme::STYLE_CURSOR
        } else if entry.target.is_some() {
            theme::STYLE_BODY
        } else {
            theme::STYLE_HEADING
        };

        let mut spans = vec![
            Span::raw("  ".repeat(depth)),
            Span::styled(marker, theme::STYLE_CURSOR),
            Span::styled(format!("{:<4} ", entry.number), theme::STYLE_KICKER),
            Span::styled(entry.title, title_style),
        ];
        if let Some(subtitle) = entry.subtitle {
            spans.push(Span::styled(format!("  {}", subtitle), theme::STYLE_MUTED));
        }
        lines.push(Line::from(spans));

        push_entries(lines, &entry.children, depth + 1, cursor, selectable);
    }
}

fn prose_view(record: &PageRecord, _ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Prose {
        paragraphs,
        skill_groups,
    } = &record.body
    else {
        return mismatched_view(record);
    };

    let mut body = Vec::new();
    for &paragraph in paragraphs {
        body.push(Line::from(Span::styled(paragraph, theme::STYLE_BODY)));
        body.push(blank());
    }
    if !skill_groups.is_empty() {
        body.push(Line::from(Span::styled("Skills", theme::STYLE_HEADING)));
        for group in skill_groups {
            body.push(Line::from(vec![
                Span::styled(format!("{}: ", group.name), theme::STYLE_KICKER),
                Span::styled(group.skills.join(" · "), theme::STYLE_BODY),
            ]));
        }
    }
    framed(record, body)
}

fn project_view(record: &PageRecord, _ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Project {
        description,
        features,
        tech_stack,
    } = &record.body
    else {
        return mismatched_view(record);
    };

    let mut body = vec![Line::from(Span::styled(*description, theme::STYLE_BODY)), blank()];
    body.push(Line::from(Span::styled("Key Features", theme::STYLE_HEADING)));
    body.extend(features.iter().map(|&f| bullet(f)));
    body.push(blank());
    body.push(Line::from(Span::styled("Tech Stack", theme::STYLE_HEADING)));

    let mut tags = Vec::new();
    for &tech in tech_stack {
        tags.push(Span::styled(format!(" {} ", tech), theme::STYLE_TAG));
        tags.push(Span::raw(" "));
    }
    body.push(Line::from(tags));
    framed(record, body)
}

fn collection_view(record: &PageRecord, _ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Collection { categories, note } = &record.body else {
        return mismatched_view(record);
    };

    let mut body = Vec::new();
    for category in categories {
        body.push(Line::from(Span::styled(category.name, theme::STYLE_HEADING)));
        for item in &category.items {
            body.push(Line::from(vec![
                Span::styled("  • ", theme::STYLE_KICKER),
                Span::styled(item.title, theme::STYLE_CURSOR),
            ]));
            body.push(Line::from(Span::styled(format!("    {}", item.description), theme::STYLE_BODY)));
        }
        body.push(blank());
    }
    body.push(Line::from(Span::styled(*note, theme::STYLE_MUTED)));
    framed(record, body)
}

fn timeline_view(record: &PageRecord, _ui: &PageUi) -> Vec<Line<'static>> {
    let PageBody::Timeline { roles, closing } = &record.body else {
        return mismatched_view(record);
    };

    let mut body = Vec::new();
    for role in roles {
        body.push(Line::from(vec![
            Span::styled(format!("{} ", role.mark), theme::STYLE_KICKER),
            Span::styled(role.company, theme::STYLE_HEADING),
        ]));
        body.push(Line::from(Span::styled(format!("  {}", role.role), theme::STYLE_KICKER)));
        body.push(Line::from(Span::styled(
            format!("  {} · {}", role.period, role.location),
            theme::STYLE_MUTED,
        )));
        body.push(Line::from(Span::styled(format!("  {}", role.summary), theme::STYLE_BODY)));
        body.extend(role.achievements.iter().map(|&a| bullet(a)));
        body.push(blank());
    }
    body.push(Line::from(Span::styled(format!("\"{}\"", closing), theme::STYLE_MUTED)).centered());
    framed(record, body)
}

// ============================================================================
// FALLBACKS
// ============================================================================

/// Shown when the catalog has no record for a page.
fn missing_view(page: Page) -> Vec<Line<'static>> {
    vec![
        blank(),
        Line::from(Span::styled("This page is missing from the book.", theme::STYLE_HEADING)),
        Line::from(Span::styled(format!("({})", page.slug()), theme::STYLE_MUTED)),
        blank(),
        Line::from(Span::styled("Press i for the index.", theme::STYLE_BODY)),
    ]
}

/// Shown when a record's body does not fit its page's view.
fn mismatched_view(record: &PageRecord) -> Vec<Line<'static>> {
    let mut lines = heading(record);
    lines.push(Line::from(Span::styled(
        "This page's content cannot be shown here.",
        theme::STYLE_MUTED,
    )));
    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::MotionConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn make_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 40)).unwrap()
    }

    fn app(start: Page) -> App {
        App::new(start, Catalog::builtin(), MotionConfig::default())
    }

    fn screen(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn every_page_renders_without_panic() {
        for page in Page::ALL {
            let content = screen(&app(page));
            assert!(content.contains("My Journey"), "{page} title bar");
        }
    }

    #[test]
    fn cover_shows_monogram_and_author() {
        let content = screen(&app(Page::Cover));
        assert!(content.contains("MG"));
        assert!(content.contains("Mehul Grover"));
        assert!(content.contains("open the book"));
    }

    #[test]
    fn index_marks_the_focused_entry() {
        let mut app = app(Page::Index);
        app.ui = PageUi { cursor: 3, scroll: 0 };
        let content = screen(&app);
        let focused = content.lines().find(|l| l.contains('▸')).unwrap();
        assert!(focused.contains("MIPS Compiler"));
    }

    #[test]
    fn project_page_shows_features_and_stack() {
        let content = screen(&app(Page::ProjectCompiler));
        assert!(content.contains("MIPS Compiler"));
        assert!(content.contains("Key Features"));
        assert!(content.contains("Tech Stack"));
        assert!(content.contains("[o] source"));
    }

    #[test]
    fn help_line_names_the_neighbouring_pages() {
        let content = screen(&app(Page::Foreword));
        let help = content.lines().last().unwrap();
        assert!(help.contains("[←] Index"), "{help}");
        assert!(help.contains("[→]"), "{help}");
    }

    #[test]
    fn status_replaces_the_help_line() {
        let mut app = app(Page::Foreword);
        app.status = Some("This chapter has no outbound link".into());
        let content = screen(&app);
        assert!(content.lines().last().unwrap().contains("no outbound link"));
    }

    #[test]
    fn missing_record_shows_the_fallback() {
        let app = App::new(
            Page::Foreword,
            Catalog::new("Empty", Vec::new()),
            MotionConfig::default(),
        );
        let content = screen(&app);
        assert!(content.contains("missing from the book"));
        assert!(content.contains("(foreword)"));
    }

    #[test]
    fn mismatched_body_shows_the_fallback() {
        let catalog = Catalog::builtin();
        let cover = catalog.record(Page::Cover).unwrap();
        let lines = prose_view(cover, &PageUi::default());
        assert!(text(&lines).contains("cannot be shown"));
    }

    #[test]
    fn each_page_gets_its_own_view() {
        let catalog = Catalog::builtin();
        for page in Page::ALL {
            let record = catalog.record(page).unwrap();
            let lines = view_for(page)(record, &PageUi::default());
            assert!(!text(&lines).contains("cannot be shown"), "{page}");
        }
    }

    #[test]
    fn timeline_lists_every_role() {
        let catalog = Catalog::builtin();
        let record = catalog.record(Page::WorkExperience).unwrap();
        let rendered = text(&timeline_view(record, &PageUi::default()));
        assert!(rendered.contains("Shopify"));
    }

    #[test]
    fn mid_turn_shows_only_the_mounted_page() {
        let mut app = app(Page::Index);
        app.navigate(Page::Foreword);
        app.turn.tick(Duration::from_millis(100));
        let content = screen(&app);

        // The index is still exiting; the foreword is not mounted yet.
        assert_eq!(app.turn.mounted().page, Page::Index);
        assert!(content.contains("Selected Works"));
        assert!(!content.contains("Hi, I'm Mehul"));
    }

    #[test]
    fn chrome_follows_the_page_on_screen() {
        let mut app = app(Page::Index);
        app.navigate(Page::Foreword);

        let exiting = screen(&app);
        let title = exiting.lines().next().unwrap();
        assert!(title.contains("Index"), "{title}");
        assert!(!title.contains("Chapter One"), "{title}");
        assert!(exiting.lines().last().unwrap().contains("— i —"));

        while !app.turn.is_settled() {
            app.turn.tick(Duration::from_millis(16));
        }
        let settled = screen(&app);
        assert!(settled.lines().next().unwrap().contains("Chapter One: Foreword"));
        assert!(settled.lines().last().unwrap().contains("— 1 —"));
        assert!(settled.contains("Hi, I'm Mehul"));
    }

    #[test]
    fn long_pages_can_scroll_on_small_terminals() {
        let app = app(Page::WorkExperience);
        assert!(max_scroll(&app, Rect::new(0, 0, 40, 12)) > 0);
        assert_eq!(max_scroll(&app, Rect::new(0, 0, 200, 400)), 0);
        assert_eq!(max_scroll(&app, Rect::new(0, 0, 3, 12)), 0);
    }
}
