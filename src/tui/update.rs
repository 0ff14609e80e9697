//! Pure state transitions: (Page, PageUi, Action) → Transition.
//!
//! Fully testable without a terminal. Each page kind defines which actions
//! it accepts; unhandled actions keep the current page state (no-op).
//! The dispatch is an exhaustive match on `Page`, so a new page does not
//! build until it has a handler.

use tracing::{debug, warn};

use crate::catalog::{flatten_toc, Catalog, Link, PageBody, PageRecord, TocEntry};
use crate::timer::{AutoAdvance, AUTO_ADVANCE_FROM, AUTO_ADVANCE_TO};
use crate::types::Page;

use super::state::{Action, App, AppEvent, Effect, PageUi, Transition};

/// Pure state transition function.
///
/// `max_scroll` is how far the current page can scroll at the size it was
/// last drawn. The effects boundary interprets the result.
pub fn update(page: Page, ui: PageUi, action: &Action, catalog: &Catalog, max_scroll: u16) -> Transition {
    // Leaving is always possible, even from a page with no content.
    match action {
        Action::Quit => return Transition::Quit,
        Action::Contents if page != Page::Index => return Transition::Navigate(Page::Index),
        _ => {}
    }

    let Some(record) = catalog.record(page) else {
        return Transition::Stay(ui);
    };

    match page {
        Page::Cover => update_cover(record, ui, action),
        Page::Index => update_index(record, ui, action),
        Page::Foreword
        | Page::ProjectStrumspace
        | Page::ProjectShakespeare
        | Page::ProjectCompiler
        | Page::MoreProjects
        | Page::WorkExperience => update_chapter(record, ui, action, max_scroll),
    }
}

/// Handle an event that did not come from the reader's keys.
///
/// A cover tick turns to the index only if it comes from the live timer
/// and the cover is still the current page. Keys go through `update`.
pub fn handle_background_event(app: &mut App, auto_advance: &mut AutoAdvance, event: AppEvent) {
    match event {
        AppEvent::CoverElapsed(id) => {
            if auto_advance.accept(id) && app.page() == AUTO_ADVANCE_FROM {
                debug!(timer = id.0, "cover elapsed, opening the book");
                app.navigate(AUTO_ADVANCE_TO);
            }
        }
        // Redraw only.
        AppEvent::Resize => {}
        AppEvent::Key(_) => {}
    }
}

// ============================================================================
// PER-PAGE HANDLERS
// ============================================================================

/// Cover: any forward gesture opens the book early.
fn update_cover(record: &PageRecord, ui: PageUi, action: &Action) -> Transition {
    match action {
        Action::Next | Action::Select => follow(record.links.next, ui),
        _ => Transition::Stay(ui),
    }
}

/// Index: cursor over the entries that open a page, Enter to open.
fn update_index(record: &PageRecord, ui: PageUi, action: &Action) -> Transition {
    let entries = selectable_entries(record);
    let len = entries.len();

    match action {
        Action::Up => Transition::Stay(PageUi {
            cursor: ui.cursor.saturating_sub(1),
            ..ui
        }),
        Action::Down => Transition::Stay(PageUi {
            cursor: if len == 0 { 0 } else { (ui.cursor + 1).min(len - 1) },
            ..ui
        }),
        Action::Select => match entries.get(ui.cursor) {
            Some(entry) => match entry.resolve() {
                Some(target) => Transition::Navigate(target),
                None => dangling(entry.title, entry.target.unwrap_or_default()),
            },
            None => Transition::Stay(ui),
        },
        Action::Next => follow(record.links.next, ui),
        Action::Previous => follow(record.links.previous, ui),
        _ => Transition::Stay(ui),
    }
}

/// Chapters: previous/next links, scrolling, outbound link.
fn update_chapter(record: &PageRecord, ui: PageUi, action: &Action, max_scroll: u16) -> Transition {
    match action {
        Action::Up => Transition::Stay(PageUi {
            scroll: ui.scroll.saturating_sub(1),
            ..ui
        }),
        Action::Down => Transition::Stay(PageUi {
            scroll: ui.scroll.saturating_add(1).min(max_scroll),
            ..ui
        }),
        Action::Next => follow(record.links.next, ui),
        Action::Previous => follow(record.links.previous, ui),
        Action::OpenLink => match record.source_url {
            Some(url) => Transition::Effect(Effect::OpenLink {
                url: url.to_string(),
            }),
            None => Transition::Notice("This chapter has no outbound link".to_string()),
        },
        _ => Transition::Stay(ui),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Contents entries that open a page, in reading order.
pub fn selectable_entries(record: &PageRecord) -> Vec<&TocEntry> {
    match &record.body {
        PageBody::Contents { entries } => flatten_toc(entries)
            .into_iter()
            .filter(|e| e.target.is_some())
            .collect(),
        _ => Vec::new(),
    }
}

/// Navigate along a link if it resolves; otherwise stay and say so.
fn follow(link: Option<Link>, ui: PageUi) -> Transition {
    match link {
        Some(link) => match link.resolve() {
            Some(target) => Transition::Navigate(target),
            None => dangling(link.label, link.target),
        },
        None => Transition::Stay(ui),
    }
}

fn dangling(label: &str, target: &str) -> Transition {
    warn!(label, target, "link points at a page outside the book");
    Transition::Notice(format!("\"{}\" leads to a missing page ({})", label, target))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PageLinks;
    use crate::config::MotionConfig;
    use crate::timer::TimerId;
    use crate::types::Direction;
    use std::time::Duration;

    fn step(page: Page, ui: PageUi, action: Action) -> Transition {
        update(page, ui, &action, &Catalog::builtin(), 10)
    }

    fn at(page: Page, action: Action) -> Transition {
        step(page, PageUi::default(), action)
    }

    // -- Global --

    #[test]
    fn quit_works_everywhere() {
        for page in Page::ALL {
            assert_eq!(at(page, Action::Quit), Transition::Quit);
        }
    }

    #[test]
    fn contents_jumps_to_the_index_from_anywhere_else() {
        for page in Page::ALL.into_iter().filter(|&p| p != Page::Index) {
            assert_eq!(at(page, Action::Contents), Transition::Navigate(Page::Index));
        }
        assert_eq!(at(Page::Index, Action::Contents), Transition::Stay(PageUi::default()));
    }

    #[test]
    fn page_without_content_only_quits_or_goes_home() {
        let empty = Catalog::new("empty", Vec::new());
        let ui = PageUi::default();
        assert_eq!(
            update(Page::Foreword, ui, &Action::Next, &empty, 0),
            Transition::Stay(ui)
        );
        assert_eq!(
            update(Page::Foreword, ui, &Action::Contents, &empty, 0),
            Transition::Navigate(Page::Index)
        );
    }

    // -- Cover --

    #[test]
    fn cover_opens_early_on_next_or_enter() {
        assert_eq!(at(Page::Cover, Action::Next), Transition::Navigate(Page::Index));
        assert_eq!(at(Page::Cover, Action::Select), Transition::Navigate(Page::Index));
    }

    #[test]
    fn cover_ignores_scrolling() {
        assert_eq!(at(Page::Cover, Action::Down), Transition::Stay(PageUi::default()));
    }

    // -- Index --

    #[test]
    fn index_cursor_skips_section_headings() {
        let catalog = Catalog::builtin();
        let record = catalog.record(Page::Index).unwrap();
        let titles: Vec<&str> = selectable_entries(record).iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec![
                "Foreword",
                "StrumSpace",
                "Miniature Shakespeare LLM",
                "MIPS Compiler",
                "More Projects",
                "Work Experience",
            ]
        );
    }

    #[test]
    fn index_cursor_clamps_at_both_ends() {
        assert_eq!(at(Page::Index, Action::Up), Transition::Stay(PageUi::default()));

        let last = PageUi { cursor: 5, scroll: 0 };
        assert_eq!(step(Page::Index, last, Action::Down), Transition::Stay(last));
    }

    #[test]
    fn index_select_opens_the_focused_entry() {
        assert_eq!(at(Page::Index, Action::Select), Transition::Navigate(Page::Foreword));

        let compiler = PageUi { cursor: 3, scroll: 0 };
        assert_eq!(
            step(Page::Index, compiler, Action::Select),
            Transition::Navigate(Page::ProjectCompiler)
        );

        let work = PageUi { cursor: 5, scroll: 0 };
        assert_eq!(
            step(Page::Index, work, Action::Select),
            Transition::Navigate(Page::WorkExperience)
        );
    }

    #[test]
    fn index_next_opens_chapter_one() {
        assert_eq!(at(Page::Index, Action::Next), Transition::Navigate(Page::Foreword));
    }

    // -- Chapters --

    #[test]
    fn chapters_follow_their_links() {
        assert_eq!(at(Page::Foreword, Action::Previous), Transition::Navigate(Page::Index));
        assert_eq!(
            at(Page::Foreword, Action::Next),
            Transition::Navigate(Page::ProjectStrumspace)
        );
        assert_eq!(
            at(Page::ProjectShakespeare, Action::Previous),
            Transition::Navigate(Page::ProjectStrumspace)
        );
        assert_eq!(
            at(Page::MoreProjects, Action::Previous),
            Transition::Navigate(Page::ProjectCompiler)
        );
        assert_eq!(at(Page::WorkExperience, Action::Next), Transition::Navigate(Page::Index));
    }

    #[test]
    fn chapter_scroll_stays_within_bounds() {
        assert_eq!(at(Page::Foreword, Action::Up), Transition::Stay(PageUi::default()));

        let bottom = PageUi { cursor: 0, scroll: 10 };
        assert_eq!(step(Page::Foreword, bottom, Action::Down), Transition::Stay(bottom));

        assert_eq!(
            at(Page::Foreword, Action::Down),
            Transition::Stay(PageUi { cursor: 0, scroll: 1 })
        );
    }

    #[test]
    fn project_open_link_requests_the_effect() {
        assert_eq!(
            at(Page::ProjectStrumspace, Action::OpenLink),
            Transition::Effect(Effect::OpenLink {
                url: "https://github.com/LuhemRevorg/StrumSpace".to_string(),
            })
        );
    }

    #[test]
    fn open_link_without_a_url_is_a_notice() {
        assert!(matches!(at(Page::Foreword, Action::OpenLink), Transition::Notice(_)));
    }

    #[test]
    fn dangling_link_is_not_followed() {
        let mut catalog = Catalog::builtin();
        let mut records = catalog.records().to_vec();
        for record in records.iter_mut().filter(|r| r.page == Page::Foreword) {
            record.links = PageLinks {
                previous: Some(Link::new("Index", "index")),
                next: Some(Link::new("Next Chapter", "project-aurora")),
            };
        }
        catalog = Catalog::new(catalog.title, records);

        let result = update(Page::Foreword, PageUi::default(), &Action::Next, &catalog, 0);
        match result {
            Transition::Notice(message) => assert!(message.contains("project-aurora")),
            other => panic!("expected a notice, got {:?}", other),
        }
    }

    // -- Cover auto-advance --

    fn on_cover() -> (App, AutoAdvance) {
        let app = App::new(Page::Cover, Catalog::builtin(), MotionConfig::default());
        let mut auto = AutoAdvance::new(Duration::from_secs(60));
        auto.sync(app.page(), |_| {});
        (app, auto)
    }

    #[test]
    fn cover_tick_opens_the_index_reading_forward() {
        let (mut app, mut auto) = on_cover();
        handle_background_event(&mut app, &mut auto, AppEvent::CoverElapsed(TimerId(0)));

        assert_eq!(app.page(), Page::Index);
        assert_eq!(app.navigator.direction(), Direction::Forward);
        assert!(!auto.is_armed());
    }

    #[test]
    fn cover_tick_after_leaving_the_cover_is_ignored() {
        let (mut app, mut auto) = on_cover();
        app.navigate(Page::Foreword);
        auto.sync(app.page(), |_| {});

        handle_background_event(&mut app, &mut auto, AppEvent::CoverElapsed(TimerId(0)));
        assert_eq!(app.page(), Page::Foreword);
    }

    #[test]
    fn cover_tick_racing_a_navigation_is_ignored() {
        // The reader left before the timer was cancelled.
        let (mut app, mut auto) = on_cover();
        app.navigate(Page::WorkExperience);

        handle_background_event(&mut app, &mut auto, AppEvent::CoverElapsed(TimerId(0)));
        assert_eq!(app.page(), Page::WorkExperience);
    }

    #[test]
    fn repeated_cover_tick_turns_only_once() {
        let (mut app, mut auto) = on_cover();
        handle_background_event(&mut app, &mut auto, AppEvent::CoverElapsed(TimerId(0)));
        assert_eq!(app.page(), Page::Index);

        // Back on the cover without a new timer: the old tick is spent.
        app.navigate(Page::Cover);
        handle_background_event(&mut app, &mut auto, AppEvent::CoverElapsed(TimerId(0)));
        assert_eq!(app.page(), Page::Cover);
    }

    #[test]
    fn resize_changes_nothing() {
        let (mut app, mut auto) = on_cover();
        handle_background_event(&mut app, &mut auto, AppEvent::Resize);
        assert_eq!(app.page(), Page::Cover);
        assert!(auto.is_armed());
    }
}
