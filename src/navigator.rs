//! Page navigator: the book's only state machine.
//!
//! Owns `{current, last_direction}`. Any page may go to any other page;
//! the navigator never refuses a move. Direction is always derived from
//! the page order, never supplied by the caller.

use tracing::debug;

use crate::types::{Direction, Page, PageOrder};

/// What the renderer receives after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    /// Page that was current before the move.
    pub from: Page,
    /// Page that is current now.
    pub page: Page,
    /// How the move classified against the page order.
    pub direction: Direction,
}

/// Single owned navigator instance for the lifetime of the reader.
#[derive(Debug, Clone)]
pub struct Navigator {
    order: PageOrder,
    current: Page,
    last_direction: Direction,
}

impl Navigator {
    /// Start on `start` with the canonical order.
    pub fn new(start: Page) -> Self {
        Navigator::with_order(start, PageOrder::canonical())
    }

    pub fn with_order(start: Page, order: PageOrder) -> Self {
        Navigator {
            order,
            current: start,
            last_direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.last_direction
    }

    pub fn order(&self) -> &PageOrder {
        &self.order
    }

    /// Move to `target`, classifying the move against the page order.
    ///
    /// Never fails. A target outside the order classifies as backward;
    /// whether its content exists is the renderer's concern.
    pub fn navigate(&mut self, target: Page) -> Navigation {
        let from = self.current;
        let direction = Direction::between(&self.order, from, target);

        self.last_direction = direction;
        self.current = target;

        debug!(%from, to = %target, %direction, "navigate");

        Navigation {
            from,
            page: target,
            direction,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_given_page_reading_forward() {
        let nav = Navigator::new(Page::Cover);
        assert_eq!(nav.current(), Page::Cover);
        assert_eq!(nav.direction(), Direction::Forward);
    }

    #[test]
    fn index_to_foreword_is_forward() {
        let mut nav = Navigator::new(Page::Index);
        let result = nav.navigate(Page::Foreword);
        assert_eq!(result.direction, Direction::Forward);
        assert_eq!(nav.current(), Page::Foreword);
    }

    #[test]
    fn foreword_to_index_is_backward() {
        let mut nav = Navigator::new(Page::Foreword);
        let result = nav.navigate(Page::Index);
        assert_eq!(result.direction, Direction::Backward);
        assert_eq!(nav.current(), Page::Index);
    }

    #[test]
    fn skipping_ahead_from_index_to_work_experience_is_forward() {
        let mut nav = Navigator::new(Page::Index);
        let result = nav.navigate(Page::WorkExperience);
        assert_eq!(result.direction, Direction::Forward);
        assert_eq!(nav.current(), Page::WorkExperience);
    }

    #[test]
    fn compiler_back_to_strumspace_is_backward() {
        let mut nav = Navigator::new(Page::ProjectCompiler);
        assert_eq!(nav.navigate(Page::ProjectStrumspace).direction, Direction::Backward);
    }

    #[test]
    fn self_navigation_is_backward_and_keeps_the_page() {
        for page in Page::ALL {
            let mut nav = Navigator::new(page);
            let result = nav.navigate(page);
            assert_eq!(result.direction, Direction::Backward);
            assert_eq!(nav.current(), page);
        }
    }

    #[test]
    fn current_always_becomes_the_target() {
        let mut nav = Navigator::new(Page::Cover);
        let walk = [
            Page::WorkExperience,
            Page::Foreword,
            Page::Foreword,
            Page::Cover,
            Page::ProjectShakespeare,
            Page::Index,
        ];
        for target in walk {
            let result = nav.navigate(target);
            assert_eq!(nav.current(), target);
            assert_eq!(result.page, target);
            assert_eq!(nav.direction(), result.direction);
        }
    }

    #[test]
    fn navigation_reports_where_it_came_from() {
        let mut nav = Navigator::new(Page::Index);
        let result = nav.navigate(Page::MoreProjects);
        assert_eq!(result.from, Page::Index);
    }

    #[test]
    fn target_outside_a_custom_order_is_backward_but_still_taken() {
        let order = PageOrder::new([Page::Cover, Page::Index, Page::Foreword]);
        let mut nav = Navigator::with_order(Page::Cover, order);
        let result = nav.navigate(Page::WorkExperience);
        assert_eq!(result.direction, Direction::Backward);
        assert_eq!(nav.current(), Page::WorkExperience);
    }
}
