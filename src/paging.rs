//! Navigation state machine over the fixed page registry.
//!
//! One manager instance drives the whole session. It owns the registry
//! exclusively, tracks the current page number, and orchestrates the
//! clear-then-redraw sequence on every transition. Single-threaded by
//! design: a transition's clear/redraw is not atomic, so any future
//! concurrent input source must serialize through one mutation point.

use std::io;
use std::ptr;

use crate::pages::{Page, PageRegistry, RenderContext, Section, FIRST_PAGE, MAX_PAGES};
use crate::tui::terminal::Terminal;

/// Tracks the current page and redraws through the terminal on navigation.
#[derive(Debug)]
pub struct PagingManager {
    registry: PageRegistry,
    current: u8,
}

impl PagingManager {
    /// Build the manager and render the first page once.
    pub fn new(registry: PageRegistry, term: &mut dyn Terminal) -> io::Result<Self> {
        let manager = Self {
            registry,
            current: FIRST_PAGE,
        };
        manager.redraw(term)?;
        Ok(manager)
    }

    /// Current page number, always in `FIRST_PAGE..=MAX_PAGES`.
    pub fn current_number(&self) -> u8 {
        self.current
    }

    /// The page record the manager currently holds.
    pub fn current_page(&self) -> &Page {
        self.registry.page(self.current)
    }

    /// Identity comparison against the current page record.
    ///
    /// True only for the exact record the manager holds, never for a page
    /// that merely shares the number. Callers use this to skip redundant
    /// redraw work after a [`Self::go_to`] no-op.
    pub fn is_current_page(&self, candidate: &Page) -> bool {
        ptr::eq(candidate, self.current_page())
    }

    /// Advance to the next page, wrapping from the last back to the first,
    /// and redraw. Always succeeds.
    pub fn next(&mut self, term: &mut dyn Terminal) -> io::Result<u8> {
        self.current = self.current % MAX_PAGES + 1;
        self.redraw(term)?;
        Ok(self.current)
    }

    /// Step back to the previous page, wrapping from the first to the last,
    /// and redraw. Always succeeds.
    pub fn previous(&mut self, term: &mut dyn Terminal) -> io::Result<u8> {
        self.current = if self.current == FIRST_PAGE {
            MAX_PAGES
        } else {
            self.current - 1
        };
        self.redraw(term)?;
        Ok(self.current)
    }

    /// Jump to page `target` and redraw.
    ///
    /// Out-of-range and redundant targets are silent no-ops returning the
    /// unchanged current number with zero terminal writes. That is the
    /// documented mechanism for avoiding redundant redraws, not an error.
    pub fn go_to(&mut self, target: u8, term: &mut dyn Terminal) -> io::Result<u8> {
        if !(FIRST_PAGE..=MAX_PAGES).contains(&target) || target == self.current {
            tracing::debug!(
                requested = target,
                current = self.current,
                "navigation target ignored"
            );
            return Ok(self.current);
        }
        self.current = target;
        self.redraw(term)?;
        Ok(self.current)
    }

    /// Unconditionally redraw page `number` in full without touching the
    /// current-page state. Absent sections are skipped.
    pub fn show_page(&self, number: u8, term: &mut dyn Terminal) -> io::Result<()> {
        let Some(page) = self.registry.get(number) else {
            debug_assert!(false, "show_page for unknown page {number}");
            return Ok(());
        };
        Self::render_full(page, term)
    }

    /// Render just the title of page `number`.
    pub fn show_title(&self, number: u8, term: &mut dyn Terminal) -> io::Result<()> {
        self.show_section(number, Section::Title, term)
    }

    /// Render just the header of page `number`.
    ///
    /// The caller is expected to have checked presence via
    /// [`PageRegistry::has_section`]; an unbound section is a programming
    /// error that asserts in debug builds.
    pub fn show_header(&self, number: u8, term: &mut dyn Terminal) -> io::Result<()> {
        self.show_section(number, Section::Header, term)
    }

    /// Render just the body of page `number`. Same presence contract as
    /// [`Self::show_header`].
    pub fn show_body(&self, number: u8, term: &mut dyn Terminal) -> io::Result<()> {
        self.show_section(number, Section::Body, term)
    }

    /// Render just the footer of page `number`. Same presence contract as
    /// [`Self::show_header`].
    pub fn show_footer(&self, number: u8, term: &mut dyn Terminal) -> io::Result<()> {
        self.show_section(number, Section::Footer, term)
    }

    /// Presence query forwarded from the owned registry.
    pub fn has_section(&self, number: u8, section: Section) -> bool {
        self.registry.has_section(number, section)
    }

    fn show_section(&self, number: u8, section: Section, term: &mut dyn Terminal) -> io::Result<()> {
        let Some(page) = self.registry.get(number) else {
            debug_assert!(false, "section show for unknown page {number}");
            return Ok(());
        };
        let Some(renderer) = page.section(section) else {
            debug_assert!(false, "section show for unbound {section:?} on page {number}");
            return Ok(());
        };
        let ctx = RenderContext::for_page(number);
        renderer.render(term, &ctx)
    }

    /// Clear, then title, then each present section of the current page.
    fn redraw(&self, term: &mut dyn Terminal) -> io::Result<()> {
        Self::render_full(self.current_page(), term)
    }

    fn render_full(page: &Page, term: &mut dyn Terminal) -> io::Result<()> {
        let ctx = RenderContext::for_page(page.number());
        term.clear()?;
        for section in [Section::Title, Section::Header, Section::Body, Section::Footer] {
            if let Some(renderer) = page.section(section) {
                renderer.render(term, &ctx)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::CaptureTerminal;
    use crate::tui::settings;

    fn manager(term: &mut CaptureTerminal) -> PagingManager {
        let manager = PagingManager::new(PageRegistry::standard(), term).unwrap();
        term.reset();
        manager
    }

    fn title_renders(output: &str) -> usize {
        output.matches(settings::APP_NAME_PRIMARY).count()
    }

    #[test]
    fn construction_renders_the_first_page_once() {
        let mut term = CaptureTerminal::new(80);
        let manager = PagingManager::new(PageRegistry::standard(), &mut term).unwrap();
        assert_eq!(manager.current_number(), FIRST_PAGE);
        assert_eq!(term.clears, 1);
        assert_eq!(title_renders(&term.output), 1);
        assert!(term.output.contains("View: Status"));
    }

    #[test]
    fn go_to_sets_current_for_every_valid_target() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        for target in (FIRST_PAGE..=MAX_PAGES).rev() {
            assert_eq!(manager.go_to(target, &mut term).unwrap(), target);
            assert_eq!(manager.current_number(), target);
        }
    }

    #[test]
    fn redundant_go_to_performs_zero_terminal_writes() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        assert_eq!(manager.go_to(FIRST_PAGE, &mut term).unwrap(), FIRST_PAGE);
        assert_eq!(term.clears, 0);
        assert_eq!(term.flushes, 0);
        assert!(term.output.is_empty());
    }

    #[test]
    fn out_of_range_targets_are_no_ops() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        manager.go_to(3, &mut term).unwrap();
        term.reset();
        assert_eq!(manager.go_to(0, &mut term).unwrap(), 3);
        assert_eq!(manager.go_to(MAX_PAGES + 1, &mut term).unwrap(), 3);
        assert_eq!(manager.current_number(), 3);
        assert!(term.output.is_empty());
    }

    #[test]
    fn next_cycles_back_to_the_start_after_max_pages_steps() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        for start in FIRST_PAGE..=MAX_PAGES {
            manager.go_to(start, &mut term).unwrap();
            for _ in 0..MAX_PAGES {
                manager.next(&mut term).unwrap();
            }
            assert_eq!(manager.current_number(), start);
        }
    }

    #[test]
    fn previous_inverts_next_from_any_page() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        for start in FIRST_PAGE..=MAX_PAGES {
            manager.go_to(start, &mut term).unwrap();
            manager.next(&mut term).unwrap();
            manager.previous(&mut term).unwrap();
            assert_eq!(manager.current_number(), start);
        }
    }

    #[test]
    fn wrapping_covers_both_edges() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        manager.go_to(MAX_PAGES, &mut term).unwrap();
        assert_eq!(manager.next(&mut term).unwrap(), FIRST_PAGE);
        assert_eq!(manager.previous(&mut term).unwrap(), MAX_PAGES);
    }

    #[test]
    fn is_current_page_is_an_identity_check() {
        let mut term = CaptureTerminal::new(80);
        let manager = manager(&mut term);
        let current = manager.current_page();
        assert!(manager.is_current_page(current));

        // A different registry's page 1 is equal by number but is not the
        // record the manager holds.
        let other = PageRegistry::standard();
        let impostor = other.get(FIRST_PAGE).unwrap();
        assert_eq!(impostor.number(), current.number());
        assert!(!manager.is_current_page(impostor));
    }

    #[test]
    fn transition_clears_once_and_renders_title_once() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        manager.next(&mut term).unwrap();
        assert_eq!(term.clears, 1);
        assert_eq!(title_renders(&term.output), 1);
        assert!(term.output.contains("View: Incoming"));
    }

    #[test]
    fn title_only_page_renders_no_header_fragments() {
        let mut term = CaptureTerminal::new(80);
        let mut manager = manager(&mut term);
        manager.go_to(5, &mut term).unwrap();
        assert_eq!(title_renders(&term.output), 1);
        assert!(!term.output.contains("View:"));
    }

    #[test]
    fn show_page_does_not_mutate_current() {
        let mut term = CaptureTerminal::new(80);
        let manager = manager(&mut term);
        manager.show_page(4, &mut term).unwrap();
        assert_eq!(manager.current_number(), FIRST_PAGE);
        assert!(term.output.contains("View: Logging"));
        assert_eq!(term.clears, 1);
    }

    #[test]
    fn single_section_shows_render_only_that_section() {
        let mut term = CaptureTerminal::new(80);
        let manager = manager(&mut term);
        manager.show_header(2, &mut term).unwrap();
        assert_eq!(term.clears, 0);
        assert_eq!(title_renders(&term.output), 0);
        assert!(term.output.contains("View: Incoming"));

        term.reset();
        manager.show_title(3, &mut term).unwrap();
        assert_eq!(title_renders(&term.output), 1);
        assert!(!term.output.contains("View:"));
    }

    #[test]
    #[should_panic(expected = "unbound")]
    fn showing_an_unbound_section_asserts_in_debug_builds() {
        let mut term = CaptureTerminal::new(80);
        let manager = manager(&mut term);
        // Page 5 binds no body.
        let _ = manager.show_body(5, &mut term);
    }
}
