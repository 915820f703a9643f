//! Shared page header: timestamp on the left, the navigation indicator
//! centered, and the page label right-aligned.
//!
//! The layout math is a pure function over the terminal width so it can be
//! tested without a terminal. Paddings clamp to zero on consoles narrower
//! than the combined content.

use std::io;

use crate::pages::{PageKind, RenderContext, SectionRenderer, WallClock, FIRST_PAGE, MAX_PAGES};
use crate::tui::renderer::{write_styled, TextStyle};
use crate::tui::settings;
use crate::tui::terminal::Terminal;
use crate::tui::text::{centered_padding_after, right_aligned_padding, visible_width};

/// Header section parameterized by the page it labels.
pub struct PageHeader {
    kind: PageKind,
}

impl PageHeader {
    pub fn new(kind: PageKind) -> Self {
        Self { kind }
    }
}

/// Computed fragments and paddings for one header render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub date: String,
    pub time: String,
    pub nav: String,
    pub nav_padding: usize,
    pub label: String,
    pub label_padding: usize,
}

/// Compute every header fragment and padding for the given width.
///
/// The navigation indicator reads `"< N >"` on interior pages, `"N >"` on
/// the first page, and `"< N"` on the last.
pub fn layout_header(
    clock: &WallClock,
    page_number: u8,
    label: &str,
    width: usize,
) -> HeaderLayout {
    let date = format!("{}.{}.{}", clock.year, clock.month, clock.day);
    let time = format!(
        "{}:{}:{}:{}",
        clock.hour, clock.minute, clock.second, clock.millisecond
    );
    let prefix_len =
        visible_width(&date) + visible_width(settings::HEADER_SEPARATOR) + visible_width(&time);

    let mut nav = String::new();
    if page_number > FIRST_PAGE {
        nav.push_str("< ");
    }
    nav.push_str(&page_number.to_string());
    if page_number < MAX_PAGES {
        nav.push_str(" >");
    }

    let nav_padding = centered_padding_after(width, visible_width(&nav), prefix_len);

    let label = format!("{}{}", settings::PAGE_LABEL_PREFIX, label);
    let running_offset = prefix_len + nav_padding + visible_width(&nav);
    let label_padding = right_aligned_padding(width, visible_width(&label), running_offset);

    HeaderLayout {
        date,
        time,
        nav,
        nav_padding,
        label,
        label_padding,
    }
}

impl SectionRenderer for PageHeader {
    fn render(&self, term: &mut dyn Terminal, ctx: &RenderContext) -> io::Result<()> {
        let layout = layout_header(
            &ctx.clock,
            ctx.page_number,
            self.kind.label(),
            term.width() as usize,
        );

        write_styled(
            term,
            &layout.date,
            &TextStyle::fg(settings::COLOR_HEADER_DATE).flushed(),
        )?;
        write_styled(
            term,
            settings::HEADER_SEPARATOR,
            &TextStyle::fg(settings::COLOR_HEADER_SEPARATOR),
        )?;
        write_styled(
            term,
            &layout.time,
            &TextStyle::fg(settings::COLOR_HEADER_TIME),
        )?;
        write_styled(
            term,
            &layout.nav,
            &TextStyle::fg(settings::COLOR_NAV_INDICATOR)
                .padded(layout.nav_padding)
                .flushed(),
        )?;
        write_styled(
            term,
            &layout.label,
            &TextStyle::fg(settings::COLOR_PAGE_LABEL)
                .padded(layout.label_padding)
                .end_line()
                .flushed(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::CaptureTerminal;

    fn fixed_clock() -> WallClock {
        WallClock {
            year: 2024,
            month: 7,
            day: 5,
            hour: 9,
            minute: 4,
            second: 30,
            millisecond: 17,
        }
    }

    #[test]
    fn timestamp_fields_are_unpadded() {
        let layout = layout_header(&fixed_clock(), 3, "Outgoing", 80);
        assert_eq!(layout.date, "2024.7.5");
        assert_eq!(layout.time, "9:4:30:17");
    }

    #[test]
    fn first_page_indicator_has_no_back_arrow() {
        let layout = layout_header(&fixed_clock(), 1, "Status", 80);
        assert_eq!(layout.nav, "1 >");
    }

    #[test]
    fn last_page_indicator_has_no_forward_arrow() {
        let layout = layout_header(&fixed_clock(), 5, "Error", 80);
        assert_eq!(layout.nav, "< 5");
    }

    #[test]
    fn interior_page_indicator_has_both_arrows() {
        let layout = layout_header(&fixed_clock(), 3, "Outgoing", 80);
        assert_eq!(layout.nav, "< 3 >");
    }

    #[test]
    fn nav_padding_centers_relative_to_the_datetime_prefix() {
        let clock = fixed_clock();
        let layout = layout_header(&clock, 3, "Outgoing", 80);
        // prefix = 8 (date) + 4 (separator) + 9 (time) = 21 columns;
        // centering "< 3 >" in 80 gives 37, minus the prefix = 16.
        assert_eq!(layout.nav_padding, 16);
    }

    #[test]
    fn label_is_right_aligned_to_the_console_edge() {
        let layout = layout_header(&fixed_clock(), 3, "Outgoing", 80);
        let used = 21 + layout.nav_padding + visible_width(&layout.nav);
        assert_eq!(
            used + layout.label_padding + visible_width(&layout.label),
            80
        );
        assert_eq!(layout.label, "View: Outgoing");
    }

    #[test]
    fn narrow_console_clamps_both_paddings_to_zero() {
        let layout = layout_header(&fixed_clock(), 3, "Outgoing", 20);
        assert_eq!(layout.nav_padding, 0);
        assert_eq!(layout.label_padding, 0);
    }

    #[test]
    fn rendered_header_contains_every_fragment() {
        let mut term = CaptureTerminal::new(80);
        let ctx = RenderContext {
            page_number: 2,
            clock: fixed_clock(),
        };
        PageHeader::new(PageKind::Incoming)
            .render(&mut term, &ctx)
            .unwrap();
        assert!(term.output.contains("2024.7.5"));
        assert!(term.output.contains(" -- "));
        assert!(term.output.contains("< 2 >"));
        assert!(term.output.contains("View: Incoming"));
        assert!(term.output.ends_with('\n'));
    }
}
