//! Shared title bar: the centered two-tone application name over a
//! full-width divider. Identical for every page, and always rendered before
//! any other section so the views share one visual frame.

use std::io;

use crate::pages::{RenderContext, SectionRenderer};
use crate::tui::renderer::{write_divider, write_styled, TextStyle};
use crate::tui::settings;
use crate::tui::terminal::Terminal;
use crate::tui::text::centered_padding;

pub struct TitleBar;

impl SectionRenderer for TitleBar {
    fn render(&self, term: &mut dyn Terminal, _ctx: &RenderContext) -> io::Result<()> {
        // One column of content: pad + name + pad == width, so
        // pad = (width - name_len) / 2 with floor division.
        let width = term.width() as usize;
        let pad = centered_padding(width, settings::APP_NAME_LEN);

        write_styled(
            term,
            settings::APP_NAME_PRIMARY,
            &TextStyle::fg(settings::COLOR_TITLE_PRIMARY).padded(pad),
        )?;
        write_styled(
            term,
            settings::APP_NAME_ACCENT,
            &TextStyle::fg(settings::COLOR_TITLE_ACCENT)
                .end_line()
                .flushed(),
        )?;
        write_divider(
            term,
            settings::DIVIDER_SYMBOL,
            Some(settings::COLOR_TITLE_DIVIDER),
            None,
            0,
        )
    }
}
