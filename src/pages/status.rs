//! Status page sections: the command hints body and the exit-notice footer.
//!
//! The status page is the landing view, so its body doubles as the help
//! surface for the fixed command vocabulary.

use std::io;

use crate::commands;
use crate::pages::{RenderContext, SectionRenderer};
use crate::tui::renderer::{write_styled, TextStyle};
use crate::tui::settings;
use crate::tui::terminal::Terminal;
use crate::tui::text::visible_width;

/// Column where command descriptions start, past the longest command name.
const DESCRIPTION_COLUMN: usize = 12;

pub struct StatusBody;

impl SectionRenderer for StatusBody {
    fn render(&self, term: &mut dyn Terminal, _ctx: &RenderContext) -> io::Result<()> {
        write_styled(
            term,
            "Commands:",
            &TextStyle::fg(settings::COLOR_BODY_TEXT).end_line(),
        )?;
        for command in &commands::COMMANDS {
            write_styled(
                term,
                command.name,
                &TextStyle::fg(settings::COLOR_COMMAND_NAME)
                    .padded(visible_width(settings::INDENT_1)),
            )?;
            let gap = DESCRIPTION_COLUMN.saturating_sub(visible_width(command.name));
            write_styled(
                term,
                command.description,
                &TextStyle::fg(settings::COLOR_BODY_TEXT)
                    .padded(gap)
                    .end_line(),
            )?;
        }
        term.flush()
    }
}

pub struct StatusFooter;

impl SectionRenderer for StatusFooter {
    fn render(&self, term: &mut dyn Terminal, _ctx: &RenderContext) -> io::Result<()> {
        write_styled(
            term,
            "Pages keep their place while you move around. Type 'exit' to leave.",
            &TextStyle::fg(settings::COLOR_FOOTER_TEXT)
                .end_line()
                .flushed(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::CaptureTerminal;

    #[test]
    fn body_lists_the_whole_command_vocabulary() {
        let mut term = CaptureTerminal::new(80);
        StatusBody
            .render(&mut term, &RenderContext::for_page(1))
            .unwrap();
        for command in &commands::COMMANDS {
            assert!(term.output.contains(command.name));
            assert!(term.output.contains(command.description));
        }
    }

    #[test]
    fn footer_carries_the_exit_notice() {
        let mut term = CaptureTerminal::new(80);
        StatusFooter
            .render(&mut term, &RenderContext::for_page(1))
            .unwrap();
        assert!(term.output.contains("exit"));
        assert!(term.output.ends_with('\n'));
    }
}
