//! Console capability boundary consumed by the renderer and the pager.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{Clear, ClearType};
use crossterm::tty::IsTty;
use crossterm::QueueableCommand;

use crate::error::SetupError;
use crate::tui::settings;

/// Abstract console surface everything renders through.
///
/// Width is re-queried on every layout computation because the window can be
/// resized between renders; implementations must not cache it.
pub trait Terminal {
    /// Visible column count.
    fn width(&mut self) -> u16;

    /// Whether styled output should carry color escape sequences.
    fn supports_color(&self) -> bool {
        true
    }

    /// Clear the screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()>;

    /// Current cursor row, used to hold a fixed line during the startup
    /// countdown.
    fn cursor_row(&mut self) -> io::Result<u16>;

    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Production terminal over stdout via crossterm.
pub struct StdoutTerminal {
    out: io::Stdout,
    color: bool,
}

impl StdoutTerminal {
    /// Probe stdout and build the production terminal.
    ///
    /// Fails when stdout is not a TTY; the caller reports that as the single
    /// fatal startup error and must not proceed to page rendering.
    pub fn new(color: bool) -> Result<Self, SetupError> {
        let out = io::stdout();
        if !out.is_tty() {
            return Err(SetupError::NotATty);
        }
        Ok(Self { out, color })
    }
}

impl Terminal for StdoutTerminal {
    fn width(&mut self) -> u16 {
        crossterm::terminal::size()
            .map(|(w, _)| w)
            .unwrap_or(settings::FALLBACK_COLUMNS)
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        self.out.flush()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(Show)?;
        } else {
            self.out.queue(Hide)?;
        }
        self.out.flush()
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.out.queue(MoveTo(col, row))?;
        Ok(())
    }

    fn cursor_row(&mut self) -> io::Result<u16> {
        crossterm::cursor::position().map(|(_, row)| row)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
