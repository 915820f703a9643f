//! Shared test doubles for terminal-facing tests.

use std::io;

use crate::tui::terminal::Terminal;

/// In-memory terminal that records every write and control call.
#[derive(Debug)]
pub struct CaptureTerminal {
    pub width: u16,
    pub color: bool,
    pub output: String,
    pub clears: usize,
    pub flushes: usize,
    pub cursor_visible: bool,
    pub moves: Vec<(u16, u16)>,
}

impl CaptureTerminal {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            color: true,
            output: String::new(),
            clears: 0,
            flushes: 0,
            cursor_visible: true,
            moves: Vec::new(),
        }
    }

    /// Forget everything recorded so far; the width and color mode stay.
    pub fn reset(&mut self) {
        self.output.clear();
        self.clears = 0;
        self.flushes = 0;
        self.moves.clear();
    }
}

impl Terminal for CaptureTerminal {
    fn width(&mut self) -> u16 {
        self.width
    }

    fn supports_color(&self) -> bool {
        self.color
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn move_to(&mut self, col: u16, row: u16) -> io::Result<()> {
        self.moves.push((col, row));
        Ok(())
    }

    fn cursor_row(&mut self) -> io::Result<u16> {
        Ok(0)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
