//! Low-level truecolor text and divider output.
//!
//! These helpers turn a text fragment plus a color/layout intent into writes
//! through the [`Terminal`] boundary. They hold no state; anything
//! width-dependent is recomputed per call.

use std::io;

use crate::tui::terminal::Terminal;

/// A 24-bit color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn foreground_sequence(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    fn background_sequence(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Reset-all escape appended when a style asks for reset-after-output.
const RESET_SEQUENCE: &str = "\x1b[0m";

/// Style and layout intent for one text fragment.
///
/// Single-color mode leaves one of `fg`/`bg` unset; dual-color mode sets
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub padding_left: usize,
    pub terminate_line: bool,
    pub flush_after: bool,
    pub reset_afterward: bool,
}

impl TextStyle {
    /// Foreground-only style; no padding, terminator, or flush.
    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            padding_left: 0,
            terminate_line: false,
            flush_after: false,
            reset_afterward: true,
        }
    }

    /// Background-only style; no padding, terminator, or flush.
    pub fn bg(color: Rgb) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            padding_left: 0,
            terminate_line: false,
            flush_after: false,
            reset_afterward: true,
        }
    }

    pub fn on(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn padded(mut self, padding_left: usize) -> Self {
        self.padding_left = padding_left;
        self
    }

    pub fn end_line(mut self) -> Self {
        self.terminate_line = true;
        self
    }

    pub fn flushed(mut self) -> Self {
        self.flush_after = true;
        self
    }

    /// Leave the color active after the fragment (no reset escape).
    pub fn keep_color(mut self) -> Self {
        self.reset_afterward = false;
        self
    }
}

/// Write one styled fragment through the terminal.
pub fn write_styled(term: &mut dyn Terminal, text: &str, style: &TextStyle) -> io::Result<()> {
    let color = term.supports_color();
    let mut out = String::with_capacity(text.len() + style.padding_left + 24);
    for _ in 0..style.padding_left {
        out.push(' ');
    }
    if color {
        if let Some(fg) = style.fg {
            out.push_str(&fg.foreground_sequence());
        }
        if let Some(bg) = style.bg {
            out.push_str(&bg.background_sequence());
        }
    }
    out.push_str(text);
    if color && style.reset_afterward {
        out.push_str(RESET_SEQUENCE);
    }
    if style.terminate_line {
        out.push('\n');
    }
    term.write_text(&out)?;
    if style.flush_after {
        term.flush()?;
    }
    Ok(())
}

/// Draw a full-width divider line of `symbol`.
///
/// The terminal width is re-read on every call so a resize between renders
/// changes the divider length. Always terminates the line and flushes.
pub fn write_divider(
    term: &mut dyn Terminal,
    symbol: char,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    padding_left: usize,
) -> io::Result<()> {
    let width = term.width() as usize;
    let color = term.supports_color();
    let mut out = String::with_capacity(width + padding_left + 24);
    for _ in 0..padding_left {
        out.push(' ');
    }
    if color {
        if let Some(fg) = fg {
            out.push_str(&fg.foreground_sequence());
        }
        if let Some(bg) = bg {
            out.push_str(&bg.background_sequence());
        }
    }
    for _ in 0..width {
        out.push(symbol);
    }
    out.push('\n');
    if color {
        out.push_str(RESET_SEQUENCE);
    }
    term.write_text(&out)?;
    term.flush()
}
