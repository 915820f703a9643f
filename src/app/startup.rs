//! Privilege warnings and the switch-to-status countdown.

use std::io;
use std::time::Duration;

use proxilock::tui::renderer::{write_styled, TextStyle};
use proxilock::tui::settings;
use proxilock::tui::terminal::Terminal;

/// Fixed warning lines shown before the countdown.
pub(crate) const PRIVILEGE_WARNINGS: [&str; 2] = [
    "Do not run this client from an elevated (administrator) shell.",
    "Lock control needs only normal user privileges.",
];

pub(crate) fn show_privilege_warnings(term: &mut dyn Terminal) -> io::Result<()> {
    for line in PRIVILEGE_WARNINGS {
        write_styled(
            term,
            line,
            &TextStyle::fg(settings::COLOR_WARNING).end_line(),
        )?;
    }
    term.flush()
}

fn countdown_line(remaining: u8) -> String {
    format!("Switching to status page in {remaining} seconds...")
}

/// Blocking, user-visible pause before the first page.
///
/// Overwrites the remaining-seconds number in place on a fixed row with the
/// cursor hidden, restoring it afterwards. Cancellable only by process
/// termination.
pub(crate) fn countdown(term: &mut dyn Terminal, secs: u8) -> io::Result<()> {
    countdown_with_tick(term, secs, Duration::from_secs(1))
}

pub(crate) fn countdown_with_tick(
    term: &mut dyn Terminal,
    secs: u8,
    tick: Duration,
) -> io::Result<()> {
    term.set_cursor_visible(false)?;
    let row = term.cursor_row()?;
    let ticks = (1..=secs).rev().try_for_each(|remaining| {
        term.move_to(0, row)?;
        write_styled(
            term,
            &countdown_line(remaining),
            &TextStyle::fg(settings::COLOR_COUNTDOWN).flushed(),
        )?;
        std::thread::sleep(tick);
        Ok(())
    });
    // Restore the cursor even when a tick failed mid-way.
    term.set_cursor_visible(true)?;
    ticks
}
