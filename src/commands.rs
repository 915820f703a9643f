//! Console command vocabulary, parsing, and dispatch.
//!
//! The vocabulary is fixed: `connect`, `status`, `disconnect`, `exit`.
//! Unrecognized input is silently dropped (defined behavior, logged at
//! debug level only).

use std::io;

use crate::link::LinkControl;
use crate::pages::FIRST_PAGE;
use crate::paging::PagingManager;
use crate::tui::terminal::Terminal;

/// Static command metadata used by parsing and the status page's hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// The recognized command vocabulary, in display order.
pub const COMMANDS: [CommandSpec; 4] = [
    CommandSpec {
        name: "connect",
        description: "Establish the wireless link.",
    },
    CommandSpec {
        name: "status",
        description: "Show the status page.",
    },
    CommandSpec {
        name: "disconnect",
        description: "Drop the wireless link.",
    },
    CommandSpec {
        name: "exit",
        description: "Leave the client.",
    },
];

/// Parsed actions consumed by the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Connect,
    Status,
    Disconnect,
    Exit,
}

/// Parse one line of user input against the fixed vocabulary.
///
/// Matching is case-insensitive on the trimmed line; anything else yields
/// `None`.
pub fn parse_command(input: &str) -> Option<CommandAction> {
    match input.trim().to_ascii_lowercase().as_str() {
        "connect" => Some(CommandAction::Connect),
        "status" => Some(CommandAction::Status),
        "disconnect" => Some(CommandAction::Disconnect),
        "exit" => Some(CommandAction::Exit),
        _ => None,
    }
}

/// Routes parsed commands to the paging manager and the link boundary.
pub struct CommandDispatcher<'a> {
    link: &'a mut dyn LinkControl,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(link: &'a mut dyn LinkControl) -> Self {
        Self { link }
    }

    /// Handle one input line. Returns `false` when the session should end.
    pub fn dispatch(
        &mut self,
        input: &str,
        paging: &mut PagingManager,
        term: &mut dyn Terminal,
    ) -> io::Result<bool> {
        let Some(action) = parse_command(input) else {
            tracing::debug!(input, "unrecognized command dropped");
            return Ok(true);
        };
        match action {
            CommandAction::Connect => self.link.connect(),
            CommandAction::Disconnect => self.link.disconnect(),
            CommandAction::Status => {
                // Redundant when already on the status page; go_to absorbs
                // that as a silent no-op.
                paging.go_to(FIRST_PAGE, term)?;
            }
            CommandAction::Exit => return Ok(false),
        }
        Ok(true)
    }
}
