//! Interactive console session: startup sequence and the command loop.

mod startup;

use std::io::{self, BufRead};

use proxilock::commands::CommandDispatcher;
use proxilock::config::{load_config, Config};
use proxilock::link::InertLink;
use proxilock::pages::PageRegistry;
use proxilock::paging::PagingManager;
use proxilock::tui::terminal::{StdoutTerminal, Terminal};

/// Page-movement verbs handled by the loop itself, outside the fixed
/// command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavInput {
    Next,
    Previous,
    GoTo(u8),
}

fn parse_navigation(input: &str) -> Option<NavInput> {
    let lowered = input.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "next" => return Some(NavInput::Next),
        "prev" | "previous" => return Some(NavInput::Previous),
        _ => {}
    }
    let target = lowered.strip_prefix("page ")?.trim().parse().ok()?;
    Some(NavInput::GoTo(target))
}

/// Top-level entrypoint; maps every failure to a one-line message and an
/// exit code.
pub(crate) fn run(args: crate::cli::Args) -> i32 {
    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    let color = config.display.color && !args.no_color;
    // The single fatal startup error: no usable terminal means no session.
    let mut term = match StdoutTerminal::new(color) {
        Ok(term) => term,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    if let Err(err) = run_session(&mut term, &config, args.skip_countdown) {
        eprintln!("error: {err}");
        return 1;
    }
    0
}

fn run_session(
    term: &mut dyn Terminal,
    config: &Config,
    skip_countdown: bool,
) -> io::Result<()> {
    if config.startup.privilege_warning {
        startup::show_privilege_warnings(term)?;
    }
    if !skip_countdown && config.startup.countdown_secs > 0 {
        startup::countdown(term, config.startup.countdown_secs)?;
    }

    // Clears the screen and renders the status page once.
    let mut paging = PagingManager::new(PageRegistry::standard(), term)?;
    let mut link = InertLink;
    let mut dispatcher = CommandDispatcher::new(&mut link);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if let Some(nav) = parse_navigation(input) {
            match nav {
                NavInput::Next => {
                    paging.next(term)?;
                }
                NavInput::Previous => {
                    paging.previous(term)?;
                }
                NavInput::GoTo(target) => {
                    paging.go_to(target, term)?;
                }
            }
            continue;
        }
        if !dispatcher.dispatch(input, &mut paging, term)? {
            break;
        }
    }
    Ok(())
}
