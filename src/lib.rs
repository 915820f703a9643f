//! ProximiLock console client — a five-page terminal UI for a wireless
//! proximity lock.
//!
//! The crate is organized around a small navigation engine: a fixed
//! [`pages::PageRegistry`] of five views, a [`paging::PagingManager`] that
//! moves between them, and truecolor rendering primitives in [`tui`] that
//! write through an abstract [`tui::terminal::Terminal`]. The wireless link
//! itself lives behind the [`link::LinkControl`] boundary and is not part of
//! this crate.
//!
//! # Quick start
//!
//! ```no_run
//! use proxilock::pages::PageRegistry;
//! use proxilock::paging::PagingManager;
//! use proxilock::tui::terminal::StdoutTerminal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut term = StdoutTerminal::new(true)?;
//! let mut pager = PagingManager::new(PageRegistry::standard(), &mut term)?;
//! pager.next(&mut term)?;
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod link;
pub mod pages;
pub mod paging;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
