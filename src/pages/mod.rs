//! Page model: section bindings, the fixed registry, and render context.
//!
//! A page is one navigable console view identified by a fixed 1-based
//! number. It always has a title; header, body, and footer are optional
//! bindings that are skipped when absent.

use std::fmt;
use std::io;

use chrono::{Datelike, Timelike};

use crate::tui::terminal::Terminal;

pub mod header;
pub mod status;
pub mod title;

use header::PageHeader;
use status::{StatusBody, StatusFooter};
use title::TitleBar;

/// Number of fixed pages; page numbers run `FIRST_PAGE..=MAX_PAGES`.
pub const MAX_PAGES: u8 = 5;
/// Lowest valid page number (users never see the 0-based slots).
pub const FIRST_PAGE: u8 = 1;

/// The five fixed views, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Status,
    Incoming,
    Outgoing,
    Logging,
    Error,
}

impl PageKind {
    pub const ALL: [PageKind; MAX_PAGES as usize] = [
        PageKind::Status,
        PageKind::Incoming,
        PageKind::Outgoing,
        PageKind::Logging,
        PageKind::Error,
    ];

    /// Fixed, user-facing page number.
    pub fn number(self) -> u8 {
        match self {
            Self::Status => 1,
            Self::Incoming => 2,
            Self::Outgoing => 3,
            Self::Logging => 4,
            Self::Error => 5,
        }
    }

    /// Display name shown in the page header's right-aligned label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Incoming => "Incoming",
            Self::Outgoing => "Outgoing",
            Self::Logging => "Logging",
            Self::Error => "Error",
        }
    }
}

/// Wall-clock fields rendered by page headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl WallClock {
    /// Capture the current local time.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            millisecond: now.timestamp_subsec_millis(),
        }
    }
}

/// Values threaded into section renderers for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub page_number: u8,
    pub clock: WallClock,
}

impl RenderContext {
    pub fn for_page(page_number: u8) -> Self {
        Self {
            page_number,
            clock: WallClock::now(),
        }
    }
}

/// One renderable part of a page.
pub trait SectionRenderer {
    fn render(&self, term: &mut dyn Terminal, ctx: &RenderContext) -> io::Result<()>;
}

/// Section slots a page may bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Header,
    Body,
    Footer,
}

/// One navigable view: a fixed number plus up to four section bindings.
pub struct Page {
    number: u8,
    title: Box<dyn SectionRenderer>,
    header: Option<Box<dyn SectionRenderer>>,
    body: Option<Box<dyn SectionRenderer>>,
    footer: Option<Box<dyn SectionRenderer>>,
}

impl Page {
    /// A page with the shared title bar and no other sections bound.
    pub fn new(kind: PageKind) -> Self {
        Self {
            number: kind.number(),
            title: Box::new(TitleBar),
            header: None,
            body: None,
            footer: None,
        }
    }

    pub fn with_header(mut self, renderer: impl SectionRenderer + 'static) -> Self {
        self.header = Some(Box::new(renderer));
        self
    }

    pub fn with_body(mut self, renderer: impl SectionRenderer + 'static) -> Self {
        self.body = Some(Box::new(renderer));
        self
    }

    pub fn with_footer(mut self, renderer: impl SectionRenderer + 'static) -> Self {
        self.footer = Some(Box::new(renderer));
        self
    }

    /// Fixed 1-based page number; immutable once assigned.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn has_section(&self, section: Section) -> bool {
        self.section(section).is_some()
    }

    /// The bound renderer for a slot, if any. The title slot is always
    /// bound.
    pub fn section(&self, section: Section) -> Option<&dyn SectionRenderer> {
        match section {
            Section::Title => Some(self.title.as_ref()),
            Section::Header => self.header.as_deref(),
            Section::Body => self.body.as_deref(),
            Section::Footer => self.footer.as_deref(),
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("header", &self.header.is_some())
            .field("body", &self.body.is_some())
            .field("footer", &self.footer.is_some())
            .finish()
    }
}

/// Fixed-capacity ordered page store; slot `i` always holds page `i + 1`.
///
/// Fully populated at construction so navigation never observes a partial
/// registry.
#[derive(Debug)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    /// The five standard client pages with their section bindings.
    ///
    /// Status carries every section; incoming, outgoing, and logging bind a
    /// header only; the error page is title-only.
    pub fn standard() -> Self {
        let pages = PageKind::ALL
            .into_iter()
            .map(|kind| match kind {
                PageKind::Status => Page::new(kind)
                    .with_header(PageHeader::new(kind))
                    .with_body(StatusBody)
                    .with_footer(StatusFooter),
                PageKind::Incoming | PageKind::Outgoing | PageKind::Logging => {
                    Page::new(kind).with_header(PageHeader::new(kind))
                }
                PageKind::Error => Page::new(kind),
            })
            .collect();
        let registry = Self { pages };
        debug_assert!(registry
            .pages
            .iter()
            .enumerate()
            .all(|(slot, page)| page.number() as usize == slot + 1));
        registry
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, number: u8) -> Option<&Page> {
        if !(FIRST_PAGE..=MAX_PAGES).contains(&number) {
            return None;
        }
        self.pages.get(Self::slot(number))
    }

    /// Presence query for a section, used before direct single-section
    /// shows. Out-of-range numbers report `false`.
    pub fn has_section(&self, number: u8, section: Section) -> bool {
        self.get(number)
            .map(|page| page.has_section(section))
            .unwrap_or(false)
    }

    /// Infallible lookup for numbers the registry invariant guarantees.
    pub(crate) fn page(&self, number: u8) -> &Page {
        &self.pages[Self::slot(number)]
    }

    fn slot(number: u8) -> usize {
        (number - 1) as usize
    }
}
