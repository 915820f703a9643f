//! Terminal rendering primitives: the console boundary, truecolor styled
//! output, layout math, and the hardcoded UI settings.

pub mod renderer;
pub mod settings;
pub mod terminal;
pub mod text;

pub use renderer::{write_divider, write_styled, Rgb, TextStyle};
pub use terminal::{StdoutTerminal, Terminal};
