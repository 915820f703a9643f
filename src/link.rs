//! Wireless link boundary.
//!
//! The protocol work lives outside this crate; the console only exposes the
//! command surface. `connect`/`disconnect` requests are forwarded here and
//! nowhere else.

/// Link operations reachable from console commands.
pub trait LinkControl {
    fn connect(&mut self);
    fn disconnect(&mut self);
}

/// Inert implementation used until a transport is wired in.
#[derive(Debug, Default)]
pub struct InertLink;

impl LinkControl for InertLink {
    fn connect(&mut self) {
        tracing::info!("link connect requested; no transport is wired in");
    }

    fn disconnect(&mut self) {
        tracing::info!("link disconnect requested; no transport is wired in");
    }
}
