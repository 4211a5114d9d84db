//! Rendering module
//!
//! The simulation hands a read-only `Snapshot` to a `Renderer` once per frame.
//! Drawing style is entirely the renderer's business.

pub mod text;

pub use text::TextRenderer;

use crate::sim::Snapshot;

/// Draws one frame from a snapshot
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}
