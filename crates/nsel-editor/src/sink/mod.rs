//! Destination for label sets produced by the editor.
//!
//! The form-state owner implements [`LabelSink`] (or passes a closure) and the
//! editor calls it once per user edit.
mod backend;
pub use backend::{LabelSink, SinkHandle};

mod noop;
pub use noop::NoOpSink;

use std::sync::Arc;

/// Create a sink that discards every change.
#[inline]
pub fn noop_sink() -> SinkHandle {
    Arc::new(NoOpSink)
}
