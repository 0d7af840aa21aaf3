use std::sync::Arc;

use nsel_model::Labels;

/// Receives the new selector after every edit.
///
/// Called synchronously from [`crate::editor::MultiSelectEditor`]; implementations
/// must not call back into the editor.
pub trait LabelSink: Send + Sync + 'static {
    fn labels_changed(&self, labels: &Labels);
}

impl<F> LabelSink for F
where
    F: Fn(&Labels) + Send + Sync + 'static,
{
    #[inline]
    fn labels_changed(&self, labels: &Labels) {
        self(labels)
    }
}

/// Shared handle to a sink.
pub type SinkHandle = Arc<dyn LabelSink>;
