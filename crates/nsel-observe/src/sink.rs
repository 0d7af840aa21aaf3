#![cfg(feature = "sink")]

//! Label sink that records every node selector change as a tracing event.

use nsel_editor::sink::LabelSink;
use nsel_model::Labels;
use tracing::{debug, info};

/// [`LabelSink`] that logs each new selector with structured fields.
///
/// Useful on its own for auditing edits, or wrapped by a sink that also
/// writes to form state.
#[derive(Debug, Clone, Copy)]
pub struct ChangeLogger {
    field: &'static str,
}

impl ChangeLogger {
    /// Logger for the form field named `field`.
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl Default for ChangeLogger {
    fn default() -> Self {
        Self::new("nodeSelectorLabels")
    }
}

impl LabelSink for ChangeLogger {
    fn labels_changed(&self, labels: &Labels) {
        log_change(self.field, labels);
    }
}

fn log_change(field: &str, labels: &Labels) {
    let msg = message_for(labels);
    if labels.is_empty() {
        info!(field, "{msg}");
        return;
    }

    let tokens = render_tokens(labels);
    info!(field, count = labels.len(), labels = %tokens, "{msg}");
    for (key, value) in labels.iter() {
        debug!(field, key, value, "selector label");
    }
}

fn message_for(labels: &Labels) -> &'static str {
    if labels.is_empty() {
        "node selector cleared (schedule on all nodes)"
    } else {
        "node selector updated"
    }
}

fn render_tokens(labels: &Labels) -> String {
    labels
        .to_tokens()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
