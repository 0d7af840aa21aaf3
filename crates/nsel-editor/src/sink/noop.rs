use nsel_model::Labels;

use crate::sink::backend::LabelSink;

/// Sink that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl LabelSink for NoOpSink {
    #[inline(always)]
    fn labels_changed(&self, _: &Labels) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpSink>(), 0);
    }

    #[test]
    fn closures_are_sinks() {
        use std::sync::{Arc, Mutex};

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            move |labels: &Labels| seen.lock().unwrap().push(labels.clone())
        };

        let mut labels = Labels::new();
        labels.insert("env", "prod");
        sink.labels_changed(&labels);
        NoOpSink.labels_changed(&labels);

        assert_eq!(seen.lock().unwrap().as_slice(), &[labels]);
    }
}
