//! Multi-select editor for a node selector.
//!
//! The editor keeps the selector it was mounted with, renders it as selected
//! tokens next to the catalog options, and turns every selection change into a
//! new selector that is handed to the injected [`LabelSink`](crate::sink::LabelSink).
use std::fmt;

use nsel_model::{DisplayToken, LabelCatalog, Labels, decode, encode};
use tracing::{debug, instrument, trace};

use crate::{
    error::EditorResult,
    sink::SinkHandle,
    view::{FieldText, SelectOption, SelectSurface, SelectView},
};

/// Node selector editor over an external multi-select widget.
///
/// All state comes in through [`MultiSelectEditor::new`] and leaves through the
/// sink; edits are applied through `&mut self` and complete before returning.
pub struct MultiSelectEditor {
    current: Labels,
    catalog: LabelCatalog,
    field: FieldText,
    sink: SinkHandle,
}

impl MultiSelectEditor {
    /// Mount the editor on the selector currently held by the form state.
    pub fn new(current: Labels, catalog: LabelCatalog, sink: SinkHandle) -> Self {
        Self {
            current,
            catalog,
            field: FieldText::default(),
            sink,
        }
    }

    /// Override the caption, placeholder and helper text.
    #[inline]
    pub fn with_field(mut self, field: FieldText) -> Self {
        self.field = field;
        self
    }

    /// Selector as of the last edit (or as mounted).
    pub fn labels(&self) -> &Labels {
        &self.current
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    /// Replace the selector after the owner changed it outside the editor.
    ///
    /// The sink is not notified.
    pub fn set_labels(&mut self, labels: Labels) {
        self.current = labels;
    }

    /// Currently selected tokens.
    pub fn selected(&self) -> Vec<DisplayToken> {
        encode(Some(&self.current))
    }

    /// Build the render model: selected tokens plus every catalog option.
    pub fn render(&self) -> SelectView {
        let selected = self.selected();
        let options = self.options_for(self.catalog.iter(), &selected);
        trace!(
            selected = selected.len(),
            options = options.len(),
            "rendering node selector"
        );

        SelectView {
            field: self.field.clone(),
            selected,
            options,
        }
    }

    /// Render straight into a widget.
    pub fn render_into(&self, surface: &mut dyn SelectSurface) {
        surface.draw(&self.render());
    }

    /// Catalog options matching a free-text query, flagged against the current selection.
    pub fn filter_options(&self, query: &str) -> Vec<SelectOption> {
        let selected = self.selected();
        self.options_for(self.catalog.matching(query), &selected)
    }

    /// Apply the widget's new selection.
    ///
    /// The selection is decoded into a selector (last token wins on repeated
    /// keys), stored, passed to the sink once, and returned.
    #[instrument(level = "debug", skip(self, selection), fields(tokens = selection.len()))]
    pub fn on_selection_change(&mut self, selection: &[DisplayToken]) -> Labels {
        let labels = decode(selection);
        debug!(labels = labels.len(), "node selector changed");

        self.current = labels.clone();
        self.sink.labels_changed(&labels);
        labels
    }

    /// Select `token` if it is not selected, deselect it otherwise.
    ///
    /// Tokens are compared by the label they decode to, so `standalone` and
    /// `standalone:` toggle the same entry. Selecting a token whose key is
    /// already selected with another value replaces that value; toggling it
    /// again removes the key. The resulting selection goes through
    /// [`Self::on_selection_change`].
    pub fn toggle(&mut self, token: &DisplayToken) -> Labels {
        let token = token.canonical();
        let mut selection = self.selected();
        match selection.iter().position(|t| *t == token) {
            Some(idx) => {
                selection.remove(idx);
            }
            None => selection.push(token),
        }
        self.on_selection_change(&selection)
    }

    /// Parse a raw token and toggle it.
    ///
    /// Fails without touching the selector when the token has an empty key.
    pub fn toggle_str(&mut self, raw: &str) -> EditorResult<Labels> {
        let token = DisplayToken::parse(raw)?;
        Ok(self.toggle(&token))
    }

    fn options_for<'a, I>(&self, tokens: I, selected: &[DisplayToken]) -> Vec<SelectOption>
    where
        I: IntoIterator<Item = &'a DisplayToken>,
    {
        tokens
            .into_iter()
            .map(|token| SelectOption {
                token: token.clone(),
                checked: selected.contains(&token.canonical()),
            })
            .collect()
    }
}

impl fmt::Debug for MultiSelectEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSelectEditor")
            .field("current", &self.current)
            .field("catalog", &self.catalog)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}
