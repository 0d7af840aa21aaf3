//! Render model handed to the widget that draws the multi-select.
mod field;
pub use field::{DEFAULT_HELPER_TEXT, DEFAULT_LABEL, DEFAULT_PLACEHOLDER, FieldText};

use nsel_model::DisplayToken;
use serde::{Deserialize, Serialize};

/// One catalog entry as the widget should show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub token: DisplayToken,
    /// Whether the token is part of the current selection.
    pub checked: bool,
}

/// Everything a multi-select widget needs to draw the field.
///
/// `selected` may contain tokens that are not among `options`: the catalog
/// only suggests values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectView {
    pub field: FieldText,
    /// Current selection, one token per label.
    pub selected: Vec<DisplayToken>,
    /// Catalog entries in catalog order.
    pub options: Vec<SelectOption>,
}

impl SelectView {
    /// Returns `true` if the label `token` decodes to is currently selected.
    pub fn is_selected(&self, token: &str) -> bool {
        let token = DisplayToken::from(token);
        self.selected.iter().any(|t| t.same_label(&token))
    }

    /// Selected tokens the catalog does not offer.
    pub fn extra_selected(&self) -> impl Iterator<Item = &DisplayToken> {
        self.selected
            .iter()
            .filter(|t| !self.options.iter().any(|o| o.token.same_label(t)))
    }
}

/// Widget that draws a [`SelectView`].
pub trait SelectSurface {
    fn draw(&mut self, view: &SelectView);
}
