use serde::{Deserialize, Serialize};

/// Default caption of the node selector field.
pub const DEFAULT_LABEL: &str = "Node Selector";

/// Default placeholder shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str =
    "Select node labels. Leave blank to schedule on all available nodes.";

/// Default helper text explaining how labels combine.
pub const DEFAULT_HELPER_TEXT: &str =
    "The semantics between labels is AND. A node is a candidate if it match all the labels.";

/// Static text around the multi-select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldText {
    /// Field caption.
    pub label: String,
    /// Hint shown when the selection is empty.
    pub placeholder: String,
    /// Explanatory text under the control.
    pub helper_text: String,
}

impl Default for FieldText {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            helper_text: DEFAULT_HELPER_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let text = FieldText::default();
        assert_eq!(text.label, "Node Selector");
        assert!(text.placeholder.contains("Leave blank"));
        assert!(text.helper_text.contains("AND"));
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let text: FieldText = serde_json::from_str(r#"{"label":"Placement"}"#).unwrap();

        assert_eq!(text.label, "Placement");
        assert_eq!(text.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(text.helper_text, DEFAULT_HELPER_TEXT);
    }

    #[test]
    fn serde_field_names_are_camel_case() {
        let json = serde_json::to_string(&FieldText::default()).unwrap();
        assert!(json.contains("\"helperText\""));
    }
}
