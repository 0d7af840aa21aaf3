use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DisplayToken, Labels};

/// Why a token did not contribute a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum DropReason {
    /// The key segment was empty (`""`, `":value"`).
    EmptyKey,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DropReason::EmptyKey => "empty key",
        };
        f.write_str(s)
    }
}

/// A token ignored while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedToken {
    pub token: DisplayToken,
    pub reason: DropReason,
}

/// Outcome of [`crate::decode_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeReport {
    /// Decoded selector.
    pub labels: Labels,
    /// Tokens that produced no label, in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<DroppedToken>,
    /// Keys whose value was replaced by a later token with a different value, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overwritten: Vec<String>,
}

impl DecodeReport {
    /// `true` when every token became a label and no value was replaced.
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.overwritten.is_empty()
    }
}
