use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{DisplayToken, Labels};

/// Ordered list of known label tokens offered as selectable options.
///
/// The catalog is a suggestion list, not a closed enumeration: a selector may
/// hold labels the catalog does not mention.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct LabelCatalog(Vec<DisplayToken>);

impl LabelCatalog {
    pub fn new(tokens: Vec<DisplayToken>) -> Self {
        Self(tokens)
    }

    /// Collect every label advertised by a set of nodes.
    ///
    /// Duplicates are removed and the result is sorted by token.
    pub fn from_nodes<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Labels>,
    {
        let unique: BTreeSet<DisplayToken> = nodes
            .into_iter()
            .flat_map(|node| node.to_tokens())
            .collect();
        Self(unique.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    /// Iterate over the options in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &DisplayToken> {
        self.0.iter()
    }

    /// Options whose token contains `query`, ignoring case.
    ///
    /// A blank query returns every option.
    pub fn matching(&self, query: &str) -> Vec<&DisplayToken> {
        let needle = query.trim().to_lowercase();
        self.0
            .iter()
            .filter(|t| needle.is_empty() || t.as_str().to_lowercase().contains(&needle))
            .collect()
    }
}

impl From<Vec<DisplayToken>> for LabelCatalog {
    fn from(tokens: Vec<DisplayToken>) -> Self {
        Self(tokens)
    }
}

impl<T> FromIterator<T> for LabelCatalog
where
    T: Into<DisplayToken>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
