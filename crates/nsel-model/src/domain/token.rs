use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::{
    codec,
    error::{ModelError, ModelResult},
};

/// Flattened `key:value` form of one label, as shown by selection widgets.
///
/// A token is an opaque string at the UI boundary: it may come from the user,
/// from a catalog, or from [`DisplayToken::from_pair`]. Construction through
/// [`DisplayToken::new`] or `From` never fails; use [`DisplayToken::parse`] when
/// the input must describe a usable label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct DisplayToken(String);

impl DisplayToken {
    /// Wrap a raw token string without inspecting it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the token for a `(key, value)` pair, escaping the key as needed.
    pub fn from_pair(key: &str, value: &str) -> Self {
        Self(codec::join(key, value))
    }

    /// Parse a raw token, rejecting input that cannot name a label.
    ///
    /// Unlike [`codec::decode`], which drops such tokens, this returns an error
    /// for an empty key. A missing separator is accepted (empty value).
    pub fn parse(raw: &str) -> ModelResult<Self> {
        let (key, _) = codec::split(raw);
        if key.is_empty() {
            return Err(ModelError::InvalidToken {
                token: raw.to_string(),
                reason: "label key is empty",
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unescaped key segment.
    pub fn key(&self) -> Cow<'_, str> {
        codec::split(&self.0).0
    }

    /// Value segment: everything after the first unescaped separator.
    pub fn value(&self) -> &str {
        codec::split(&self.0).1
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Token in the form [`codec::encode`] produces for the same label.
    ///
    /// `standalone` becomes `standalone:` and a lone `\` in the key is doubled.
    pub fn canonical(&self) -> Self {
        Self::from_pair(&self.key(), self.value())
    }

    /// Returns `true` if both tokens decode to the same `(key, value)` pair.
    pub fn same_label(&self, other: &DisplayToken) -> bool {
        self == other || (self.key() == other.key() && self.value() == other.value())
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DisplayToken {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for DisplayToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DisplayToken {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for DisplayToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl PartialEq<str> for DisplayToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DisplayToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
