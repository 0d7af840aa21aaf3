//! Conversion between a [`Labels`] selector and the flat `key:value` tokens
//! a multi-select control works with.
//!
//! # Token grammar
//! - The key ends at the first [`LABEL_SEPARATOR`] not preceded by [`ESCAPE_CHAR`].
//! - Inside the key, `\:` stands for `:` and `\\` for `\`. Any other `\` is
//!   kept as is, so `a\b:c` has the key `a\b`.
//! - The value is the rest of the token, verbatim (it may contain `:`).
//!
//! # Decode policy
//! - No separator: the whole token is the key, the value is empty.
//! - Empty key (`""`, `":prod"`): the token is dropped and reported.
//! - Repeated key: the last token wins.
//!
//! With these rules `decode(encode(x)) == x` for every selector whose keys are non-empty.
use std::borrow::Cow;

use tracing::warn;

use crate::{DisplayToken, ESCAPE_CHAR, LABEL_SEPARATOR, Labels};

mod report;
pub use report::{DecodeReport, DropReason, DroppedToken};

/// Flatten a selector into display tokens, one per label, in key order.
///
/// `None` is treated like an empty selector.
pub fn encode(labels: Option<&Labels>) -> Vec<DisplayToken> {
    labels
        .map(|labels| {
            labels
                .iter()
                .map(|(k, v)| DisplayToken::from_pair(k, v))
                .collect()
        })
        .unwrap_or_default()
}

/// Rebuild a selector from display tokens.
///
/// Tokens that cannot name a label are dropped with a `warn!` event; use
/// [`decode_report`] to inspect them programmatically.
pub fn decode<I>(tokens: I) -> Labels
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let report = decode_report(tokens);
    for dropped in &report.dropped {
        warn!(token = %dropped.token, reason = %dropped.reason, "label token dropped");
    }
    report.labels
}

/// Decode tokens and report every dropped token and overwritten key.
pub fn decode_report<I>(tokens: I) -> DecodeReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = DecodeReport::default();

    for token in tokens {
        let raw = token.as_ref();
        let (key, value) = split(raw);

        if key.is_empty() {
            report.dropped.push(DroppedToken {
                token: DisplayToken::new(raw),
                reason: DropReason::EmptyKey,
            });
            continue;
        }

        let key = key.into_owned();
        if let Some(prev) = report.labels.get(&key)
            && prev != value
            && !report.overwritten.contains(&key)
        {
            report.overwritten.push(key.clone());
        }
        report.labels.insert(key, value);
    }
    report
}

/// Join a key and a value into token form, escaping the key.
pub(crate) fn join(key: &str, value: &str) -> String {
    let mut out = String::with_capacity(key.len() + value.len() + 1);
    for c in key.chars() {
        if c == LABEL_SEPARATOR || c == ESCAPE_CHAR {
            out.push(ESCAPE_CHAR);
        }
        out.push(c);
    }
    out.push(LABEL_SEPARATOR);
    out.push_str(value);
    out
}

/// Split a raw token into its unescaped key and its value.
pub(crate) fn split(raw: &str) -> (Cow<'_, str>, &str) {
    let mut escaped = false;
    let mut needs_unescape = false;

    for (idx, c) in raw.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == ESCAPE_CHAR {
            escaped = true;
            needs_unescape = true;
        } else if c == LABEL_SEPARATOR {
            let key = &raw[..idx];
            let value = &raw[idx + c.len_utf8()..];
            return (unescape(key, needs_unescape), value);
        }
    }
    (unescape(raw, needs_unescape), "")
}

fn unescape(key: &str, needed: bool) -> Cow<'_, str> {
    if !needed {
        return Cow::Borrowed(key);
    }

    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars();
    while let Some(c) = chars.next() {
        if c != ESCAPE_CHAR {
            out.push(c);
            continue;
        }
        match chars.clone().next() {
            Some(next) if next == ESCAPE_CHAR || next == LABEL_SEPARATOR => {
                out.push(next);
                chars.next();
            }
            _ => out.push(ESCAPE_CHAR),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> Labels {
        pairs.iter().copied().collect()
    }

    #[test]
    fn encode_empty_and_absent_yield_no_tokens() {
        assert!(encode(Some(&Labels::new())).is_empty());
        assert!(encode(None).is_empty());
    }

    #[test]
    fn decode_empty_yields_empty_labels() {
        let tokens: [&str; 0] = [];
        assert!(decode(tokens).is_empty());
    }

    #[test]
    fn encode_produces_exactly_one_token_per_label() {
        let tokens = encode(Some(&labels(&[("env", "prod"), ("tier", "web")])));

        assert_eq!(tokens.len(), 2);
        assert!(tokens.iter().any(|t| t == "env:prod"));
        assert!(tokens.iter().any(|t| t == "tier:web"));
    }

    #[test]
    fn decode_last_token_wins_on_collision() {
        let decoded = decode(["env:prod", "env:staging"]);
        assert_eq!(decoded, labels(&[("env", "staging")]));
    }

    #[test]
    fn roundtrip_plain_labels() {
        let original = labels(&[
            ("kubernetes.io/hostname", "node-1"),
            ("disk", "ssd"),
            ("empty", ""),
        ]);
        assert_eq!(decode(encode(Some(&original))), original);
    }

    #[test]
    fn roundtrip_keys_and_values_with_separators_and_escapes() {
        let original = labels(&[
            ("a:b", "c"),
            (r"back\slash", "x"),
            (r"trailing\", "v"),
            ("image", "repo:tag"),
            (":", ":"),
        ]);
        assert_eq!(decode(encode(Some(&original))), original);
    }

    #[test]
    fn token_without_separator_becomes_key_with_empty_value() {
        let decoded = decode(["env:prod", "standalone", "tier:web"]);

        assert_eq!(decoded.get("standalone"), Some(""));
        assert_eq!(decoded.get("env"), Some("prod"));
        assert_eq!(decoded.get("tier"), Some("web"));
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn empty_key_tokens_are_dropped_and_reported() {
        let report = decode_report(["", ":prod", "env:prod"]);

        assert_eq!(report.labels, labels(&[("env", "prod")]));
        assert_eq!(report.dropped.len(), 2);
        assert!(
            report
                .dropped
                .iter()
                .all(|d| d.reason == DropReason::EmptyKey)
        );
        assert_eq!(report.dropped[1].token, ":prod");
        assert!(!report.is_clean());
    }

    #[test]
    fn report_lists_overwritten_keys_once() {
        let report = decode_report(["env:a", "env:b", "env:c", "tier:web", "tier:web"]);

        assert_eq!(report.labels.get("env"), Some("c"));
        assert_eq!(report.overwritten, vec!["env".to_string()]);
        assert!(report.dropped.is_empty());
    }

    #[test]
    fn clean_report_for_well_formed_tokens() {
        let report = decode_report(["env:prod", "tier:web"]);
        assert!(report.is_clean());
    }

    #[test]
    fn decode_is_deterministic() {
        let selection = ["zone:a", "disk:ssd", "zone:b"];
        assert_eq!(decode(selection), decode(selection));
    }

    #[test]
    fn split_unescapes_key_only() {
        let (key, value) = split(r"a\:b:c\:d");
        assert_eq!(key, "a:b");
        assert_eq!(value, r"c\:d");
    }

    #[test]
    fn backslash_before_other_chars_is_kept_in_key() {
        let decoded = decode([r"a\b:c", r"tail\:v", r"x\\y:z"]);

        assert_eq!(decoded.get(r"a\b"), Some("c"));
        assert_eq!(decoded.get("tail:v"), Some(""));
        assert_eq!(decoded.get(r"x\y"), Some("z"));
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn split_keeps_lone_trailing_backslash() {
        let (key, value) = split("dir\\");
        assert_eq!(key, "dir\\");
        assert_eq!(value, "");
    }

    #[test]
    fn split_handles_multibyte_keys() {
        let (key, value) = split("région:ouest");
        assert_eq!(key, "région");
        assert_eq!(value, "ouest");
    }
}
