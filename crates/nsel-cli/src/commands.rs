use std::sync::Arc;

use anyhow::{Context, Result};
use nsel_editor::editor::MultiSelectEditor;
use nsel_model::{DisplayToken, LabelCatalog, Labels, decode_report};
use nsel_observe::ChangeLogger;
use serde_json::{Value, json};
use tracing::info;

fn parse_labels(raw: &str, what: &str) -> Result<Labels> {
    Labels::from_json(raw).with_context(|| format!("failed to parse {what}"))
}

pub fn encode(labels: &str) -> Result<Value> {
    let labels = parse_labels(labels, "labels")?;
    Ok(json!(labels.to_tokens()))
}

pub fn decode(tokens: &[String], report: bool) -> Result<Value> {
    if report {
        return Ok(serde_json::to_value(decode_report(tokens))?);
    }
    Ok(serde_json::to_value(Labels::from_tokens(tokens))?)
}

pub fn edit(
    labels: &str,
    catalog: &[String],
    nodes: &[String],
    toggles: &[String],
) -> Result<Value> {
    let current = parse_labels(labels, "labels")?;

    let nodes = nodes
        .iter()
        .map(|raw| parse_labels(raw, "node labels"))
        .collect::<Result<Vec<_>>>()?;
    let mut options: Vec<DisplayToken> = catalog.iter().map(DisplayToken::new).collect();
    for token in LabelCatalog::from_nodes(&nodes).iter() {
        if !options.contains(token) {
            options.push(token.clone());
        }
    }

    let mut editor = MultiSelectEditor::new(
        current,
        LabelCatalog::new(options),
        Arc::new(ChangeLogger::default()),
    );
    for raw in toggles {
        editor
            .toggle_str(raw)
            .with_context(|| format!("cannot toggle {raw:?}"))?;
    }

    let view = editor.render();
    let candidates = nodes.iter().filter(|n| editor.labels().matches(n)).count();
    info!(candidates, nodes = nodes.len(), "edit finished");

    Ok(json!({
        "labels": editor.labels(),
        "view": view,
    }))
}

pub fn matches(selector: &str, node: &str) -> Result<Value> {
    let selector = parse_labels(selector, "selector")?;
    let node = parse_labels(node, "node labels")?;
    Ok(json!(selector.matches(&node)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn encode_prints_tokens_in_key_order() {
        let out = encode(r#"{"tier":"web","env":"prod"}"#).unwrap();
        assert_eq!(out, json!(["env:prod", "tier:web"]));
    }

    #[test]
    fn encode_rejects_non_object() {
        let err = encode("[]").unwrap_err();
        assert!(err.to_string().contains("failed to parse labels"));
    }

    #[test]
    fn decode_last_token_wins() {
        let out = decode(&strings(&["env:prod", "env:staging"]), false).unwrap();
        assert_eq!(out, json!({"env": "staging"}));
    }

    #[test]
    fn decode_report_lists_dropped_tokens() {
        let out = decode(&strings(&[":x", "standalone"]), true).unwrap();

        assert_eq!(out["labels"], json!({"standalone": ""}));
        assert_eq!(out["dropped"][0]["token"], json!(":x"));
        assert_eq!(out["dropped"][0]["reason"], json!("emptyKey"));
    }

    #[test]
    fn edit_applies_toggles_in_order() {
        let out = edit(
            r#"{"disk":"ssd"}"#,
            &strings(&["zone:a"]),
            &strings(&[r#"{"zone":"b","disk":"ssd"}"#]),
            &strings(&["zone:a", "disk:ssd", "zone:a", "zone:b"]),
        )
        .unwrap();

        assert_eq!(out["labels"], json!({"zone": "b"}));
        assert_eq!(out["view"]["selected"], json!(["zone:b"]));

        let options = out["view"]["options"].as_array().unwrap();
        let tokens: Vec<&str> = options.iter().map(|o| o["token"].as_str().unwrap()).collect();
        assert_eq!(tokens, vec!["zone:a", "disk:ssd", "zone:b"]);
    }

    #[test]
    fn edit_fails_on_empty_key_toggle() {
        let err = edit("{}", &[], &[], &strings(&[":oops"])).unwrap_err();
        assert!(err.to_string().contains("cannot toggle"));
    }

    #[test]
    fn match_uses_and_semantics() {
        let sel = r#"{"disk":"ssd","zone":"a"}"#;
        let node = r#"{"disk":"ssd","zone":"a","gpu":"1"}"#;
        assert_eq!(matches(sel, node).unwrap(), json!(true));
        assert_eq!(matches(sel, r#"{"disk":"ssd"}"#).unwrap(), json!(false));
        assert_eq!(matches("{}", "{}").unwrap(), json!(true));
    }
}
