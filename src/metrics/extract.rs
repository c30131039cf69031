//! Tokenizer for classified exposition lines.
//!
//! A line is classified by the metric name ahead of its label block, then
//! pulled apart with a single structural pattern. Classification already
//! asserts the line's shape: once a name matches a family, any structural
//! failure means the scheduler's exposition contract changed, and the whole
//! parse must stop rather than skip the line and return a misleading
//! aggregate.

use crate::error::{Result, SchedscopeError};
use crate::metrics::family::MetricFamily;
use regex::Regex;
use std::sync::LazyLock;

/// Structural shape of a classified line: `name{labels} value`.
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[a-z_][a-z0-9_]*\{(?P<labels>[^}]*)\}\s+(?P<value>-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?)$"#)
        .expect("line pattern must compile")
});

/// One `key="value"` pair inside the label block.
static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([a-zA-Z_][a-zA-Z0-9_]*)="([^"]*)""#).expect("label pattern must compile")
});

/// Typed captures of one classified exposition line. Produced and consumed
/// within a single aggregation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedLine {
    pub family: MetricFamily,
    pub node: String,
    pub plugin: Option<String>,
    pub pod: Option<String>,
    pub value: f64,
}

fn line_error(line: &str, pattern: &str) -> SchedscopeError {
    SchedscopeError::LineMatchFailed {
        line: line.to_string(),
        pattern: pattern.to_string(),
    }
}

fn missing_label(line: &str, label: &str) -> SchedscopeError {
    line_error(line, &format!("{label}=\"...\""))
}

/// Tokenize one exposition line.
///
/// Returns `Ok(None)` for lines outside the scheduler families: comments,
/// unrelated metrics, and lines without a label block. Returns an error when
/// a classified line fails the structural pattern, misses a required label,
/// or carries a non-integral value for a counter family.
pub fn extract(line: &str) -> Result<Option<ExtractedLine>> {
    let Some((name, _)) = line.split_once('{') else {
        return Ok(None);
    };
    let Some(family) = MetricFamily::from_name(name) else {
        return Ok(None);
    };

    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| line_error(line, LINE_RE.as_str()))?;

    let mut node = None;
    let mut plugin = None;
    let mut pod = None;
    for label in LABEL_RE.captures_iter(&caps["labels"]) {
        match &label[1] {
            "node" => node = Some(label[2].to_string()),
            "plugin" => plugin = Some(label[2].to_string()),
            "pod" => pod = Some(label[2].to_string()),
            _ => {}
        }
    }

    let Some(node) = node else {
        return Err(missing_label(line, "node"));
    };
    if family.requires_plugin() && plugin.is_none() {
        return Err(missing_label(line, "plugin"));
    }
    if family.per_pod() && pod.is_none() {
        return Err(missing_label(line, "pod"));
    }

    let raw_value = &caps["value"];
    if !family.float_valued() && raw_value.parse::<u64>().is_err() {
        return Err(line_error(line, r"counter value [0-9]+"));
    }
    let value = raw_value
        .parse::<f64>()
        .map_err(|_| line_error(line, "numeric value"))?;

    Ok(Some(ExtractedLine {
        family,
        node,
        plugin,
        pod,
        value,
    }))
}
