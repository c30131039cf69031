//! Per-node aggregation of scheduler exposition lines.

use crate::error::{Result, SchedscopeError};
use crate::metrics::extract::extract;
use crate::metrics::family::MetricFamily;
use serde::Serialize;
use std::collections::BTreeMap;

/// Scheduling diagnostics for a single node.
///
/// Scalar fields stay `None` until the matching line is observed. Plugin maps
/// collect one entry per plugin; on duplicate plugin keys the last line wins.
/// Ordered maps keep the serialized form stable across identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeMetrics {
    pub score_total: Option<u64>,
    pub score_attempts: Option<u64>,
    pub score_plugin_totals: BTreeMap<String, u64>,
    pub filter_pass: BTreeMap<String, u64>,
    pub filter_attempts: BTreeMap<String, u64>,
    pub eligible_num: Option<u64>,
    pub eligible_check_num: Option<u64>,
}

/// Fold every line naming `node_name` into a [`NodeMetrics`].
///
/// The node exists once at least one `scheduler_normalized_node_score_total`
/// line names it; a scan that never sees one returns
/// [`SchedscopeError::NodeNotFound`]. Extraction failures abort immediately.
pub fn node_metrics(text: &str, node_name: &str) -> Result<NodeMetrics> {
    let mut metrics = NodeMetrics::default();
    let mut found = false;

    for line in text.lines() {
        let Some(parsed) = extract(line)? else { continue };
        if parsed.node != node_name {
            continue;
        }

        // Counter values were validated as integral at extraction.
        let count = parsed.value as u64;

        match parsed.family {
            MetricFamily::NodeScoreTotal => {
                // Marks node existence; any node-keyed family would do, this
                // one is the fixed choice.
                found = true;
                metrics.score_total = Some(count);
            }
            MetricFamily::NodeScoreAttempts => metrics.score_attempts = Some(count),
            MetricFamily::NodeEligibleNum => metrics.eligible_num = Some(count),
            MetricFamily::NodeEligibleCheckNum => metrics.eligible_check_num = Some(count),
            MetricFamily::NodeFilterPass
            | MetricFamily::NodeFilterAttempts
            | MetricFamily::NodeScorePerPluginTotal => {
                // Plugin presence for these families is enforced by the extractor.
                let Some(plugin) = parsed.plugin else { continue };
                let target = match parsed.family {
                    MetricFamily::NodeFilterPass => &mut metrics.filter_pass,
                    MetricFamily::NodeFilterAttempts => &mut metrics.filter_attempts,
                    _ => &mut metrics.score_plugin_totals,
                };
                target.insert(plugin, count);
            }
            // Pod-scoped families belong to the pod view.
            MetricFamily::NodeScorePerPod | MetricFamily::NodeFilterStatusPerPod => {}
        }
    }

    if !found {
        return Err(SchedscopeError::NodeNotFound(node_name.to_string()));
    }

    Ok(metrics)
}
