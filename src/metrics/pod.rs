//! Per-pod aggregation of scheduler exposition lines.
//!
//! Pod-scoped metrics embed the pod's identity as a composite label value,
//! `kubernetes.io/<scheduler-name>/<namespace>/<pod-name>`; correlation is a
//! plain string comparison against that identity.

use crate::error::{Result, SchedscopeError};
use crate::metrics::extract::extract;
use crate::metrics::family::MetricFamily;
use serde::Serialize;
use std::collections::BTreeMap;

/// Composite identity label for a pod, as the scheduler emits it.
pub fn pod_key(scheduler_name: &str, namespace: &str, pod_name: &str) -> String {
    format!("kubernetes.io/{scheduler_name}/{namespace}/{pod_name}")
}

/// Scheduling diagnostics for a single pod, keyed node then plugin.
///
/// `skipped_scoring` is true iff filter status entries exist for the pod but
/// no score entries do: the pod was eliminated before the scoring phase. On
/// duplicate (node, plugin) keys the last line wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PodMetrics {
    pub filter_scores: BTreeMap<String, BTreeMap<String, f64>>,
    pub filter_status: BTreeMap<String, BTreeMap<String, u64>>,
    pub skipped_scoring: bool,
}

/// Fold every line carrying the pod's identity into a [`PodMetrics`].
///
/// Well-formed per-pod lines naming a different pod are filtered out, not
/// errors. A scan that sees neither scores nor statuses for the identity
/// returns [`SchedscopeError::PodNotFound`].
pub fn pod_metrics(
    text: &str,
    pod_name: &str,
    namespace: &str,
    scheduler_name: &str,
) -> Result<PodMetrics> {
    let key = pod_key(scheduler_name, namespace, pod_name);

    let mut metrics = PodMetrics::default();
    let mut found_scores = false;
    let mut found_status = false;

    for line in text.lines() {
        let Some(parsed) = extract(line)? else { continue };
        if parsed.pod.as_deref() != Some(key.as_str()) {
            continue;
        }
        // Plugin presence for per-pod families is enforced by the extractor.
        let Some(plugin) = parsed.plugin else { continue };

        match parsed.family {
            MetricFamily::NodeScorePerPod => {
                found_scores = true;
                metrics
                    .filter_scores
                    .entry(parsed.node)
                    .or_default()
                    .insert(plugin, parsed.value);
            }
            MetricFamily::NodeFilterStatusPerPod => {
                found_status = true;
                metrics
                    .filter_status
                    .entry(parsed.node)
                    .or_default()
                    .insert(plugin, parsed.value as u64);
            }
            _ => {}
        }
    }

    if !found_scores && !found_status {
        return Err(SchedscopeError::PodNotFound {
            name: pod_name.to_string(),
            namespace: namespace.to_string(),
        });
    }
    metrics.skipped_scoring = found_status && !found_scores;

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULER: &str = "schedscope-scheduler";

    #[test]
    fn test_pod_key_format() {
        assert_eq!(
            pod_key(SCHEDULER, "default", "web-0"),
            "kubernetes.io/schedscope-scheduler/default/web-0"
        );
    }

    #[test]
    fn test_scores_and_status_keyed_node_then_plugin() {
        let text = r#"scheduler_normalized_node_score_for_pod{node="n1",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/default/web-0"} 0
scheduler_normalized_node_score_for_pod{node="n2",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/default/web-0"} 85
scheduler_node_filter_status{node="n1",plugin="VolumeZone",pod="kubernetes.io/schedscope-scheduler/default/web-0"} 1
"#;
        let metrics = pod_metrics(text, "web-0", "default", SCHEDULER).expect("pod exists");

        assert!(!metrics.skipped_scoring);
        assert_eq!(metrics.filter_scores["n1"]["ImageLocality"], 0.0);
        assert_eq!(metrics.filter_scores["n2"]["ImageLocality"], 85.0);
        assert_eq!(metrics.filter_status["n1"]["VolumeZone"], 1);
    }

    #[test]
    fn test_status_without_scores_means_skipped_scoring() {
        let text = r#"scheduler_node_filter_status{node="n1",plugin="VolumeZone",pod="kubernetes.io/schedscope-scheduler/default/web-0"} 1"#;
        let metrics = pod_metrics(text, "web-0", "default", SCHEDULER).expect("pod exists");

        assert!(metrics.skipped_scoring);
        assert!(metrics.filter_scores.is_empty());
    }

    #[test]
    fn test_scores_without_status_not_skipped() {
        let text = r#"scheduler_normalized_node_score_for_pod{node="n1",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/default/web-0"} 12"#;
        let metrics = pod_metrics(text, "web-0", "default", SCHEDULER).expect("pod exists");
        assert!(!metrics.skipped_scoring);
    }

    #[test]
    fn test_unknown_pod_not_found() {
        let text = r#"scheduler_normalized_node_score_for_pod{node="n1",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/default/other-pod"} 12"#;
        let err = pod_metrics(text, "web-0", "default", SCHEDULER).unwrap_err();

        assert!(matches!(err, SchedscopeError::PodNotFound { .. }));
        assert!(err.to_string().contains("web-0"));
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn test_namespace_is_part_of_identity() {
        let text = r#"scheduler_normalized_node_score_for_pod{node="n1",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/staging/web-0"} 12"#;
        assert!(pod_metrics(text, "web-0", "default", SCHEDULER).is_err());
        assert!(pod_metrics(text, "web-0", "staging", SCHEDULER).is_ok());
    }

    #[test]
    fn test_scheduler_name_is_part_of_identity() {
        let text = r#"scheduler_normalized_node_score_for_pod{node="n1",plugin="ImageLocality",pod="kubernetes.io/other-scheduler/default/web-0"} 12"#;
        assert!(pod_metrics(text, "web-0", "default", SCHEDULER).is_err());
    }

    #[test]
    fn test_empty_text_not_found() {
        assert!(matches!(
            pod_metrics("", "web-0", "default", SCHEDULER).unwrap_err(),
            SchedscopeError::PodNotFound { .. }
        ));
    }

    #[test]
    fn test_malformed_per_pod_line_aborts() {
        let text = r#"scheduler_node_filter_status{node="n1",plugin="VolumeZone"} 1"#;
        let err = pod_metrics(text, "web-0", "default", SCHEDULER).unwrap_err();
        assert!(matches!(err, SchedscopeError::LineMatchFailed { .. }));
    }
}
