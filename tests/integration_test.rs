use schedscope::error::SchedscopeError;
use schedscope::metrics::{node_metrics, pod_metrics};

// A realistic scrape: HELP/TYPE comments, unrelated scheduler families, and
// metrics for two nodes and one pod.
const EXPOSITION: &str = r#"# HELP scheduler_node_filter_pass Number of filter passes per node and plugin
# TYPE scheduler_node_filter_pass counter
scheduler_node_filter_pass{node="darwin-main",plugin="VolumeBinding"} 1
scheduler_node_filter_pass{node="microk8s-node-2",plugin="VolumeBinding"} 2
scheduler_node_filter_attempts{node="microk8s-node-2",plugin="GCEPDLimits"} 1
scheduler_node_score_attempts{node="darwin-main"} 1
scheduler_normalized_node_score_total{node="darwin-main"} 482
scheduler_node_eligible_num{node="darwin-main"} 2
scheduler_node_eligible_check_num{node="darwin-main"} 5
scheduler_e2e_scheduling_duration_seconds{quantile="0.99"} 0.004
scheduler_node_filter_status{node="microk8s-node-1",plugin="VolumeZone",pod="kubernetes.io/schedscope-scheduler/default/annotation-default-scheduler"} 1
scheduler_normalized_node_score_for_pod{node="microk8s-node-2",plugin="ImageLocality",pod="kubernetes.io/schedscope-scheduler/default/annotation-default-scheduler"} 0
"#;

#[test]
fn test_node_view_over_full_scrape() {
    let metrics = node_metrics(EXPOSITION, "darwin-main").expect("node exists");

    assert_eq!(metrics.score_total, Some(482));
    assert_eq!(metrics.score_attempts, Some(1));
    assert_eq!(metrics.eligible_num, Some(2));
    assert_eq!(metrics.eligible_check_num, Some(5));
    assert_eq!(metrics.filter_pass.get("VolumeBinding"), Some(&1));
    assert!(metrics.filter_attempts.is_empty());

    // microk8s-node-2 has filter lines but no score total, so it does not exist.
    let err = node_metrics(EXPOSITION, "microk8s-node-2").unwrap_err();
    assert!(matches!(err, SchedscopeError::NodeNotFound(_)));
}

#[test]
fn test_pod_view_over_full_scrape() {
    let metrics = pod_metrics(
        EXPOSITION,
        "annotation-default-scheduler",
        "default",
        "schedscope-scheduler",
    )
    .expect("pod exists");

    assert!(!metrics.skipped_scoring);
    assert_eq!(metrics.filter_scores["microk8s-node-2"]["ImageLocality"], 0.0);
    assert_eq!(metrics.filter_status["microk8s-node-1"]["VolumeZone"], 1);
}

#[test]
fn test_json_output_is_deterministic() {
    let first = serde_json::to_string(&node_metrics(EXPOSITION, "darwin-main").unwrap()).unwrap();
    let second = serde_json::to_string(&node_metrics(EXPOSITION, "darwin-main").unwrap()).unwrap();
    assert_eq!(first, second);

    assert_eq!(
        first,
        r#"{"score_total":482,"score_attempts":1,"score_plugin_totals":{},"filter_pass":{"VolumeBinding":1},"filter_attempts":{},"eligible_num":2,"eligible_check_num":5}"#
    );
}

#[test]
fn test_error_types() {
    let err = SchedscopeError::PodNotFound {
        name: "test-pod".to_string(),
        namespace: "default".to_string(),
    };

    assert!(err.to_string().contains("test-pod"));
    assert!(err.to_string().contains("default"));

    let err = SchedscopeError::LineMatchFailed {
        line: "scheduler_node_filter_pass{} junk".to_string(),
        pattern: "pattern".to_string(),
    };

    assert!(err.to_string().contains("junk"));
    assert!(err.to_string().contains("pattern"));
}

#[test]
fn test_version_const() {
    assert!(!schedscope::VERSION.is_empty());
}
