pub mod extract;
pub mod family;
pub mod node;
pub mod pod;

pub use extract::{extract, ExtractedLine};
pub use family::MetricFamily;
pub use node::{node_metrics, NodeMetrics};
pub use pod::{pod_key, pod_metrics, PodMetrics};
