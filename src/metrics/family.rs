//! Metric family classification for scheduler exposition lines.
//!
//! Each family corresponds to one exposition metric name emitted by the
//! scheduler. Names are disjoint, so a line classifies into at most one
//! family; anything else in the exposition text is ignored.

/// Families of scheduler metrics the diagnostics endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    NodeFilterPass,
    NodeFilterAttempts,
    NodeScoreAttempts,
    NodeScoreTotal,
    NodeScorePerPluginTotal,
    NodeEligibleNum,
    NodeEligibleCheckNum,
    NodeScorePerPod,
    NodeFilterStatusPerPod,
}

impl MetricFamily {
    /// Classify an exposition metric name. `None` means the line belongs to
    /// some unrelated family and is skipped.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scheduler_node_filter_pass" => Some(Self::NodeFilterPass),
            "scheduler_node_filter_attempts" => Some(Self::NodeFilterAttempts),
            "scheduler_node_score_attempts" => Some(Self::NodeScoreAttempts),
            "scheduler_normalized_node_score_total" => Some(Self::NodeScoreTotal),
            "scheduler_node_score_by_plugin_total" => Some(Self::NodeScorePerPluginTotal),
            "scheduler_node_eligible_num" => Some(Self::NodeEligibleNum),
            "scheduler_node_eligible_check_num" => Some(Self::NodeEligibleCheckNum),
            "scheduler_normalized_node_score_for_pod" => Some(Self::NodeScorePerPod),
            "scheduler_node_filter_status" => Some(Self::NodeFilterStatusPerPod),
            _ => None,
        }
    }

    /// Exposition metric name for this family.
    pub fn metric_name(&self) -> &'static str {
        match self {
            Self::NodeFilterPass => "scheduler_node_filter_pass",
            Self::NodeFilterAttempts => "scheduler_node_filter_attempts",
            Self::NodeScoreAttempts => "scheduler_node_score_attempts",
            Self::NodeScoreTotal => "scheduler_normalized_node_score_total",
            Self::NodeScorePerPluginTotal => "scheduler_node_score_by_plugin_total",
            Self::NodeEligibleNum => "scheduler_node_eligible_num",
            Self::NodeEligibleCheckNum => "scheduler_node_eligible_check_num",
            Self::NodeScorePerPod => "scheduler_normalized_node_score_for_pod",
            Self::NodeFilterStatusPerPod => "scheduler_node_filter_status",
        }
    }

    /// Families keyed by a `plugin` label.
    pub fn requires_plugin(&self) -> bool {
        matches!(
            self,
            Self::NodeFilterPass
                | Self::NodeFilterAttempts
                | Self::NodeScorePerPluginTotal
                | Self::NodeScorePerPod
                | Self::NodeFilterStatusPerPod
        )
    }

    /// Families carrying a pod identity label.
    pub fn per_pod(&self) -> bool {
        matches!(self, Self::NodeScorePerPod | Self::NodeFilterStatusPerPod)
    }

    /// Normalized per-pod scores are read as floats; every other family is a
    /// counter and must carry an integral value.
    pub fn float_valued(&self) -> bool {
        matches!(self, Self::NodeScorePerPod)
    }
}
