//! Render timing metrics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Metrics for a single mounted page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderMetrics {
    /// Route pattern the page was mounted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Render passes, including the initial one.
    pub passes: u64,
    /// Events dispatched to the page.
    pub events: u64,
    /// Patches applied after the initial render.
    pub patches: u64,
    /// Duration of the last render pass (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_render_us: Option<u64>,
    /// Sum of all render pass durations (microseconds).
    pub total_render_us: u64,
}

impl RenderMetrics {
    /// Metrics for a page mounted from `route`.
    pub fn for_route(route: impl Into<String>) -> Self {
        Self {
            route: Some(route.into()),
            ..Default::default()
        }
    }

    /// Record a render pass that produced `patches` patches.
    pub fn record_pass(&mut self, duration: Duration, patches: usize) {
        let us = duration.as_micros() as u64;
        self.passes += 1;
        self.patches += patches as u64;
        self.last_render_us = Some(us);
        self.total_render_us += us;
    }

    /// Record a dispatched event.
    pub fn record_event(&mut self) {
        self.events += 1;
    }

    /// Mean render duration, if any pass was recorded.
    pub fn mean_render_us(&self) -> Option<u64> {
        (self.passes > 0).then(|| self.total_render_us / self.passes)
    }

    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_pass() {
        let mut metrics = RenderMetrics::for_route("/");
        metrics.record_pass(Duration::from_micros(30), 0);
        metrics.record_pass(Duration::from_micros(10), 2);

        assert_eq!(metrics.passes, 2);
        assert_eq!(metrics.patches, 2);
        assert_eq!(metrics.last_render_us, Some(10));
        assert_eq!(metrics.total_render_us, 40);
        assert_eq!(metrics.mean_render_us(), Some(20));
    }

    #[test]
    fn test_mean_without_passes() {
        assert_eq!(RenderMetrics::default().mean_render_us(), None);
    }

    #[test]
    fn test_record_event() {
        let mut metrics = RenderMetrics::default();
        metrics.record_event();
        metrics.record_event();
        assert_eq!(metrics.events, 2);
    }

    #[test]
    fn test_json_skips_empty_fields() {
        let json = RenderMetrics::default().to_json();
        assert!(!json.contains("route"));
        assert!(!json.contains("last_render_us"));
        assert!(json.contains("\"passes\":0"));
    }
}
