use std::collections::BTreeMap;

use crate::layout::{Layout, LayoutStrategy};
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a [`crate::LayoutEngine`].
#[derive(Debug, Default, Clone)]
pub struct PlannerMetrics {
    layouts: u64,
    items_placed: u64,
    items_omitted: u64,
    rejected: u64,
    strategies: BTreeMap<&'static str, u64>,
}

impl PlannerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layout(&mut self, layout: &Layout) {
        self.layouts = self.layouts.saturating_add(1);
        self.items_placed = self.items_placed.saturating_add(layout.len() as u64);
        self.items_omitted = self
            .items_omitted
            .saturating_add(layout.omitted.len() as u64);
        self.record_strategy(layout.strategy);
    }

    pub fn record_rejection(&mut self) {
        self.rejected = self.rejected.saturating_add(1);
    }

    fn record_strategy(&mut self, strategy: LayoutStrategy) {
        let count = self.strategies.entry(strategy.name()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            layouts: self.layouts,
            items_placed: self.items_placed,
            items_omitted: self.items_omitted,
            rejected: self.rejected,
            strategies: self.strategies.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricSnapshot {
    pub layouts: u64,
    pub items_placed: u64,
    pub items_omitted: u64,
    pub rejected: u64,
    pub strategies: BTreeMap<&'static str, u64>,
}

impl MetricSnapshot {
    pub fn strategy_count(&self, strategy: LayoutStrategy) -> u64 {
        self.strategies.get(strategy.name()).copied().unwrap_or(0)
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("layouts".to_string(), json!(self.layouts));
        map.insert("items_placed".to_string(), json!(self.items_placed));
        map.insert("items_omitted".to_string(), json!(self.items_omitted));
        map.insert("rejected".to_string(), json!(self.rejected));
        map.insert("strategies".to_string(), json!(self.strategies));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "planner_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, RoomType};
    use crate::layout::{RoomConfig, select_layout};

    #[test]
    fn snapshot_counts_layouts_and_strategies() {
        let catalog = Catalog::builtin();
        let mut metrics = PlannerMetrics::new();
        let spacious = select_layout(&catalog, &RoomConfig::new(4.0, 3.5, RoomType::Bedroom)).unwrap();
        let narrow = select_layout(&catalog, &RoomConfig::new(1.2, 2.4, RoomType::Bedroom)).unwrap();
        metrics.record_layout(&spacious);
        metrics.record_layout(&narrow);
        metrics.record_rejection();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.layouts, 2);
        assert_eq!(snapshot.items_placed, 6);
        assert_eq!(snapshot.items_omitted, 3);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.strategy_count(LayoutStrategy::SpaciousBedroom), 1);
        assert_eq!(snapshot.strategy_count(LayoutStrategy::Office), 0);
    }

    #[test]
    fn snapshot_becomes_a_log_event() {
        let snapshot = PlannerMetrics::new().snapshot();
        let event = snapshot.to_log_event("room_planner::metrics");
        assert_eq!(event.message, "planner_metrics");
        assert_eq!(event.field("layouts"), Some(&json!(0)));
    }
}
