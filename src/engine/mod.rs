//! Layout engine: the catalog handle plus the ambient concerns (logging,
//! metrics, scene defaults) wrapped around [`select_layout`].

use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::layout::{Layout, LayoutStrategy, RoomConfig, select_layout};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{MetricSnapshot, PlannerMetrics};
use crate::scene::{DEFAULT_WALL_HEIGHT, ScenePlan};

/// Configuration knobs for the engine.
#[derive(Clone)]
pub struct PlannerConfig {
    /// Optional structured logger used by the engine.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated after every request.
    pub metrics: Option<Arc<Mutex<PlannerMetrics>>>,
    /// Target field used on emitted log events.
    pub log_target: String,
    /// Wall height used when exporting scene plans, in meters.
    pub wall_height: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: "room_planner::layout".to_string(),
            wall_height: DEFAULT_WALL_HEIGHT,
        }
    }
}

impl PlannerConfig {
    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(PlannerMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<PlannerMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

/// Catalog-bound layout service.
pub struct LayoutEngine {
    catalog: Arc<Catalog>,
    config: PlannerConfig,
}

impl LayoutEngine {
    /// Bind a catalog, checking up front that every strategy's ids resolve.
    pub fn new(catalog: Arc<Catalog>) -> Result<Self> {
        Self::with_config(catalog, PlannerConfig::default())
    }

    pub fn with_config(catalog: Arc<Catalog>, config: PlannerConfig) -> Result<Self> {
        for strategy in LayoutStrategy::ALL {
            catalog.ensure_contains(strategy.archetype_ids().iter().copied())?;
        }
        Ok(Self { catalog, config })
    }

    pub fn builtin() -> Self {
        Self {
            catalog: Arc::new(Catalog::builtin()),
            config: PlannerConfig::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut PlannerConfig {
        &mut self.config
    }

    pub fn plan(&self, room: &RoomConfig) -> Result<Layout> {
        match select_layout(&self.catalog, room) {
            Ok(layout) => {
                self.report_layout(&layout);
                Ok(layout)
            }
            Err(err) => {
                self.emit(
                    LogLevel::Warn,
                    "layout.rejected",
                    [
                        json_str("room_type", room.room_type.as_str()),
                        json_kv("width", room.width),
                        json_kv("depth", room.depth),
                        json_str("error", err.to_string()),
                    ],
                );
                self.with_metrics(PlannerMetrics::record_rejection);
                Err(err)
            }
        }
    }

    /// Plan a room and export it for a renderer in one step.
    pub fn plan_scene(&self, room: &RoomConfig) -> Result<ScenePlan> {
        let layout = self.plan(room)?;
        Ok(ScenePlan::from_layout(&layout, self.config.wall_height))
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let handle = self.config.metrics.as_ref()?;
        handle.lock().ok().map(|metrics| metrics.snapshot())
    }

    /// Emit the current metrics snapshot through the logger, if both exist.
    pub fn log_metrics(&self) {
        if let (Some(logger), Some(snapshot)) = (&self.config.logger, self.metrics_snapshot()) {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.log_target));
        }
    }

    fn report_layout(&self, layout: &Layout) {
        self.emit(
            LogLevel::Debug,
            "layout.strategy_selected",
            [
                json_str("strategy", layout.strategy.name()),
                json_str("room_type", layout.room.room_type.as_str()),
                json_kv("width", layout.room.width),
                json_kv("depth", layout.room.depth),
            ],
        );
        for omission in &layout.omitted {
            self.emit(
                LogLevel::Debug,
                "layout.item_omitted",
                [
                    json_str("id", omission.id.clone()),
                    json_str("reason", omission.reason.to_string()),
                ],
            );
        }
        self.emit(
            LogLevel::Info,
            "layout.generated",
            [
                json_str("strategy", layout.strategy.name()),
                json_kv("items", layout.len()),
                json_kv("omitted", layout.omitted.len()),
                json_kv("total_price", layout.total_price()),
                json_kv("fingerprint", json!(layout.fingerprint().to_hex().as_str())),
            ],
        );
        self.with_metrics(|metrics| metrics.record_layout(layout));
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.config.logger {
            if !logger.enabled(level) {
                return;
            }
            let event = event_with_fields(level, &self.config.log_target, message, fields);
            let _ = logger.log_event(event);
        }
    }

    fn with_metrics(&self, update: impl FnOnce(&mut PlannerMetrics)) {
        if let Some(handle) = &self.config.metrics {
            if let Ok(mut metrics) = handle.lock() {
                update(&mut metrics);
            }
        }
    }
}
