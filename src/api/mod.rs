mod detail_view_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod filters;
mod focus_controller;
mod health;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod presentation;
mod scrub_controller;
mod snapshot_controller;
mod timeline_model;
mod timeline_runtime;
mod validation;
mod view_state;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use filters::{FilterGroup, FilterPanelState};
pub use health::{DEFAULT_SERVICE_NAME, HEALTH_ROUTE, HealthStatus};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use presentation::{
    EraStackMode, PresentationLayout, STACK_PREVIEW_LEN, classify_column_distance,
    max_visible_neighbors, rail_caption,
};
pub use view_state::FocusTarget;

pub use crate::extensions::{DetailCloseReason, PluginContext, PluginEvent, TimelinePlugin};
