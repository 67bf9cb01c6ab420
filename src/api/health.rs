use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::TimelineEngine;

pub const HEALTH_ROUTE: &str = "/health";
pub const DEFAULT_SERVICE_NAME: &str = "timeline-backend";

/// Liveness payload served at [`HEALTH_ROUTE`] by a host backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::ok(DEFAULT_SERVICE_NAME)
    }
}

impl HealthStatus {
    #[must_use]
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_owned(),
            service: service.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    pub fn to_json(&self) -> TimelineResult<String> {
        serde_json::to_string(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize health: {e}")))
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse health: {e}")))
    }
}

impl<R: Renderer> TimelineEngine<R> {
    /// Health payload for a backend embedding this engine.
    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus::default()
    }
}
