use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_SEARCH_RADIUS, ScrubGeometry};
use crate::error::{TimelineError, TimelineResult};

use super::EraStackMode;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load dial setup
/// without inventing their own ad-hoc format. Omitted fields fall back to the
/// explorer defaults (`-200..=200`, 25-year eras, focus on 120 CE).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
    #[serde(default = "default_era_step")]
    pub era_step: i32,
    #[serde(default = "default_initial_focus_year")]
    pub initial_focus_year: i32,
    #[serde(default)]
    pub geometry: ScrubGeometry,
    #[serde(default)]
    pub era_stack_mode: EraStackMode,
    #[serde(default = "default_search_radius")]
    pub search_radius: u32,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self::new(default_min_year(), default_max_year())
    }
}

impl TimelineEngineConfig {
    /// Creates a config for an explicit year range with default step and geometry.
    #[must_use]
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year,
            max_year,
            era_step: default_era_step(),
            initial_focus_year: default_initial_focus_year(),
            geometry: ScrubGeometry::default(),
            era_stack_mode: EraStackMode::default(),
            search_radius: default_search_radius(),
        }
    }

    #[must_use]
    pub fn with_era_step(mut self, era_step: i32) -> Self {
        self.era_step = era_step;
        self
    }

    /// Sets the year focused at startup; it is clamped into the bounds.
    #[must_use]
    pub fn with_initial_focus_year(mut self, year: i32) -> Self {
        self.initial_focus_year = year;
        self
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: ScrubGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_era_stack_mode(mut self, mode: EraStackMode) -> Self {
        self.era_stack_mode = mode;
        self
    }

    #[must_use]
    pub fn with_search_radius(mut self, radius: u32) -> Self {
        self.search_radius = radius;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_min_year() -> i32 {
    -200
}

fn default_max_year() -> i32 {
    200
}

fn default_era_step() -> i32 {
    25
}

fn default_initial_focus_year() -> i32 {
    120
}

fn default_search_radius() -> u32 {
    DEFAULT_SEARCH_RADIUS
}
