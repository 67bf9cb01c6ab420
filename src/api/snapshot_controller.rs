use crate::core::format_year_label;
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{EngineSnapshot, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        let view = &self.core.view;
        let focus_year = model.focus.focus_year();
        EngineSnapshot {
            focus_year,
            focus_label: format_year_label(focus_year),
            year_bounds: model.focus.bounds(),
            era_step: model.index.era_step(),
            active_tick_index: model.focus.active_tick_index(),
            tick_count: model.ticks.len(),
            scrub_mode: model.scrub.mode(),
            scroll_left_px: model.scrub.scroll_left_px(),
            scenario_id: model.catalog.resolve(focus_year).id.clone(),
            best_match: model.index.best_match(focus_year),
            nearest_event_id: self.nearest_event().map(|event| event.id.clone()),
            highlights: view.highlights.clone(),
            detail_event_id: view.detail.as_ref().map(|detail| detail.event_id.clone()),
            keyboard_focus: view.keyboard_focus.clone(),
            background_scroll_locked: view.background_scroll_locked,
            active_filters: view
                .filters
                .active_labels()
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
