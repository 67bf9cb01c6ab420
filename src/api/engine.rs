use crate::core::{BestMatch, EventIndex, MapScenario, ScenarioCatalog, TimelineTick};
use crate::error::TimelineResult;
use crate::render::{PresentationFrame, Renderer};

use super::{PluginEvent, PresentationLayout, TimelineEngineConfig, engine_core::EngineCore};

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` owns focus, event index, scenario catalog, scrub surface
/// and detail view state, and hands derived frames to the renderer.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        self.core.model.config
    }

    #[must_use]
    pub fn ticks(&self) -> &[TimelineTick] {
        &self.core.model.ticks
    }

    #[must_use]
    pub fn event_index(&self) -> &EventIndex {
        &self.core.model.index
    }

    #[must_use]
    pub fn scenario_catalog(&self) -> &ScenarioCatalog {
        &self.core.model.catalog
    }

    /// Scenario shown by the map panel for the current focus.
    #[must_use]
    pub fn active_scenario(&self) -> &MapScenario {
        self.core.model.catalog.resolve(self.focus_year())
    }

    #[must_use]
    pub fn best_match(&self) -> BestMatch {
        self.core.model.index.best_match(self.focus_year())
    }

    /// Derives the frame for the current state without rendering it.
    #[must_use]
    pub fn presentation_frame(&self) -> PresentationFrame {
        let model = &self.core.model;
        let view = &self.core.view;
        PresentationLayout {
            focus_year: model.focus.focus_year(),
            active_tick_index: model.focus.active_tick_index(),
            index: &model.index,
            catalog: &model.catalog,
            ticks: &model.ticks,
            era_stack_mode: model.config.era_stack_mode,
            highlights: &view.highlights,
            filters: &view.filters,
            detail_event: view
                .detail
                .as_ref()
                .and_then(|detail| model.index.event_by_id(&detail.event_id)),
            background_scroll_locked: view.background_scroll_locked,
        }
        .build()
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.presentation_frame();
        self.renderer.render(&frame)?;
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
