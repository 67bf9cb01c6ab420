use tracing::debug;

use crate::core::{
    EventIndex, FocusController, ScenarioCatalog, TimelineEvent, UnitLayout,
    build_timeline_ticks, fixtures, nearest_tick_index,
};
use crate::error::TimelineResult;
use crate::interaction::ScrubState;
use crate::render::Renderer;

use super::validation::{validate_engine_config, validate_events};
use super::{
    TimelineEngine, TimelineEngineConfig, engine_core::EngineCore, timeline_model::TimelineModel,
    timeline_runtime::TimelineRuntimeState, view_state::ViewState,
};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine over the bundled sample events and scenarios.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        Self::with_data(
            renderer,
            config,
            fixtures::sample_events(),
            fixtures::sample_scenario_catalog()?,
        )
    }

    /// Creates an engine over a caller-supplied event source and catalog.
    pub fn with_data(
        renderer: R,
        config: TimelineEngineConfig,
        events: Vec<TimelineEvent>,
        catalog: ScenarioCatalog,
    ) -> TimelineResult<Self> {
        let config = validate_engine_config(config)?;
        validate_events(&events)?;

        let mut focus =
            FocusController::new(config.min_year, config.max_year, config.initial_focus_year)?;
        let index = EventIndex::new(events, config.era_step);
        let ticks = build_timeline_ticks(
            config.min_year,
            config.max_year,
            index.events(),
            config.era_step,
        );
        let start_index = nearest_tick_index(&ticks, config.initial_focus_year);
        focus.set_active_tick_index(i64::try_from(start_index).unwrap_or(i64::MAX));
        let layout = UnitLayout::new(config.geometry, ticks.len());

        debug!(
            min_year = config.min_year,
            max_year = config.max_year,
            era_step = config.era_step,
            focus_year = focus.focus_year(),
            events = index.len(),
            "timeline engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                model: TimelineModel {
                    config,
                    focus,
                    index,
                    catalog,
                    ticks,
                    layout,
                    scrub: ScrubState::default(),
                    container_width_px: 0.0,
                    content_width_px: None,
                },
                view: ViewState::default(),
                runtime: TimelineRuntimeState::default(),
            },
        })
    }
}
