use tracing::debug;

use crate::core::{
    EventIndex, FocusChange, ScenarioCatalog, ScrubGeometry, TimelineEvent, build_timeline_ticks,
    nearest_tick_index, normalize_era_step, validate_year_bounds,
};
use crate::error::TimelineResult;
use crate::interaction::ScrollBehavior;
use crate::render::Renderer;

use super::validation::{validate_events, validate_search_radius};
use super::{DetailCloseReason, EraStackMode, PluginEvent, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn focus_year(&self) -> i32 {
        self.core.model.focus.focus_year()
    }

    #[must_use]
    pub fn active_tick_index(&self) -> usize {
        self.core.model.focus.active_tick_index()
    }

    #[must_use]
    pub fn year_bounds(&self) -> (i32, i32) {
        self.core.model.focus.bounds()
    }

    #[must_use]
    pub fn era_step(&self) -> i32 {
        self.core.model.index.era_step()
    }

    /// Programmatic focus change.
    ///
    /// The candidate is clamped into the bounds. Returns `false` and emits
    /// nothing when the clamped value equals the current focus. A committed
    /// change is followed by a smooth centering scroll unless a drag owns
    /// the surface.
    pub fn set_focus_year(&mut self, year: i32) -> bool {
        let change = self.core.model.focus.set_focus_year(year);
        self.commit_programmatic(change)
    }

    /// Same as [`Self::set_focus_year`], addressed by tick index.
    pub fn set_active_tick_index(&mut self, index: i64) -> bool {
        let change = self.core.model.focus.set_active_tick_index(index);
        self.commit_programmatic(change)
    }

    fn commit_programmatic(&mut self, change: Option<FocusChange>) -> bool {
        let changed = self.emit_focus_changed(change);
        if changed && !self.is_dragging() {
            self.center_active_unit(ScrollBehavior::Smooth);
        }
        changed
    }

    /// Replaces the year bounds.
    ///
    /// Ticks regenerate, the active index is re-clamped into the new range
    /// and focus then resets to the tick nearest the configured initial
    /// focus year. The net change is reported once.
    pub fn set_year_bounds(&mut self, min_year: i32, max_year: i32) -> TimelineResult<bool> {
        validate_year_bounds(min_year, max_year)?;
        if self.year_bounds() == (min_year, max_year) {
            return Ok(false);
        }

        let previous_year = self.focus_year();
        self.core.model.focus.reconfigure(min_year, max_year)?;
        self.core.model.config.min_year = min_year;
        self.core.model.config.max_year = max_year;
        self.regenerate_ticks();
        Ok(self.reset_focus_to_initial(previous_year))
    }

    /// Changes the year focused on startup and moves focus to its tick.
    pub fn set_initial_focus_year(&mut self, year: i32) -> bool {
        if self.core.model.config.initial_focus_year == year {
            return false;
        }
        self.core.model.config.initial_focus_year = year;
        let previous_year = self.focus_year();
        self.reset_focus_to_initial(previous_year)
    }

    fn reset_focus_to_initial(&mut self, previous_year: i32) -> bool {
        let model = &mut self.core.model;
        let target = nearest_tick_index(&model.ticks, model.config.initial_focus_year);
        model
            .focus
            .set_active_tick_index(i64::try_from(target).unwrap_or(i64::MAX));

        let focus_year = model.focus.focus_year();
        let change = (focus_year != previous_year).then_some(FocusChange {
            previous_year,
            focus_year,
        });
        let changed = self.emit_focus_changed(change);
        if !self.is_dragging() {
            self.center_active_unit(ScrollBehavior::Smooth);
        }
        changed
    }

    /// Changes the era width. Values below 1 are treated as 1.
    pub fn set_era_step(&mut self, era_step: i32) -> bool {
        let era_step = normalize_era_step(era_step);
        if era_step == self.era_step() {
            return false;
        }
        let events = self.core.model.index.events().to_vec();
        self.core.model.index = EventIndex::new(events, era_step);
        self.core.model.config.era_step = era_step;
        self.regenerate_ticks();
        true
    }

    /// Replaces the event source.
    ///
    /// Highlights pointing at vanished events are dropped and an open detail
    /// view for a vanished event is closed.
    pub fn set_events(&mut self, events: Vec<TimelineEvent>) -> TimelineResult<()> {
        validate_events(&events)?;
        self.core.model.index = EventIndex::new(events, self.era_step());
        self.regenerate_ticks();

        let detail_gone = self
            .core
            .view
            .detail
            .as_ref()
            .is_some_and(|detail| self.core.model.index.event_by_id(&detail.event_id).is_none());
        if detail_gone {
            self.close_detail(DetailCloseReason::EventRemoved);
        }
        Ok(())
    }

    pub fn set_scenario_catalog(&mut self, catalog: ScenarioCatalog) {
        self.core.model.catalog = catalog;
    }

    pub fn set_era_stack_mode(&mut self, mode: EraStackMode) {
        self.core.model.config.era_stack_mode = mode;
    }

    /// Radii above [`crate::core::MAX_SEARCH_RADIUS`] are rejected.
    pub fn set_search_radius(&mut self, radius: u32) -> TimelineResult<()> {
        self.core.model.config.search_radius = validate_search_radius(radius)?;
        Ok(())
    }

    /// Event nearest the focus within the configured search radius.
    #[must_use]
    pub fn nearest_event(&self) -> Option<&TimelineEvent> {
        let model = &self.core.model;
        model
            .index
            .nearest_within_radius(model.focus.focus_year(), model.config.search_radius)
    }

    /// Swaps the unit geometry; measurements are dropped.
    pub fn set_geometry(&mut self, geometry: ScrubGeometry) -> TimelineResult<()> {
        let geometry = geometry.validate()?;
        let model = &mut self.core.model;
        model.config.geometry = geometry;
        model.layout.reset(geometry, model.ticks.len());
        model.content_width_px = None;
        self.sync_scroll_to_focus();
        Ok(())
    }

    /// Rebuilds ticks and the unit layout from bounds, step and events.
    fn regenerate_ticks(&mut self) {
        let model = &mut self.core.model;
        let (min_year, max_year) = model.focus.bounds();
        model.ticks = build_timeline_ticks(
            min_year,
            max_year,
            model.index.events(),
            model.index.era_step(),
        );
        model.layout.reset(model.config.geometry, model.ticks.len());
        model.content_width_px = None;

        let ticks = &model.ticks;
        self.core.view.highlights.retain(|year, event_id| {
            ticks
                .iter()
                .find(|tick| tick.year == *year)
                .is_some_and(|tick| tick.events.iter().any(|event| event.id == *event_id))
        });

        let tick_count = model.ticks.len();
        debug!(min_year, max_year, tick_count, "ticks regenerated");
        self.emit_plugin_event(PluginEvent::TicksRegenerated { tick_count });
        self.sync_scroll_to_focus();
    }
}
