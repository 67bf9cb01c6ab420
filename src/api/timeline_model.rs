use crate::core::{
    EventIndex, FocusController, ScenarioCatalog, TimelineTick, UnitLayout, max_scroll_px,
};
use crate::interaction::ScrubState;

use super::TimelineEngineConfig;

/// Core timeline domain state: focus, data sources and scrub surface.
///
/// Ticks and the unit layout are derived from `config`, `focus` bounds and
/// `index`; they are rebuilt together and never patched in place.
pub(super) struct TimelineModel {
    pub(super) config: TimelineEngineConfig,
    pub(super) focus: FocusController,
    pub(super) index: EventIndex,
    pub(super) catalog: ScenarioCatalog,
    pub(super) ticks: Vec<TimelineTick>,
    pub(super) layout: UnitLayout,
    pub(super) scrub: ScrubState,
    pub(super) container_width_px: f64,
    pub(super) content_width_px: Option<f64>,
}

impl TimelineModel {
    /// Content width reported by the host, else the fixed-geometry estimate.
    #[must_use]
    pub(super) fn content_width_px(&self) -> f64 {
        self.content_width_px
            .unwrap_or_else(|| self.layout.fallback_content_width_px())
    }

    #[must_use]
    pub(super) fn max_scroll_px(&self) -> f64 {
        max_scroll_px(self.content_width_px(), self.container_width_px)
    }

    #[must_use]
    pub(super) fn active_tick(&self) -> Option<&TimelineTick> {
        self.ticks.get(self.focus.active_tick_index())
    }
}
