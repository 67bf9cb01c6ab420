pub mod event;
pub mod event_index;
pub mod fixtures;
pub mod focus;
pub mod scenario;
pub mod scroll_geometry;
pub mod ticks;
pub mod year;

pub use event::{TimelineEvent, representative_year};
pub use event_index::{
    BestMatch, DEFAULT_SEARCH_RADIUS, EventIndex, MAX_SEARCH_RADIUS, best_match_for_year,
    group_by_era_anchor, group_by_year, nearest_within_radius,
};
pub use focus::{FocusChange, FocusController, validate_year_bounds};
pub use scenario::{MapScenario, ScenarioCatalog};
pub use scroll_geometry::{
    ScrubGeometry, UnitBounds, UnitLayout, centering_scroll_px, max_scroll_px,
};
pub use ticks::{
    MAX_TICK_COUNT, TimelineTick, build_timeline_ticks, clamp_index, nearest_tick_index,
};
pub use year::{
    clamp_year, era_anchor, era_window_label, format_year_label, format_year_range,
    is_major_year, normalize_era_step,
};
