use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BestMatch, validate_year_bounds};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::ScrubMode;

use super::FocusTarget;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub focus_year: i32,
    pub focus_label: String,
    pub year_bounds: (i32, i32),
    pub era_step: i32,
    pub active_tick_index: usize,
    pub tick_count: usize,
    pub scrub_mode: ScrubMode,
    pub scroll_left_px: f64,
    pub scenario_id: String,
    pub best_match: BestMatch,
    pub nearest_event_id: Option<String>,
    pub highlights: IndexMap<i32, String>,
    pub detail_event_id: Option<String>,
    pub keyboard_focus: FocusTarget,
    pub background_scroll_locked: bool,
    pub active_filters: Vec<String>,
}

impl EngineSnapshot {
    /// Checks that focus, tick index and tick count agree with the bounds.
    pub fn validate(&self) -> TimelineResult<()> {
        let (min_year, max_year) = self.year_bounds;
        validate_year_bounds(min_year, max_year)
            .map_err(|e| TimelineError::InvalidData(format!("snapshot bounds: {e}")))?;
        if self.focus_year < min_year || self.focus_year > max_year {
            return Err(TimelineError::InvalidData(format!(
                "snapshot focus_year {} lies outside {min_year}..={max_year}",
                self.focus_year
            )));
        }

        let span = i64::from(max_year) - i64::from(min_year) + 1;
        let offset = i64::from(self.focus_year) - i64::from(min_year);
        if i64::try_from(self.tick_count).ok() != Some(span) {
            return Err(TimelineError::InvalidData(format!(
                "snapshot tick_count {} does not match {span} years",
                self.tick_count
            )));
        }
        if i64::try_from(self.active_tick_index).ok() != Some(offset) {
            return Err(TimelineError::InvalidData(format!(
                "snapshot active_tick_index {} does not point at focus_year {}",
                self.active_tick_index, self.focus_year
            )));
        }
        if self.era_step < 1 {
            return Err(TimelineError::InvalidData(format!(
                "snapshot era_step {} must be >= 1",
                self.era_step
            )));
        }
        Ok(())
    }
}
