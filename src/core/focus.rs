use serde::{Deserialize, Serialize};

use crate::core::ticks::{MAX_TICK_COUNT, clamp_index};
use crate::core::year::clamp_year;
use crate::error::{TimelineError, TimelineResult};

/// Observable focus transition returned by every successful setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusChange {
    pub previous_year: i32,
    pub focus_year: i32,
}

/// Single source of truth for the focused year.
///
/// The focus year is always inside `[min_year, max_year]`. The active tick
/// index is derived from it (one tick per year), so the two can never drift
/// apart. Setters return `None` when the clamped candidate equals the
/// current value; callers must not treat that as a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusController {
    min_year: i32,
    max_year: i32,
    focus_year: i32,
}

impl FocusController {
    pub fn new(min_year: i32, max_year: i32, initial_focus_year: i32) -> TimelineResult<Self> {
        validate_year_bounds(min_year, max_year)?;
        Ok(Self {
            min_year,
            max_year,
            focus_year: clamp_year(initial_focus_year, min_year, max_year),
        })
    }

    #[must_use]
    pub fn focus_year(self) -> i32 {
        self.focus_year
    }

    #[must_use]
    pub fn min_year(self) -> i32 {
        self.min_year
    }

    #[must_use]
    pub fn max_year(self) -> i32 {
        self.max_year
    }

    #[must_use]
    pub fn bounds(self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        let span = i64::from(self.max_year) - i64::from(self.min_year) + 1;
        usize::try_from(span).unwrap_or(0)
    }

    #[must_use]
    pub fn active_tick_index(self) -> usize {
        let offset = i64::from(self.focus_year) - i64::from(self.min_year);
        clamp_index(offset, self.tick_count())
    }

    #[must_use]
    pub fn is_at_min(self) -> bool {
        self.focus_year == self.min_year
    }

    #[must_use]
    pub fn is_at_max(self) -> bool {
        self.focus_year == self.max_year
    }

    /// Stores the clamped candidate.
    pub fn set_focus_year(&mut self, candidate: i32) -> Option<FocusChange> {
        let next = clamp_year(candidate, self.min_year, self.max_year);
        if next == self.focus_year {
            return None;
        }
        let previous_year = self.focus_year;
        self.focus_year = next;
        Some(FocusChange {
            previous_year,
            focus_year: next,
        })
    }

    /// Moves focus to the tick at `candidate`, clamped to the tick range.
    pub fn set_active_tick_index(&mut self, candidate: i64) -> Option<FocusChange> {
        let index = clamp_index(candidate, self.tick_count());
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        let year = i64::from(self.min_year).saturating_add(index);
        self.set_focus_year(i32::try_from(year).unwrap_or(self.max_year))
    }

    /// Moves focus by `delta` years through the clamped setter.
    pub fn nudge(&mut self, delta: i32) -> Option<FocusChange> {
        self.set_focus_year(self.focus_year.saturating_add(delta))
    }

    /// Installs new bounds and re-clamps the active tick index into them.
    pub fn reconfigure(
        &mut self,
        min_year: i32,
        max_year: i32,
    ) -> TimelineResult<Option<FocusChange>> {
        validate_year_bounds(min_year, max_year)?;
        let previous_index = i64::from(self.focus_year) - i64::from(self.min_year);
        let previous_year = self.focus_year;

        self.min_year = min_year;
        self.max_year = max_year;
        self.focus_year = min_year;
        self.set_active_tick_index(previous_index);

        if self.focus_year == previous_year {
            return Ok(None);
        }
        Ok(Some(FocusChange {
            previous_year,
            focus_year: self.focus_year,
        }))
    }
}

/// Bounds must be increasing and span at most [`MAX_TICK_COUNT`] years.
pub fn validate_year_bounds(min_year: i32, max_year: i32) -> TimelineResult<()> {
    if min_year >= max_year {
        return Err(TimelineError::InvalidConfig(format!(
            "min_year ({min_year}) must be < max_year ({max_year})"
        )));
    }
    let span = i64::from(max_year) - i64::from(min_year) + 1;
    if !usize::try_from(span).is_ok_and(|count| count <= MAX_TICK_COUNT) {
        return Err(TimelineError::InvalidConfig(format!(
            "year span {min_year}..={max_year} exceeds {MAX_TICK_COUNT} ticks"
        )));
    }
    Ok(())
}
