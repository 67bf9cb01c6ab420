use serde::{Deserialize, Serialize};

use crate::core::TimelineEvent;
use crate::core::event_index::group_by_year;
use crate::core::year::{format_year_label, is_major_year};

/// Upper bound on ticks per timeline; every tick owns its labels and events.
pub const MAX_TICK_COUNT: usize = 100_001;

/// One selectable unit of the dial, one per year.
///
/// Ticks are derived data: they are rebuilt whenever bounds, step or the
/// event source change and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineTick {
    pub id: String,
    pub year: i32,
    pub label: String,
    pub is_major: bool,
    pub events: Vec<TimelineEvent>,
}

/// Builds one tick per year in `[min_year, max_year]`.
///
/// Each tick carries the events whose representative year equals the tick
/// year, in source order. An inverted range yields no ticks.
#[must_use]
pub fn build_timeline_ticks(
    min_year: i32,
    max_year: i32,
    events: &[TimelineEvent],
    major_tick_step: i32,
) -> Vec<TimelineTick> {
    if min_year > max_year {
        return Vec::new();
    }

    let buckets = group_by_year(events);
    (min_year..=max_year)
        .map(|year| TimelineTick {
            id: format!("tick-{year}"),
            year,
            label: format_year_label(year),
            is_major: is_major_year(year, major_tick_step),
            events: buckets
                .get(&year)
                .map(|bucket| bucket.iter().map(|&event| event.clone()).collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// Clamps a signed candidate index into `[0, len - 1]`; an empty list yields `0`.
#[must_use]
pub fn clamp_index(index: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = i64::try_from(len - 1).unwrap_or(i64::MAX);
    // Non-negative and <= last, so it fits in usize.
    index.clamp(0, last) as usize
}

/// Index of the tick whose year is closest to `target_year`.
///
/// Ties resolve to the earliest tick; an empty list yields `0`.
#[must_use]
pub fn nearest_tick_index(ticks: &[TimelineTick], target_year: i32) -> usize {
    let mut closest = 0;
    let mut smallest = u32::MAX;
    for (idx, tick) in ticks.iter().enumerate() {
        let distance = tick.year.abs_diff(target_year);
        if distance < smallest {
            smallest = distance;
            closest = idx;
        }
    }
    closest
}
