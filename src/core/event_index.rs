use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::TimelineEvent;
use crate::core::year::{era_anchor, normalize_era_step};

/// Default radius, in years, searched around a focus year with no exact hit.
pub const DEFAULT_SEARCH_RADIUS: u32 = 5;

/// Largest radius a nearest-event search will scan.
pub const MAX_SEARCH_RADIUS: u32 = 1_000;

/// Result of [`best_match_for_year`].
///
/// `anchor` is always reported so callers can render an empty-era
/// placeholder when `event_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMatch {
    pub anchor: i32,
    pub event_id: Option<String>,
}

/// Groups events by representative year, preserving source order per bucket.
#[must_use]
pub fn group_by_year(events: &[TimelineEvent]) -> IndexMap<i32, Vec<&TimelineEvent>> {
    let mut buckets: IndexMap<i32, Vec<&TimelineEvent>> = IndexMap::new();
    for event in events {
        buckets
            .entry(event.representative_year())
            .or_default()
            .push(event);
    }
    buckets
}

/// Groups events by the era anchor of their representative year.
#[must_use]
pub fn group_by_era_anchor(
    events: &[TimelineEvent],
    step: i32,
) -> IndexMap<i32, Vec<&TimelineEvent>> {
    let step = normalize_era_step(step);
    let mut buckets: IndexMap<i32, Vec<&TimelineEvent>> = IndexMap::new();
    for event in events {
        buckets
            .entry(era_anchor(event.representative_year(), step))
            .or_default()
            .push(event);
    }
    buckets
}

/// Picks the event that best represents `focus_year`.
///
/// Priority: an exact representative-year hit anywhere in `events`, then the
/// closest event inside the focus era (first occurrence wins ties), then no
/// match.
#[must_use]
pub fn best_match_for_year(events: &[TimelineEvent], focus_year: i32, step: i32) -> BestMatch {
    let step = normalize_era_step(step);
    let anchor = era_anchor(focus_year, step);

    if let Some(exact) = events
        .iter()
        .find(|event| event.representative_year() == focus_year)
    {
        return BestMatch {
            anchor,
            event_id: Some(exact.id.clone()),
        };
    }

    let mut closest: Option<(u32, &TimelineEvent)> = None;
    for event in events {
        let year = event.representative_year();
        if era_anchor(year, step) != anchor {
            continue;
        }
        let distance = year.abs_diff(focus_year);
        match closest {
            Some((best, _)) if best <= distance => {}
            _ => closest = Some((distance, event)),
        }
    }

    BestMatch {
        anchor,
        event_id: closest.map(|(_, event)| event.id.clone()),
    }
}

/// Finds the first event of the nearest non-empty bucket within `radius`.
///
/// At each offset the earlier year is checked before the later one.
#[must_use]
pub fn nearest_within_radius<'a>(
    buckets: &IndexMap<i32, Vec<&'a TimelineEvent>>,
    focus_year: i32,
    radius: u32,
) -> Option<&'a TimelineEvent> {
    search_outward(focus_year, radius, |year| {
        buckets.get(&year).and_then(|bucket| bucket.first().copied())
    })
}

/// Probes `focus_year`, then `focus - k` and `focus + k` for growing `k`.
///
/// Radii above [`MAX_SEARCH_RADIUS`] are clamped.
fn search_outward<'a>(
    focus_year: i32,
    radius: u32,
    first_in: impl Fn(i32) -> Option<&'a TimelineEvent>,
) -> Option<&'a TimelineEvent> {
    if let Some(event) = first_in(focus_year) {
        return Some(event);
    }

    let radius = i32::try_from(radius.min(MAX_SEARCH_RADIUS)).unwrap_or(0);
    for offset in 1..=radius {
        if let Some(event) = focus_year.checked_sub(offset).and_then(&first_in) {
            return Some(event);
        }
        if let Some(event) = focus_year.checked_add(offset).and_then(&first_in) {
            return Some(event);
        }
    }

    None
}

/// Owned event source with year and era buckets precomputed for one step.
///
/// Buckets hold indices into `events`, so the index is cheap to clone and
/// rebuild when the era step changes.
#[derive(Debug, Clone, PartialEq)]
pub struct EventIndex {
    events: Vec<TimelineEvent>,
    era_step: i32,
    by_year: IndexMap<i32, Vec<usize>>,
    by_era: IndexMap<i32, Vec<usize>>,
}

impl EventIndex {
    #[must_use]
    pub fn new(events: Vec<TimelineEvent>, era_step: i32) -> Self {
        let era_step = normalize_era_step(era_step);
        let mut by_year: IndexMap<i32, Vec<usize>> = IndexMap::new();
        let mut by_era: IndexMap<i32, Vec<usize>> = IndexMap::new();
        for (idx, event) in events.iter().enumerate() {
            let year = event.representative_year();
            by_year.entry(year).or_default().push(idx);
            by_era
                .entry(era_anchor(year, era_step))
                .or_default()
                .push(idx);
        }
        Self {
            events,
            era_step,
            by_year,
            by_era,
        }
    }

    /// Rebuilds the era buckets for a new step.
    #[must_use]
    pub fn with_era_step(self, era_step: i32) -> Self {
        Self::new(self.events, era_step)
    }

    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn era_step(&self) -> i32 {
        self.era_step
    }

    #[must_use]
    pub fn event_by_id(&self, id: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events whose representative year equals `year`, in source order.
    #[must_use]
    pub fn year_bucket(&self, year: i32) -> Vec<&TimelineEvent> {
        self.resolve(self.by_year.get(&year))
    }

    /// Events whose representative year falls in `[anchor, anchor + step)`.
    #[must_use]
    pub fn era_bucket(&self, anchor: i32) -> Vec<&TimelineEvent> {
        self.resolve(self.by_era.get(&anchor))
    }

    #[must_use]
    pub fn best_match(&self, focus_year: i32) -> BestMatch {
        best_match_for_year(&self.events, focus_year, self.era_step)
    }

    #[must_use]
    pub fn nearest_within_radius(&self, focus_year: i32, radius: u32) -> Option<&TimelineEvent> {
        search_outward(focus_year, radius, |year| {
            self.by_year
                .get(&year)
                .and_then(|bucket| bucket.first())
                .map(|&idx| &self.events[idx])
        })
    }

    fn resolve(&self, bucket: Option<&Vec<usize>>) -> Vec<&TimelineEvent> {
        bucket
            .map(|indices| indices.iter().map(|&idx| &self.events[idx]).collect())
            .unwrap_or_default()
    }
}
