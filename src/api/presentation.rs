use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    EventIndex, ScenarioCatalog, TimelineEvent, TimelineTick, era_anchor, era_window_label,
    format_year_label, format_year_range,
};
use crate::render::{
    ColumnDistance, DetailPanelView, EraPosition, EraStackView, EventCardView,
    FocusPlaceholderView, MapPanelView, PresentationFrame, RailColumnView,
};

use super::FilterPanelState;

/// Cards shown in full per era stack before the overflow summary.
pub const STACK_PREVIEW_LEN: usize = 2;

/// How many era windows the card column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EraStackMode {
    /// Focus era only.
    Single,
    /// Previous, current and next era.
    #[default]
    Three,
}

impl EraStackMode {
    fn positions(self) -> SmallVec<[EraPosition; 3]> {
        match self {
            Self::Single => SmallVec::from_slice(&[EraPosition::Current]),
            Self::Three => SmallVec::from_slice(&[
                EraPosition::Previous,
                EraPosition::Current,
                EraPosition::Next,
            ]),
        }
    }
}

/// Number of columns on each side of the active one that stay visible.
///
/// Grows with the era step: one per twelve years, between 1 and 3.
#[must_use]
pub fn max_visible_neighbors(era_step: i32) -> usize {
    let step = i64::from(era_step.max(1));
    let derived = ((step + 6) / 12).clamp(1, 3);
    usize::try_from(derived).unwrap_or(1)
}

#[must_use]
pub fn classify_column_distance(distance: usize, max_visible: usize) -> ColumnDistance {
    match distance {
        0 => ColumnDistance::Active,
        1 | 2 => ColumnDistance::Neighbor,
        d if d <= max_visible => ColumnDistance::Distant,
        _ => ColumnDistance::Hidden,
    }
}

/// Caption under the active rail column.
#[must_use]
pub fn rail_caption(tick: &TimelineTick) -> String {
    match tick.events.len() {
        0 => format!("No events for {}", tick.label),
        1 => format!("{} \u{2022} 1 event", tick.label),
        n => format!("{} \u{2022} {n} events", tick.label),
    }
}

/// Read-only inputs of one presentation pass.
///
/// `build` is a pure function of these fields, so hosts and tests can derive
/// panels without an engine.
#[derive(Clone, Copy)]
pub struct PresentationLayout<'a> {
    pub focus_year: i32,
    pub active_tick_index: usize,
    pub index: &'a EventIndex,
    pub catalog: &'a ScenarioCatalog,
    pub ticks: &'a [TimelineTick],
    pub era_stack_mode: EraStackMode,
    pub highlights: &'a IndexMap<i32, String>,
    pub filters: &'a FilterPanelState,
    pub detail_event: Option<&'a TimelineEvent>,
    pub background_scroll_locked: bool,
}

impl PresentationLayout<'_> {
    #[must_use]
    pub fn build(&self) -> PresentationFrame {
        let focus_label = format_year_label(self.focus_year);
        let best = self.index.best_match(self.focus_year);
        let placeholder = best.event_id.is_none().then(|| FocusPlaceholderView {
            focus_year: self.focus_year,
            focus_label: focus_label.clone(),
            message: format!("No event saved for {focus_label} yet."),
        });

        PresentationFrame {
            focus_year: self.focus_year,
            map: self.map_panel(),
            era_stacks: self.era_stacks(best.anchor, best.event_id.as_deref()),
            placeholder,
            rail_columns: self.rail_columns(),
            rail_caption: self
                .ticks
                .get(self.active_tick_index)
                .map_or_else(|| format!("No events for {focus_label}"), rail_caption),
            filters: self.filters.view(),
            detail: self.detail_event.map(detail_panel),
            background_scroll_locked: self.background_scroll_locked,
            focus_label,
        }
    }

    fn map_panel(&self) -> MapPanelView {
        let scenario = self.catalog.resolve(self.focus_year);
        MapPanelView {
            heading: format!("Historical map for {}", scenario.label),
            range_label: format_year_range(scenario.start_year, scenario.end_year),
            scenario: scenario.clone(),
        }
    }

    fn era_stacks(
        &self,
        primary_anchor: i32,
        primary_event_id: Option<&str>,
    ) -> SmallVec<[EraStackView; 3]> {
        let step = self.index.era_step();
        let current = era_anchor(self.focus_year, step);

        self.era_stack_mode
            .positions()
            .into_iter()
            .map(|position| {
                let anchor = match position {
                    EraPosition::Previous => current.saturating_sub(step),
                    EraPosition::Current => current,
                    EraPosition::Next => current.saturating_add(step),
                };
                let is_primary = anchor == primary_anchor;
                let events = self.index.era_bucket(anchor);
                let cards = events
                    .iter()
                    .take(STACK_PREVIEW_LEN)
                    .map(|event| {
                        let mut card = event_card(event);
                        card.is_primary =
                            is_primary && primary_event_id == Some(event.id.as_str());
                        card
                    })
                    .collect();

                EraStackView {
                    position,
                    heading: position.heading().to_owned(),
                    anchor,
                    window_label: era_window_label(anchor, step),
                    cards,
                    overflow_count: events.len().saturating_sub(STACK_PREVIEW_LEN),
                    is_primary,
                    primary_event_id: primary_event_id
                        .filter(|_| is_primary)
                        .map(str::to_owned),
                }
            })
            .collect()
    }

    fn rail_columns(&self) -> Vec<RailColumnView> {
        let max_visible = max_visible_neighbors(self.index.era_step());
        self.ticks
            .iter()
            .enumerate()
            .map(|(index, tick)| RailColumnView {
                index,
                year: tick.year,
                label: tick.label.clone(),
                is_major: tick.is_major,
                distance: classify_column_distance(
                    index.abs_diff(self.active_tick_index),
                    max_visible,
                ),
                event_count: tick.events.len(),
                highlighted_event_id: self.highlights.get(&tick.year).cloned(),
            })
            .collect()
    }
}

fn event_card(event: &TimelineEvent) -> EventCardView {
    EventCardView {
        event_id: event.id.clone(),
        title: event.title.clone(),
        location: event.location.clone(),
        year_range_label: format_year_range(event.year_start, event.year_end),
        tags: event.tags.clone(),
        is_primary: false,
    }
}

fn detail_panel(event: &TimelineEvent) -> DetailPanelView {
    DetailPanelView {
        event_id: event.id.clone(),
        title: event.title.clone(),
        location: event.location.clone(),
        description: event.description.clone(),
        year_range_label: format_year_range(event.year_start, event.year_end),
        tags: event.tags.clone(),
    }
}
