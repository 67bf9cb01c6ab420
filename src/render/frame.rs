use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::MapScenario;
use crate::error::{TimelineError, TimelineResult};

/// Which era window a stack shows relative to the focus era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EraPosition {
    Previous,
    Current,
    Next,
}

impl EraPosition {
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Previous => "Previous era",
            Self::Current => "Current era",
            Self::Next => "Next era",
        }
    }
}

/// Card content for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCardView {
    pub event_id: String,
    pub title: String,
    pub location: String,
    pub year_range_label: String,
    pub tags: Vec<String>,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraStackView {
    pub position: EraPosition,
    pub heading: String,
    pub anchor: i32,
    pub window_label: String,
    /// Leading cards shown in full; the rest are summarized by `overflow_count`.
    pub cards: Vec<EventCardView>,
    pub overflow_count: usize,
    pub is_primary: bool,
    pub primary_event_id: Option<String>,
}

impl EraStackView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn total_events(&self) -> usize {
        self.cards.len() + self.overflow_count
    }
}

/// Empty-state prompt shown when the primary era has no events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusPlaceholderView {
    pub focus_year: i32,
    pub focus_label: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPanelView {
    pub heading: String,
    pub range_label: String,
    pub scenario: MapScenario,
}

/// Visual weight of a rail column by distance from the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnDistance {
    Active,
    Neighbor,
    Distant,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailColumnView {
    pub index: usize,
    pub year: i32,
    pub label: String,
    pub is_major: bool,
    pub distance: ColumnDistance,
    pub event_count: usize,
    pub highlighted_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChipView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanelView {
    pub primary: Vec<FilterChipView>,
    pub secondary: Vec<FilterChipView>,
}

/// Open detail view content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailPanelView {
    pub event_id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub year_range_label: String,
    pub tags: Vec<String>,
}

/// Everything a host needs to draw one state of the timeline.
///
/// Frames are rebuilt from engine state on every render and carry no
/// references back into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationFrame {
    pub focus_year: i32,
    pub focus_label: String,
    pub map: MapPanelView,
    pub era_stacks: SmallVec<[EraStackView; 3]>,
    pub placeholder: Option<FocusPlaceholderView>,
    pub rail_columns: Vec<RailColumnView>,
    pub rail_caption: String,
    pub filters: FilterPanelView,
    pub detail: Option<DetailPanelView>,
    pub background_scroll_locked: bool,
}

impl PresentationFrame {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.era_stacks.is_empty() || self.era_stacks.len() > 3 {
            return Err(TimelineError::InvalidData(format!(
                "frame must carry 1..=3 era stacks, got {}",
                self.era_stacks.len()
            )));
        }
        if self.era_stacks.iter().filter(|stack| stack.is_primary).count() > 1 {
            return Err(TimelineError::InvalidData(
                "at most one era stack may be primary".to_owned(),
            ));
        }

        let active = self
            .rail_columns
            .iter()
            .filter(|column| column.distance == ColumnDistance::Active)
            .count();
        if active > 1 || (active == 0 && !self.rail_columns.is_empty()) {
            return Err(TimelineError::InvalidData(format!(
                "rail must have exactly one active column, got {active}"
            )));
        }

        if self.detail.is_some() && !self.background_scroll_locked {
            return Err(TimelineError::InvalidData(
                "open detail view requires a locked background".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn primary_stack(&self) -> Option<&EraStackView> {
        self.era_stacks.iter().find(|stack| stack.is_primary)
    }

    #[must_use]
    pub fn active_column(&self) -> Option<&RailColumnView> {
        self.rail_columns
            .iter()
            .find(|column| column.distance == ColumnDistance::Active)
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.era_stacks.iter().map(|stack| stack.cards.len()).sum()
    }
}
