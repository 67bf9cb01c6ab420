use indexmap::IndexMap;

use crate::error::{TimelineError, TimelineResult};
use crate::render::{FilterChipView, FilterPanelView, Renderer};

use super::TimelineEngine;

const PRIMARY_FILTERS: [&str; 5] = ["Wars", "Currency", "Trade", "Religion", "Phenomena"];
const SECONDARY_FILTERS: [&str; 3] = ["People", "Technology", "Institutions"];
const DEFAULT_ACTIVE_FILTER: &str = "Phenomena";

/// Which filter row a chip belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    Primary,
    Secondary,
}

/// Decorative filter chips.
///
/// Toggling records the chip state for display only; no query reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelState {
    chips: IndexMap<String, (FilterGroup, bool)>,
}

impl Default for FilterPanelState {
    fn default() -> Self {
        let primary = PRIMARY_FILTERS.iter().map(|label| {
            (
                (*label).to_owned(),
                (FilterGroup::Primary, *label == DEFAULT_ACTIVE_FILTER),
            )
        });
        let secondary = SECONDARY_FILTERS
            .iter()
            .map(|label| ((*label).to_owned(), (FilterGroup::Secondary, false)));
        Self {
            chips: primary.chain(secondary).collect(),
        }
    }
}

impl FilterPanelState {
    #[must_use]
    pub fn is_active(&self, label: &str) -> Option<bool> {
        self.chips.get(label).map(|(_, active)| *active)
    }

    /// Flips a chip and returns its new state.
    pub fn toggle(&mut self, label: &str) -> TimelineResult<bool> {
        let (_, active) = self
            .chips
            .get_mut(label)
            .ok_or_else(|| TimelineError::InvalidData(format!("unknown filter `{label}`")))?;
        *active = !*active;
        Ok(*active)
    }

    #[must_use]
    pub fn active_labels(&self) -> Vec<&str> {
        self.chips
            .iter()
            .filter(|(_, (_, active))| *active)
            .map(|(label, _)| label.as_str())
            .collect()
    }

    #[must_use]
    pub fn view(&self) -> FilterPanelView {
        let chips_in = |group: FilterGroup| {
            self.chips
                .iter()
                .filter(|(_, (chip_group, _))| *chip_group == group)
                .map(|(label, (_, active))| FilterChipView {
                    label: label.clone(),
                    active: *active,
                })
                .collect()
        };
        FilterPanelView {
            primary: chips_in(FilterGroup::Primary),
            secondary: chips_in(FilterGroup::Secondary),
        }
    }
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn filters(&self) -> &FilterPanelState {
        &self.core.view.filters
    }

    pub fn toggle_filter(&mut self, label: &str) -> TimelineResult<bool> {
        self.core.view.filters.toggle(label)
    }
}

#[cfg(test)]
mod tests {
    use super::FilterPanelState;

    #[test]
    fn only_phenomena_starts_active() {
        let filters = FilterPanelState::default();
        assert_eq!(filters.active_labels(), vec!["Phenomena"]);
        let view = filters.view();
        assert_eq!(view.primary.len(), 5);
        assert_eq!(view.secondary.len(), 3);
        assert_eq!(view.secondary[0].label, "People");
    }

    #[test]
    fn toggle_flips_and_rejects_unknown_labels() {
        let mut filters = FilterPanelState::default();
        assert!(filters.toggle("Wars").expect("known"));
        assert!(!filters.toggle("Phenomena").expect("known"));
        assert_eq!(filters.active_labels(), vec!["Wars"]);
        assert!(filters.toggle("Weather").is_err());
    }
}
