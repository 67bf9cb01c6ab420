use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// Year-ranged descriptive record driving the map panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapScenario {
    pub id: String,
    pub label: String,
    pub start_year: i32,
    pub end_year: i32,
    pub region_label: String,
    pub summary: String,
    pub lens_tags: Vec<String>,
    #[serde(default)]
    pub marker_label: Option<String>,
}

impl MapScenario {
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.start_year <= year && year <= self.end_year
    }
}

/// Ordered scenario list with one designated fallback.
///
/// Resolution scans in declaration order and the first range match wins,
/// even when a later scenario covers the year more tightly. The default
/// scenario never takes part in range matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioCatalog {
    scenarios: Vec<MapScenario>,
    default_index: usize,
}

impl ScenarioCatalog {
    pub fn new(scenarios: Vec<MapScenario>, default_id: &str) -> TimelineResult<Self> {
        let mut seen = IndexSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if scenario.id.is_empty() {
                return Err(TimelineError::InvalidScenario(
                    "scenario id must not be empty".to_owned(),
                ));
            }
            if !seen.insert(scenario.id.as_str()) {
                return Err(TimelineError::InvalidScenario(format!(
                    "duplicate scenario id `{}`",
                    scenario.id
                )));
            }
            if scenario.start_year > scenario.end_year {
                return Err(TimelineError::InvalidScenario(format!(
                    "scenario `{}` has start_year > end_year",
                    scenario.id
                )));
            }
        }

        let default_index = seen.get_index_of(default_id).ok_or_else(|| {
            TimelineError::InvalidScenario(format!("default scenario `{default_id}` is missing"))
        })?;

        Ok(Self {
            scenarios,
            default_index,
        })
    }

    #[must_use]
    pub fn scenarios(&self) -> &[MapScenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn default_scenario(&self) -> &MapScenario {
        &self.scenarios[self.default_index]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MapScenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }

    /// Returns the first non-default scenario covering `focus_year`, or the default.
    #[must_use]
    pub fn resolve(&self, focus_year: i32) -> &MapScenario {
        self.scenarios
            .iter()
            .enumerate()
            .find(|(idx, scenario)| *idx != self.default_index && scenario.contains_year(focus_year))
            .map_or_else(|| self.default_scenario(), |(_, scenario)| scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::{MapScenario, ScenarioCatalog};

    fn scenario(id: &str, start_year: i32, end_year: i32) -> MapScenario {
        MapScenario {
            id: id.to_owned(),
            label: id.to_owned(),
            start_year,
            end_year,
            region_label: String::new(),
            summary: String::new(),
            lens_tags: Vec::new(),
            marker_label: None,
        }
    }

    #[test]
    fn default_is_excluded_from_range_matching() {
        let catalog = ScenarioCatalog::new(
            vec![scenario("world", -1000, 1000), scenario("late", 500, 600)],
            "world",
        )
        .expect("valid catalog");
        assert_eq!(catalog.resolve(550).id, "late");
        assert_eq!(catalog.resolve(0).id, "world");
    }

    #[test]
    fn missing_default_is_rejected() {
        let err = ScenarioCatalog::new(vec![scenario("a", 0, 1)], "world")
            .expect_err("missing default must fail");
        assert!(format!("{err}").contains("world"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ScenarioCatalog::new(vec![scenario("a", 0, 1), scenario("a", 2, 3)], "a")
            .expect_err("duplicate must fail");
        assert!(format!("{err}").contains("duplicate"));
    }
}
