//! Static sample data shipped with the engine.
//!
//! The fixtures stand in for a real data source; any event list or scenario
//! catalog can replace them without touching the engine.

use crate::core::{MapScenario, ScenarioCatalog, TimelineEvent};
use crate::error::TimelineResult;

/// Id of the fallback scenario in [`map_scenarios`].
pub const DEFAULT_SCENARIO_ID: &str = "default-world";

fn event(
    id: &str,
    title: &str,
    location: &str,
    tags: &[&str],
    year_start: i32,
    year_end: i32,
    description: &str,
) -> TimelineEvent {
    TimelineEvent {
        id: id.to_owned(),
        title: title.to_owned(),
        location: location.to_owned(),
        description: description.to_owned(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        year_start,
        year_end,
    }
}

#[must_use]
pub fn sample_events() -> Vec<TimelineEvent> {
    vec![
        event(
            "han-frontiers",
            "Han frontier watchtowers expand",
            "Hexi Corridor",
            &["Borders", "Logistics"],
            -175,
            -125,
            "Garrisons and beacon towers extend deeper into the corridor, tightening state control over steppe gateways.",
        ),
        event(
            "mauryan-fragment",
            "Fragmentation after the Maurya",
            "Northern India",
            &["Power", "Institutions"],
            -120,
            -60,
            "Regional courts emerge as the Mauryan system dissolves, setting up new trade and diplomatic patterns.",
        ),
        event(
            "silk-road-peak",
            "Silk Road peak traffic",
            "Central Asia \u{2194} Mediterranean",
            &["Trade", "Currency", "Culture"],
            90,
            210,
            "Caravans knit empires together with silks, spices, and envoys moving through oasis chains.",
        ),
        event(
            "buddhism-spread",
            "Early Buddhist networks",
            "North India \u{2194} East Asia",
            &["Religion", "Ideas"],
            50,
            250,
            "Monks and translators shepherd sutras over mountain passes, reinterpreting them at each stop.",
        ),
        event(
            "roman-parthian",
            "Roman\u{2013}Parthian border diplomacy",
            "Eastern Mediterranean",
            &["Wars", "Borders"],
            1,
            200,
            "Proxy conflicts and envoys redraw frontier towns while merchants quietly keep commerce alive.",
        ),
        event(
            "kushan-minting",
            "Kushan gold minting",
            "Bactria \u{2194} Northern India",
            &["Currency", "Culture"],
            120,
            170,
            "Gold dinars blend Hellenistic and Indic iconography, signalling the empire's cosmopolitan reach.",
        ),
        event(
            "teotihuacan-rise",
            "Teotihuacan urban ascent",
            "Central Mexico",
            &["Urbanism", "Trade"],
            125,
            225,
            "Apartment compounds and obsidian workshops scale up, exporting influence across Mesoamerica.",
        ),
        event(
            "han-expansion-100",
            "Han Dynasty western expansion",
            "Western China",
            &["Empire", "Military"],
            95,
            105,
            "Military campaigns push Han influence deeper into Central Asia, securing trade routes.",
        ),
        event(
            "trajan-preparation",
            "Trajan's Dacian preparations",
            "Roman Empire",
            &["Wars", "Strategy"],
            98,
            101,
            "Rome masses legions along the Danube, preparing for campaigns against Dacia.",
        ),
        event(
            "kanishka-ascent",
            "Kanishka's early reign",
            "Kushan Empire",
            &["Power", "Religion"],
            99,
            102,
            "The great Kushan emperor begins consolidating power and patronizing Buddhist institutions.",
        ),
        event(
            "moche-pottery",
            "Moche ceramics flourish",
            "Peru coast",
            &["Art", "Culture"],
            90,
            110,
            "Elaborate portrait vessels and narrative scenes reach new heights of sophistication.",
        ),
        event(
            "axum-trade",
            "Axumite Red Sea trade",
            "Ethiopia",
            &["Trade", "Maritime"],
            95,
            120,
            "Ethiopian kingdom controls key ports, linking Africa with Arabia and the Mediterranean.",
        ),
        event(
            "paper-invention",
            "Paper spreads from China",
            "China",
            &["Technology", "Writing"],
            100,
            105,
            "New writing material begins replacing bamboo strips and silk, revolutionizing record-keeping.",
        ),
        event(
            "nasca-lines",
            "Nazca Lines construction",
            "Southern Peru",
            &["Monuments", "Religion"],
            80,
            150,
            "Massive geoglyphs etched into desert floor, possibly for ritual processions or astronomy.",
        ),
    ]
}

fn scenario(
    id: &str,
    label: &str,
    (start_year, end_year): (i32, i32),
    region_label: &str,
    summary: &str,
    lens_tags: &[&str],
    marker_label: &str,
) -> MapScenario {
    MapScenario {
        id: id.to_owned(),
        label: label.to_owned(),
        start_year,
        end_year,
        region_label: region_label.to_owned(),
        summary: summary.to_owned(),
        lens_tags: lens_tags.iter().map(|tag| (*tag).to_owned()).collect(),
        marker_label: Some(marker_label.to_owned()),
    }
}

/// Scenario records in priority order. Declaration order matters: the first
/// range covering a year wins.
#[must_use]
pub fn map_scenarios() -> Vec<MapScenario> {
    vec![
        scenario(
            "silk-road-expansion",
            "Silk Road corridor expansion",
            (90, 140),
            "Central Asia and Northern India",
            "Trade networks reach their zenith as Han, Kushan, and Roman frontiers converge. Buddhist monks and merchants share the same oasis routes.",
            &["trade", "religion", "currency"],
            "Kushan Empire centers",
        ),
        scenario(
            "nazca-lines",
            "Nazca geoglyphs construction",
            (80, 89),
            "Southern Peru",
            "Massive lines and figures etched into the desert floor mark ritual pathways and possibly astronomical alignments.",
            &["monuments", "religion", "phenomena"],
            "Nazca ceremonial sites",
        ),
        scenario(
            "nazca-lines-extended",
            "Nazca geoglyphs expansion",
            (141, 150),
            "Southern Peru",
            "Later phase of geoglyph construction continues the tradition with more complex figures and expanded ritual landscapes.",
            &["monuments", "religion", "culture"],
            "Extended Nazca sites",
        ),
        scenario(
            "roman-parthian-frontier",
            "Roman-Parthian frontier tensions",
            (1, 79),
            "Eastern Mediterranean and Mesopotamia",
            "Proxy conflicts and diplomatic missions reshape border towns while merchants maintain quiet commerce across disputed frontiers.",
            &["wars", "borders", "diplomacy"],
            "Contested frontier cities",
        ),
        scenario(
            "early-han-consolidation",
            "Han western consolidation",
            (-200, 0),
            "China and Central Asian corridors",
            "Han Dynasty extends control westward through the Hexi Corridor, establishing garrisons and beacon towers to secure emerging trade routes.",
            &["borders", "logistics", "empire"],
            "Han frontier watchtowers",
        ),
        scenario(
            "teotihuacan-rise",
            "Teotihuacan urban expansion",
            (151, 200),
            "Central Mexico",
            "Apartment compounds and obsidian workshops scale dramatically, projecting influence across Mesoamerica through trade and cultural exchange.",
            &["urbanism", "trade", "culture"],
            "Teotihuacan pyramid complex",
        ),
        scenario(
            DEFAULT_SCENARIO_ID,
            "Global overview",
            (-1000, 1000),
            "World",
            "Multiple civilizations evolve independently and through connection. Select a specific year with the dial to focus on regional developments.",
            &["overview"],
            "Major civilization centers",
        ),
    ]
}

/// The sample scenarios wrapped in a validated catalog.
pub fn sample_scenario_catalog() -> TimelineResult<ScenarioCatalog> {
    ScenarioCatalog::new(map_scenarios(), DEFAULT_SCENARIO_ID)
}
