use timeline_dial::TimelineError;
use timeline_dial::core::fixtures::{self, DEFAULT_SCENARIO_ID};
use timeline_dial::core::{
    EventIndex, MapScenario, ScenarioCatalog, TimelineEvent, best_match_for_year, group_by_year,
    nearest_within_radius,
};

fn point_event(id: &str, year: i32) -> TimelineEvent {
    TimelineEvent::new(id, id, year, year).expect("valid event")
}

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
fn exact_representative_year_wins() {
    let events = vec![point_event("a", 95), point_event("b", 105), point_event("c", 120)];
    let best = best_match_for_year(&events, 105, 25);
    assert_eq!(best.anchor, 100);
    assert_eq!(best.event_id.as_deref(), Some("b"));
}

#[test]
fn closest_in_era_wins_with_source_order_ties() {
    let events = vec![point_event("late", 112), point_event("early", 108)];
    let best = best_match_for_year(&events, 110, 25);
    assert_eq!(best.event_id.as_deref(), Some("late"));

    let events = vec![point_event("far", 101), point_event("near", 118)];
    let best = best_match_for_year(&events, 120, 25);
    assert_eq!(best.event_id.as_deref(), Some("near"));
}

#[test]
fn empty_era_reports_anchor_without_event() {
    let events = vec![point_event("elsewhere", 10)];
    let best = best_match_for_year(&events, 130, 25);
    assert_eq!(best.anchor, 125);
    assert_eq!(best.event_id, None);
}

#[test]
fn representative_year_rounds_half_up() {
    let event = TimelineEvent::new("span", "Span", 98, 101).expect("valid event");
    assert_eq!(event.representative_year(), 100);
    let event = TimelineEvent::new("bce", "Bce", -2, -1).expect("valid event");
    assert_eq!(event.representative_year(), -1);
}

#[test]
fn inverted_event_range_is_rejected() {
    let err = TimelineEvent::new("bad", "Bad", 10, 5).expect_err("inverted range");
    assert!(matches!(err, TimelineError::InvalidEvent { .. }));
}

#[test]
fn radius_search_checks_earlier_year_first() {
    let events = vec![point_event("before", 97), point_event("after", 103)];
    let buckets = group_by_year(&events);
    let hit = nearest_within_radius(&buckets, 100, 5).expect("within radius");
    assert_eq!(hit.id, "before");
    assert!(nearest_within_radius(&buckets, 100, 2).is_none());
}

#[test]
fn sample_index_buckets_by_era() {
    let index = EventIndex::new(fixtures::sample_events(), 25);
    assert_eq!(index.len(), 14);
    let era: Vec<&str> = index
        .era_bucket(100)
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(
        era,
        vec![
            "roman-parthian",
            "han-expansion-100",
            "trajan-preparation",
            "kanishka-ascent",
            "moche-pottery",
            "axum-trade",
            "paper-invention",
            "nasca-lines",
        ]
    );
    assert_eq!(index.best_match(120).event_id.as_deref(), Some("nasca-lines"));
    assert_eq!(
        index.nearest_within_radius(120, 5).map(|event| event.id.as_str()),
        Some("nasca-lines")
    );

    let regrouped = index.with_era_step(50);
    assert_eq!(regrouped.era_step(), 50);
    assert_eq!(regrouped.era_bucket(100).len(), 9);
}

#[test]
fn first_declared_scenario_wins_on_overlap() {
    let catalog = ScenarioCatalog::new(
        vec![
            scenario("wide", 1, 140),
            scenario("narrow", 90, 140),
            scenario("fallback", -1_000, 1_000),
        ],
        "fallback",
    )
    .expect("valid catalog");
    assert_eq!(catalog.resolve(95).id, "wide");
    assert_eq!(catalog.resolve(500).id, "fallback");
}

#[test]
fn sample_catalog_resolves_declared_ranges() {
    let catalog = fixtures::sample_scenario_catalog().expect("valid catalog");
    assert_eq!(catalog.resolve(120).id, "silk-road-expansion");
    assert_eq!(catalog.resolve(85).id, "nazca-lines");
    assert_eq!(catalog.resolve(-150).id, "early-han-consolidation");
    assert_eq!(catalog.resolve(0).id, "early-han-consolidation");
    assert_eq!(catalog.resolve(180).id, "teotihuacan-rise");
    assert_eq!(catalog.resolve(999).id, DEFAULT_SCENARIO_ID);
}

#[test]
fn catalog_rejects_duplicates_and_missing_default() {
    let duplicate = ScenarioCatalog::new(vec![scenario("a", 0, 1), scenario("a", 2, 3)], "a");
    assert!(matches!(duplicate, Err(TimelineError::InvalidScenario(_))));

    let missing = ScenarioCatalog::new(vec![scenario("a", 0, 1)], "nope");
    assert!(matches!(missing, Err(TimelineError::InvalidScenario(_))));
}
