use timeline_dial::TimelineError;
use timeline_dial::api::{
    ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EraStackMode, HEALTH_ROUTE, HealthStatus,
    TimelineEngine, TimelineEngineConfig,
};
use timeline_dial::interaction::ScrubMode;
use timeline_dial::render::NullRenderer;

fn busy_engine() -> TimelineEngine<NullRenderer> {
    let mut engine = TimelineEngine::new(NullRenderer::default(), TimelineEngineConfig::default())
        .expect("engine init");
    engine
        .set_surface_metrics(400.0, None)
        .expect("valid metrics");
    engine.set_focus_year(100);
    engine
        .highlight_event(300, "trajan-preparation")
        .expect("highlight");
    engine.toggle_filter("Trade").expect("known filter");
    engine
}

#[test]
fn snapshot_captures_engine_state() {
    let engine = busy_engine();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.focus_year, 100);
    assert_eq!(snapshot.focus_label, "100 CE");
    assert_eq!(snapshot.year_bounds, (-200, 200));
    assert_eq!(snapshot.era_step, 25);
    assert_eq!(snapshot.active_tick_index, 300);
    assert_eq!(snapshot.tick_count, 401);
    assert_eq!(snapshot.scrub_mode, ScrubMode::Idle);
    assert_eq!(snapshot.scenario_id, "silk-road-expansion");
    assert_eq!(snapshot.best_match.anchor, 100);
    assert_eq!(
        snapshot.best_match.event_id.as_deref(),
        Some("han-expansion-100")
    );
    assert_eq!(snapshot.nearest_event_id.as_deref(), Some("han-expansion-100"));
    assert_eq!(
        snapshot.highlights.get(&100).map(String::as_str),
        Some("trajan-preparation")
    );
    assert_eq!(snapshot.detail_event_id, None);
    assert_eq!(snapshot.active_filters, vec!["Trade", "Phenomena"]);
}

#[test]
fn snapshot_contract_round_trips_both_forms() {
    let engine = busy_engine();
    let snapshot = engine.snapshot();

    let wrapped = engine
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let value: serde_json::Value = serde_json::from_str(&wrapped).expect("valid json");
    assert_eq!(
        value["schema_version"],
        serde_json::json!(ENGINE_SNAPSHOT_JSON_SCHEMA_V1)
    );
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&wrapped).expect("parse wrapped"),
        snapshot
    );

    let bare = engine.snapshot_json_pretty().expect("serialize bare");
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&bare).expect("parse bare"),
        snapshot
    );
}

#[test]
fn unsupported_contract_version_is_rejected() {
    let engine = busy_engine();
    let wrapped = engine
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let mut value: serde_json::Value = serde_json::from_str(&wrapped).expect("valid json");
    value["schema_version"] = serde_json::json!(2);

    let err = EngineSnapshot::from_json_compat_str(&value.to_string())
        .expect_err("future schema version");
    assert!(matches!(err, TimelineError::InvalidData(message) if message.contains("version")));

    assert!(EngineSnapshot::from_json_compat_str("{\"focus_year\": 1}").is_err());
}

#[test]
fn config_json_round_trip_restores_engine() {
    let config = TimelineEngineConfig::new(-50, 50)
        .with_era_step(10)
        .with_initial_focus_year(5)
        .with_era_stack_mode(EraStackMode::Single)
        .with_search_radius(2);
    let json = config.to_json_pretty().expect("serialize config");
    let parsed = TimelineEngineConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);

    let engine = TimelineEngine::new(NullRenderer::default(), parsed).expect("engine init");
    assert_eq!(engine.focus_year(), 5);
    assert_eq!(engine.ticks().len(), 101);
    assert_eq!(engine.presentation_frame().era_stacks.len(), 1);
}

#[test]
fn partial_config_json_uses_defaults() {
    let parsed =
        TimelineEngineConfig::from_json_str("{\"min_year\": 0, \"max_year\": 10}").expect("parse");
    assert_eq!(parsed.min_year, 0);
    assert_eq!(parsed.max_year, 10);
    assert_eq!(parsed.era_step, TimelineEngineConfig::default().era_step);
    assert!(TimelineEngineConfig::from_json_str("not json").is_err());
}

#[test]
fn health_payload_is_stable() {
    let engine = busy_engine();
    let health = engine.health();
    assert!(health.is_ok());
    assert_eq!(HEALTH_ROUTE, "/health");
    let json = health.to_json().expect("serialize health");
    assert_eq!(json, r#"{"status":"ok","service":"timeline-backend"}"#);
    assert_eq!(HealthStatus::from_json_str(&json).expect("parse"), health);
}

#[test]
fn snapshot_contract_rejects_unreachable_state() {
    let engine = busy_engine();
    let wrapped = engine
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let mut value: serde_json::Value = serde_json::from_str(&wrapped).expect("valid json");
    value["snapshot"]["focus_year"] = serde_json::json!(500);
    let err = EngineSnapshot::from_json_compat_str(&value.to_string())
        .expect_err("focus outside bounds");
    assert!(matches!(err, TimelineError::InvalidData(message) if message.contains("focus_year")));

    let mut bare: serde_json::Value =
        serde_json::from_str(&engine.snapshot_json_pretty().expect("serialize bare"))
            .expect("valid json");
    bare["active_tick_index"] = serde_json::json!(12);
    let err = EngineSnapshot::from_json_compat_str(&bare.to_string())
        .expect_err("tick index off focus");
    assert!(
        matches!(err, TimelineError::InvalidData(message) if message.contains("active_tick_index"))
    );

    bare["active_tick_index"] = serde_json::json!(300);
    bare["year_bounds"] = serde_json::json!([200, -200]);
    assert!(EngineSnapshot::from_json_compat_str(&bare.to_string()).is_err());

    let mut snapshot = engine.snapshot();
    assert!(snapshot.validate().is_ok());
    snapshot.tick_count = 400;
    assert!(snapshot.validate().is_err());
}
