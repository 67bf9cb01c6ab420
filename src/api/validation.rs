use indexmap::IndexSet;

use crate::core::{MAX_SEARCH_RADIUS, TimelineEvent, normalize_era_step, validate_year_bounds};
use crate::error::{TimelineError, TimelineResult};

use super::TimelineEngineConfig;

/// Checks bounds, search radius and geometry; the era step is guarded
/// rather than rejected.
pub(super) fn validate_engine_config(
    config: TimelineEngineConfig,
) -> TimelineResult<TimelineEngineConfig> {
    validate_year_bounds(config.min_year, config.max_year)?;
    validate_search_radius(config.search_radius)?;
    let geometry = config.geometry.validate()?;
    Ok(TimelineEngineConfig {
        era_step: normalize_era_step(config.era_step),
        geometry,
        ..config
    })
}

pub(super) fn validate_search_radius(radius: u32) -> TimelineResult<u32> {
    if radius > MAX_SEARCH_RADIUS {
        return Err(TimelineError::InvalidConfig(format!(
            "search_radius ({radius}) must be <= {MAX_SEARCH_RADIUS}"
        )));
    }
    Ok(radius)
}

pub(super) fn validate_events(events: &[TimelineEvent]) -> TimelineResult<()> {
    let mut seen = IndexSet::with_capacity(events.len());
    for event in events {
        event.validate()?;
        if !seen.insert(event.id.as_str()) {
            return Err(TimelineError::InvalidEvent {
                id: event.id.clone(),
                reason: "duplicate event id".to_owned(),
            });
        }
    }
    Ok(())
}

pub(super) fn validate_surface_width(name: &str, width_px: f64) -> TimelineResult<f64> {
    if !width_px.is_finite() || width_px < 0.0 {
        return Err(TimelineError::InvalidGeometry(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(width_px)
}
