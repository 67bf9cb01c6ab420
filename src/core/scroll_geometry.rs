use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ticks::clamp_index;
use crate::error::{TimelineError, TimelineResult};

/// Fixed per-unit pixel geometry of the scrub surface.
///
/// The fixed geometry is the fallback whenever the host has not measured a
/// rendered unit yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrubGeometry {
    pub unit_width_px: f64,
    pub unit_gap_px: f64,
    /// Pointer travel beyond which a gesture counts as a drag rather than a tap.
    pub drag_threshold_px: f64,
}

impl Default for ScrubGeometry {
    fn default() -> Self {
        Self::ruler()
    }
}

impl ScrubGeometry {
    /// Compact one-year ruler: 32 px ticks with 8 px gaps.
    #[must_use]
    pub const fn ruler() -> Self {
        Self {
            unit_width_px: 32.0,
            unit_gap_px: 8.0,
            drag_threshold_px: 5.0,
        }
    }

    /// Card rail: 92 px columns with 16 px gaps.
    #[must_use]
    pub const fn rail() -> Self {
        Self {
            unit_width_px: 92.0,
            unit_gap_px: 16.0,
            drag_threshold_px: 5.0,
        }
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.unit_width_px.is_finite() || self.unit_width_px <= 0.0 {
            return Err(TimelineError::InvalidGeometry(
                "unit width must be finite and > 0".to_owned(),
            ));
        }
        if !self.unit_gap_px.is_finite() || self.unit_gap_px < 0.0 {
            return Err(TimelineError::InvalidGeometry(
                "unit gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            return Err(TimelineError::InvalidGeometry(
                "drag threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn slot_width_px(self) -> f64 {
        self.unit_width_px + self.unit_gap_px
    }

    /// Center of unit `index` assuming every unit uses the fixed geometry.
    #[must_use]
    pub fn fallback_unit_center_px(self, index: usize) -> f64 {
        index as f64 * self.slot_width_px() + self.unit_width_px / 2.0
    }

    /// Content width of `unit_count` fixed-size units.
    #[must_use]
    pub fn fallback_content_width_px(self, unit_count: usize) -> f64 {
        if unit_count == 0 {
            return 0.0;
        }
        unit_count as f64 * self.slot_width_px() - self.unit_gap_px
    }

    /// Nearest unit to the viewport center using the fixed geometry.
    #[must_use]
    pub fn fallback_nearest_index(
        self,
        scroll_left_px: f64,
        container_width_px: f64,
        unit_count: usize,
    ) -> usize {
        let center = scroll_left_px + container_width_px / 2.0;
        let raw = ((center - self.unit_width_px / 2.0) / self.slot_width_px()).round();
        if !raw.is_finite() {
            return 0;
        }
        // Saturating float-to-int cast; clamp_index bounds the result.
        clamp_index(raw as i64, unit_count)
    }
}

/// Rendered bounds of one unit, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitBounds {
    pub offset_left_px: f64,
    pub width_px: f64,
}

impl UnitBounds {
    #[must_use]
    pub const fn new(offset_left_px: f64, width_px: f64) -> Self {
        Self {
            offset_left_px,
            width_px,
        }
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.offset_left_px.is_finite() || !self.width_px.is_finite() || self.width_px < 0.0 {
            return Err(TimelineError::InvalidGeometry(
                "measured unit bounds must be finite with width >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn center_px(self) -> f64 {
        self.offset_left_px + self.width_px / 2.0
    }
}

/// Horizontal layout of the scrub surface's units.
///
/// Measured bounds take precedence per unit; unmeasured units fall back to
/// the fixed geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitLayout {
    geometry: ScrubGeometry,
    unit_count: usize,
    measured: IndexMap<usize, UnitBounds>,
}

impl UnitLayout {
    #[must_use]
    pub fn new(geometry: ScrubGeometry, unit_count: usize) -> Self {
        Self {
            geometry,
            unit_count,
            measured: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn geometry(&self) -> ScrubGeometry {
        self.geometry
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    #[must_use]
    pub fn measured_count(&self) -> usize {
        self.measured.len()
    }

    /// Replaces the unit count; measurements are dropped since indices shift.
    pub fn reset(&mut self, geometry: ScrubGeometry, unit_count: usize) {
        self.geometry = geometry;
        self.unit_count = unit_count;
        self.measured.clear();
    }

    pub fn record_measurement(&mut self, index: usize, bounds: UnitBounds) -> TimelineResult<()> {
        if index >= self.unit_count {
            return Err(TimelineError::InvalidGeometry(format!(
                "unit index {index} is out of range for {} units",
                self.unit_count
            )));
        }
        self.measured.insert(index, bounds.validate()?);
        Ok(())
    }

    pub fn clear_measurements(&mut self) {
        self.measured.clear();
    }

    #[must_use]
    pub fn unit_center_px(&self, index: usize) -> f64 {
        let index = clamp_index(i64::try_from(index).unwrap_or(i64::MAX), self.unit_count);
        self.measured
            .get(&index)
            .map_or_else(|| self.geometry.fallback_unit_center_px(index), |b| b.center_px())
    }

    /// Nearest unit to the viewport center.
    ///
    /// Uses rendered centers once every unit is measured, otherwise the fixed
    /// geometry. An empty layout yields `0`.
    #[must_use]
    pub fn nearest_index(&self, scroll_left_px: f64, container_width_px: f64) -> usize {
        if self.unit_count == 0 {
            return 0;
        }
        if self.measured.len() < self.unit_count {
            return self.geometry.fallback_nearest_index(
                scroll_left_px,
                container_width_px,
                self.unit_count,
            );
        }

        let center = scroll_left_px + container_width_px / 2.0;
        self.measured
            .iter()
            .min_by_key(|(index, bounds)| {
                (OrderedFloat((bounds.center_px() - center).abs()), **index)
            })
            .map_or(0, |(index, _)| *index)
    }

    #[must_use]
    pub fn fallback_content_width_px(&self) -> f64 {
        self.geometry.fallback_content_width_px(self.unit_count)
    }
}

/// Largest reachable scroll offset for a container over its content.
#[must_use]
pub fn max_scroll_px(content_width_px: f64, container_width_px: f64) -> f64 {
    (content_width_px - container_width_px).max(0.0)
}

/// Scroll offset that centers a unit, clamped to the scrollable range.
#[must_use]
pub fn centering_scroll_px(unit_center_px: f64, container_width_px: f64, max_scroll: f64) -> f64 {
    (unit_center_px - container_width_px / 2.0)
        .max(0.0)
        .min(max_scroll)
}

#[cfg(test)]
mod tests {
    use super::{ScrubGeometry, UnitBounds, UnitLayout, centering_scroll_px, max_scroll_px};

    #[test]
    fn fallback_nearest_index_rounds_to_closest_slot() {
        let geometry = ScrubGeometry::ruler();
        // Unit 10 center = 10 * 40 + 16 = 416; container 400 => scroll 216.
        assert_eq!(geometry.fallback_nearest_index(216.0, 400.0, 100), 10);
        assert_eq!(geometry.fallback_nearest_index(235.0, 400.0, 100), 10);
        assert_eq!(geometry.fallback_nearest_index(237.0, 400.0, 100), 11);
        assert_eq!(geometry.fallback_nearest_index(-5_000.0, 400.0, 100), 0);
        assert_eq!(geometry.fallback_nearest_index(1e9, 400.0, 100), 99);
    }

    #[test]
    fn centering_clamps_to_scroll_range() {
        let max = max_scroll_px(1_000.0, 400.0);
        assert_eq!(max, 600.0);
        assert_eq!(centering_scroll_px(16.0, 400.0, max), 0.0);
        assert_eq!(centering_scroll_px(500.0, 400.0, max), 300.0);
        assert_eq!(centering_scroll_px(980.0, 400.0, max), 600.0);
        assert_eq!(max_scroll_px(100.0, 400.0), 0.0);
    }

    #[test]
    fn measured_bounds_override_fixed_geometry() {
        let mut layout = UnitLayout::new(ScrubGeometry::rail(), 3);
        layout
            .record_measurement(1, UnitBounds::new(100.0, 200.0))
            .expect("in range");
        assert_eq!(layout.unit_center_px(1), 200.0);
        assert_eq!(layout.unit_center_px(2), 2.0 * 108.0 + 46.0);
        assert!(layout.record_measurement(3, UnitBounds::new(0.0, 1.0)).is_err());
    }

    #[test]
    fn fully_measured_layout_picks_closest_center() {
        let mut layout = UnitLayout::new(ScrubGeometry::rail(), 3);
        for (index, left) in [(0, 0.0), (1, 50.0), (2, 400.0)] {
            layout
                .record_measurement(index, UnitBounds::new(left, 40.0))
                .expect("in range");
        }
        assert_eq!(layout.nearest_index(0.0, 100.0), 1);
        assert_eq!(layout.nearest_index(300.0, 200.0), 2);
    }

    #[test]
    fn empty_layout_yields_zero() {
        let layout = UnitLayout::new(ScrubGeometry::ruler(), 0);
        assert_eq!(layout.nearest_index(123.0, 400.0), 0);
        assert_eq!(layout.fallback_content_width_px(), 0.0);
    }
}
