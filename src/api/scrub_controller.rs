use tracing::{debug, warn};

use crate::core::{UnitBounds, centering_scroll_px};
use crate::error::TimelineResult;
use crate::interaction::{ScrollBehavior, ScrollRequest, ScrubMode, TimelineKey};
use crate::render::Renderer;

use super::validation::validate_surface_width;
use super::{DetailCloseReason, PluginEvent, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn scrub_mode(&self) -> ScrubMode {
        self.core.model.scrub.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.core.model.scrub.is_dragging()
    }

    /// Pointer currently holding the capture, if any.
    #[must_use]
    pub fn capture_owner(&self) -> Option<u32> {
        self.core.model.scrub.capture_owner()
    }

    #[must_use]
    pub fn scroll_left_px(&self) -> f64 {
        self.core.model.scrub.scroll_left_px()
    }

    #[must_use]
    pub fn max_scroll_px(&self) -> f64 {
        self.core.model.max_scroll_px()
    }

    /// Updates the visible width of the scrub surface and, optionally, the
    /// rendered content width. Without a content width the fixed unit
    /// geometry is used.
    ///
    /// Changed metrics recenter the focused unit with an instant scroll.
    pub fn set_surface_metrics(
        &mut self,
        container_width_px: f64,
        content_width_px: Option<f64>,
    ) -> TimelineResult<()> {
        let container = validate_surface_width("container width", container_width_px)?;
        let content = content_width_px
            .map(|width| validate_surface_width("content width", width))
            .transpose()?;

        let model = &mut self.core.model;
        let changed = model.container_width_px != container || model.content_width_px != content;
        model.container_width_px = container;
        model.content_width_px = content;
        let clamped = model.scrub.scroll_left_px().min(model.max_scroll_px());
        model.scrub.set_scroll_left_px(clamped);
        if changed {
            self.sync_scroll_to_focus();
        }
        Ok(())
    }

    /// Jumps the surface so the focused unit sits at the viewport center.
    ///
    /// Used after metrics or layout change underneath the focus. Skipped
    /// while the container width is unknown or a drag owns the surface.
    pub(super) fn sync_scroll_to_focus(&mut self) {
        let model = &self.core.model;
        if model.container_width_px <= 0.0 || model.scrub.is_dragging() {
            return;
        }
        let index = model.focus.active_tick_index();
        let left_px = self.centered_left_px(index);
        self.core.model.scrub.set_scroll_left_px(left_px);
        self.push_scroll_request(ScrollRequest {
            left_px,
            behavior: ScrollBehavior::Instant,
            unit_index: index,
        });
    }

    /// Records the rendered bounds of one unit.
    ///
    /// Invalid measurements are rejected and logged; the unit keeps using
    /// the fixed geometry.
    pub fn measure_unit(&mut self, index: usize, bounds: UnitBounds) -> TimelineResult<()> {
        self.core
            .model
            .layout
            .record_measurement(index, bounds)
            .inspect_err(|err| warn!(index, error = %err, "ignoring unit measurement"))
    }

    pub fn clear_unit_measurements(&mut self) {
        self.core.model.layout.clear_measurements();
    }

    /// Mirrors the host's actual scroll offset, e.g. after a smooth scroll
    /// settles or the user scrolls with a wheel.
    pub fn on_host_scroll(&mut self, scroll_left_px: f64) {
        if !scroll_left_px.is_finite() {
            warn!(scroll_left_px, "ignoring non-finite host scroll offset");
            return;
        }
        let model = &mut self.core.model;
        let clamped = scroll_left_px.max(0.0).min(model.max_scroll_px());
        model.scrub.set_scroll_left_px(clamped);
    }

    /// Takes the newest scroll instruction not yet applied by the host.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.core.runtime.pending_scroll.take()
    }

    #[must_use]
    pub fn pending_scroll_request(&self) -> Option<ScrollRequest> {
        self.core.runtime.pending_scroll
    }

    /// Requests a scroll that centers unit `index` in the viewport.
    pub fn scroll_unit_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        let left_px = self.centered_left_px(index);
        let unit_index = index.min(self.core.model.ticks.len().saturating_sub(1));
        self.push_scroll_request(ScrollRequest {
            left_px,
            behavior,
            unit_index,
        });
    }

    fn centered_left_px(&self, index: usize) -> f64 {
        let model = &self.core.model;
        centering_scroll_px(
            model.layout.unit_center_px(index),
            model.container_width_px,
            model.max_scroll_px(),
        )
    }

    pub(super) fn center_active_unit(&mut self, behavior: ScrollBehavior) {
        let index = self.core.model.focus.active_tick_index();
        self.scroll_unit_into_view(index, behavior);
    }

    fn push_scroll_request(&mut self, request: ScrollRequest) {
        debug!(
            left_px = request.left_px,
            unit_index = request.unit_index,
            behavior = ?request.behavior,
            "scroll requested"
        );
        self.core.runtime.pending_scroll = Some(request);
        self.emit_plugin_event(PluginEvent::ScrollRequested {
            left_px: request.left_px,
            behavior: request.behavior,
        });
    }

    /// Starts a gesture. Ignored while another pointer holds the capture or
    /// while the detail view locks the background.
    pub fn pointer_down(&mut self, pointer_id: u32, x: f64) -> bool {
        if !x.is_finite() || self.core.view.detail.is_some() {
            return false;
        }
        if !self.core.model.scrub.begin_drag(pointer_id, x) {
            return false;
        }
        self.emit_plugin_event(PluginEvent::DragStarted { pointer_id });
        true
    }

    /// Moves the surface under the capturing pointer and commits the unit
    /// nearest the viewport center. Returns `true` when focus changed.
    pub fn pointer_move(&mut self, pointer_id: u32, x: f64) -> bool {
        if !x.is_finite() {
            return false;
        }
        let model = &mut self.core.model;
        let threshold = model.layout.geometry().drag_threshold_px;
        let Some((delta, start_scroll)) = model.scrub.track_move(pointer_id, x, threshold) else {
            return false;
        };

        let left_px = (start_scroll - delta).max(0.0).min(model.max_scroll_px());
        model.scrub.set_scroll_left_px(left_px);
        let nearest = model.layout.nearest_index(left_px, model.container_width_px);
        self.push_scroll_request(ScrollRequest {
            left_px,
            behavior: ScrollBehavior::Instant,
            unit_index: nearest,
        });

        let change = self
            .core
            .model
            .focus
            .set_active_tick_index(i64::try_from(nearest).unwrap_or(i64::MAX));
        self.emit_focus_changed(change)
    }

    /// Ends the gesture. Returns `true` when it was a drag and snapped.
    pub fn pointer_up(&mut self, pointer_id: u32) -> bool {
        self.end_gesture(pointer_id)
    }

    /// Pointer cancellation ends the gesture exactly like a release.
    pub fn pointer_cancel(&mut self, pointer_id: u32) -> bool {
        self.end_gesture(pointer_id)
    }

    pub fn pointer_leave(&mut self, pointer_id: u32) -> bool {
        self.end_gesture(pointer_id)
    }

    fn end_gesture(&mut self, pointer_id: u32) -> bool {
        let Some(gesture) = self.core.model.scrub.release(pointer_id) else {
            return false;
        };
        let snapped = gesture.has_dragged;
        if snapped {
            let model = &self.core.model;
            let nearest = model
                .layout
                .nearest_index(model.scrub.scroll_left_px(), model.container_width_px);
            debug!(pointer_id, unit_index = nearest, "snapping to nearest unit");
            let change = self
                .core
                .model
                .focus
                .set_active_tick_index(i64::try_from(nearest).unwrap_or(i64::MAX));
            self.emit_focus_changed(change);
            self.scroll_unit_into_view(nearest, ScrollBehavior::Smooth);
        }
        self.emit_plugin_event(PluginEvent::DragEnded { snapped });
        snapped
    }

    /// Click on a tick or rail column. Returns `true` when focus changed.
    ///
    /// Clicks are swallowed mid-drag and once right after a completed drag.
    pub fn click_unit(&mut self, index: usize) -> bool {
        if self.core.model.scrub.take_click_suppression() {
            debug!(unit_index = index, "click suppressed after drag");
            return false;
        }
        if self.core.view.detail.is_some() || self.core.model.ticks.is_empty() {
            return false;
        }
        let change = self
            .core
            .model
            .focus
            .set_active_tick_index(i64::try_from(index).unwrap_or(i64::MAX));
        let changed = self.emit_focus_changed(change);
        self.center_active_unit(ScrollBehavior::Smooth);
        changed
    }

    /// Keyboard input for the scrub surface and the detail view.
    ///
    /// Returns `true` when the key was consumed.
    pub fn key_down(&mut self, key: TimelineKey) -> bool {
        if self.core.view.detail.is_some() {
            if key == TimelineKey::Escape {
                return self.close_detail(DetailCloseReason::Escape).is_some();
            }
            return false;
        }

        match key {
            TimelineKey::ArrowLeft | TimelineKey::ArrowRight => {
                if self.is_dragging() {
                    return false;
                }
                let delta = key.nudge_delta().unwrap_or(0);
                let change = self.core.model.focus.nudge(delta);
                self.emit_focus_changed(change);
                self.center_active_unit(ScrollBehavior::Smooth);
                true
            }
            TimelineKey::Enter | TimelineKey::Space => self.activate_highlighted_event(),
            TimelineKey::Escape | TimelineKey::Other => false,
        }
    }
}
