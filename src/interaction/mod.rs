use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrubMode {
    Idle,
    Dragging,
}

/// Keys the scrub surface and detail view react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    Other,
}

impl TimelineKey {
    /// Year delta for arrow keys.
    #[must_use]
    pub fn nudge_delta(self) -> Option<i32> {
        match self {
            Self::ArrowLeft => Some(-1),
            Self::ArrowRight => Some(1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Fire-and-forget scroll instruction for the host.
///
/// A newer request supersedes any request the host has not applied yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub left_px: f64,
    pub behavior: ScrollBehavior,
    pub unit_index: usize,
}

/// In-flight pointer gesture.
///
/// Holding a gesture is holding the pointer capture: only `pointer_id` is
/// interpreted until the gesture is released.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragGesture {
    pub pointer_id: u32,
    pub start_x: f64,
    pub start_scroll_px: f64,
    pub has_dragged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubState {
    gesture: Option<DragGesture>,
    suppress_next_click: bool,
    scroll_left_px: f64,
}

impl Default for ScrubState {
    fn default() -> Self {
        Self {
            gesture: None,
            suppress_next_click: false,
            scroll_left_px: 0.0,
        }
    }
}

impl ScrubState {
    #[must_use]
    pub fn mode(self) -> ScrubMode {
        if self.gesture.is_some() {
            ScrubMode::Dragging
        } else {
            ScrubMode::Idle
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn has_dragged(self) -> bool {
        self.gesture.is_some_and(|gesture| gesture.has_dragged)
    }

    #[must_use]
    pub fn gesture(self) -> Option<DragGesture> {
        self.gesture
    }

    #[must_use]
    pub fn capture_owner(self) -> Option<u32> {
        self.gesture.map(|gesture| gesture.pointer_id)
    }

    #[must_use]
    pub fn scroll_left_px(self) -> f64 {
        self.scroll_left_px
    }

    pub fn set_scroll_left_px(&mut self, scroll_left_px: f64) {
        self.scroll_left_px = scroll_left_px;
    }

    /// Acquires the pointer capture.
    ///
    /// Returns `false` without touching state when another pointer already
    /// owns the capture.
    pub fn begin_drag(&mut self, pointer_id: u32, x: f64) -> bool {
        if self.gesture.is_some() {
            return false;
        }
        self.gesture = Some(DragGesture {
            pointer_id,
            start_x: x,
            start_scroll_px: self.scroll_left_px,
            has_dragged: false,
        });
        self.suppress_next_click = false;
        true
    }

    /// Records pointer travel for the capturing pointer.
    ///
    /// Returns `(delta_x, start_scroll_px)` or `None` for foreign pointers
    /// and when no gesture is active. The drag flag latches once the travel
    /// exceeds `threshold_px`.
    pub fn track_move(
        &mut self,
        pointer_id: u32,
        x: f64,
        threshold_px: f64,
    ) -> Option<(f64, f64)> {
        let gesture = self.gesture.as_mut()?;
        if gesture.pointer_id != pointer_id {
            return None;
        }
        let delta = x - gesture.start_x;
        if delta.abs() > threshold_px {
            gesture.has_dragged = true;
        }
        Some((delta, gesture.start_scroll_px))
    }

    /// Releases the pointer capture held by `pointer_id`.
    ///
    /// This is the only way out of `Dragging`; up, cancel and leave all end
    /// here. A completed drag arms suppression of the trailing click.
    pub fn release(&mut self, pointer_id: u32) -> Option<DragGesture> {
        if self.capture_owner() != Some(pointer_id) {
            return None;
        }
        let gesture = self.gesture.take()?;
        self.suppress_next_click = gesture.has_dragged;
        Some(gesture)
    }

    /// Consumes click suppression.
    ///
    /// A click is suppressed mid-drag and once right after a completed drag.
    pub fn take_click_suppression(&mut self) -> bool {
        if self.has_dragged() {
            return true;
        }
        std::mem::take(&mut self.suppress_next_click)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrubMode, ScrubState};

    #[test]
    fn foreign_pointer_cannot_steal_capture() {
        let mut state = ScrubState::default();
        assert!(state.begin_drag(1, 10.0));
        assert!(!state.begin_drag(2, 50.0));
        assert!(state.track_move(2, 80.0, 5.0).is_none());
        assert!(state.release(2).is_none());
        assert_eq!(state.mode(), ScrubMode::Dragging);
        assert!(state.release(1).is_some());
        assert_eq!(state.mode(), ScrubMode::Idle);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut state = ScrubState::default();
        state.begin_drag(1, 100.0);
        state.track_move(1, 105.0, 5.0);
        assert!(!state.has_dragged());
        state.track_move(1, 94.9, 5.0);
        assert!(state.has_dragged());
    }

    #[test]
    fn trailing_click_after_drag_is_suppressed_once() {
        let mut state = ScrubState::default();
        state.begin_drag(7, 0.0);
        state.track_move(7, 40.0, 5.0);
        assert!(state.take_click_suppression());
        state.release(7);
        assert!(state.take_click_suppression());
        assert!(!state.take_click_suppression());
    }
}
