use tracing::debug;

use crate::core::TimelineEvent;
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::view_state::{FocusTarget, OpenDetail};
use super::{DetailCloseReason, PluginEvent, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn is_detail_open(&self) -> bool {
        self.core.view.detail.is_some()
    }

    #[must_use]
    pub fn detail_event(&self) -> Option<&TimelineEvent> {
        let detail = self.core.view.detail.as_ref()?;
        self.core.model.index.event_by_id(&detail.event_id)
    }

    #[must_use]
    pub fn keyboard_focus(&self) -> &FocusTarget {
        &self.core.view.keyboard_focus
    }

    /// Tells the engine which element the host has focused.
    pub fn set_keyboard_focus(&mut self, target: FocusTarget) {
        self.core.view.keyboard_focus = target;
    }

    #[must_use]
    pub fn background_scroll_locked(&self) -> bool {
        self.core.view.background_scroll_locked
    }

    /// Host-driven background lock. While the detail view is open the lock
    /// stays on and the new value is applied on close instead.
    pub fn set_background_scroll_locked(&mut self, locked: bool) {
        let view = &mut self.core.view;
        match view.detail.as_mut() {
            Some(detail) => detail.restore_scroll_lock = locked,
            None => view.background_scroll_locked = locked,
        }
    }

    /// Highlighted event of the tick at `tick_year`, if any.
    #[must_use]
    pub fn highlighted_event_id(&self, tick_year: i32) -> Option<&str> {
        self.core.view.highlights.get(&tick_year).map(String::as_str)
    }

    /// Marks `event_id` as the highlighted card of tick `tick_index`.
    ///
    /// The event must belong to that tick. Highlighting never opens the
    /// detail view.
    pub fn highlight_event(&mut self, tick_index: usize, event_id: &str) -> TimelineResult<()> {
        let tick = self.core.model.ticks.get(tick_index).ok_or_else(|| {
            TimelineError::InvalidData(format!("tick index {tick_index} is out of range"))
        })?;
        if !tick.events.iter().any(|event| event.id == event_id) {
            return Err(TimelineError::UnknownEvent(event_id.to_owned()));
        }
        let tick_year = tick.year;
        self.core
            .view
            .highlights
            .insert(tick_year, event_id.to_owned());
        self.emit_plugin_event(PluginEvent::EventHighlighted {
            tick_year,
            event_id: event_id.to_owned(),
        });
        Ok(())
    }

    /// Single click on an event card: highlights unless the click trails a
    /// drag. Returns `true` when the highlight was applied.
    pub fn click_event(&mut self, tick_index: usize, event_id: &str) -> TimelineResult<bool> {
        if self.core.model.scrub.take_click_suppression() {
            return Ok(false);
        }
        self.highlight_event(tick_index, event_id)?;
        Ok(true)
    }

    /// Opens the detail view for `event_id` (double click or "view details").
    ///
    /// Activating another event while open swaps the content and keeps the
    /// original focus and scroll state for restoration.
    pub fn activate_event(&mut self, event_id: &str) -> TimelineResult<()> {
        if self.core.model.index.event_by_id(event_id).is_none() {
            return Err(TimelineError::UnknownEvent(event_id.to_owned()));
        }

        let view = &mut self.core.view;
        if let Some(detail) = view.detail.as_mut() {
            if detail.event_id == event_id {
                return Ok(());
            }
            detail.event_id = event_id.to_owned();
        } else {
            let restore_focus =
                std::mem::replace(&mut view.keyboard_focus, FocusTarget::DetailView);
            view.detail = Some(OpenDetail {
                event_id: event_id.to_owned(),
                restore_focus,
                restore_scroll_lock: view.background_scroll_locked,
            });
            view.background_scroll_locked = true;
        }

        debug!(event_id, "detail view opened");
        self.emit_plugin_event(PluginEvent::DetailOpened {
            event_id: event_id.to_owned(),
        });
        Ok(())
    }

    /// Opens the highlighted event of the active tick, if there is one.
    pub fn activate_highlighted_event(&mut self) -> bool {
        let Some(tick) = self.core.model.active_tick() else {
            return false;
        };
        let Some(event_id) = self.core.view.highlights.get(&tick.year).cloned() else {
            return false;
        };
        self.activate_event(&event_id).is_ok()
    }

    /// Closes the detail view and restores focus and background scroll.
    ///
    /// Returns the focus target handed back to the host, or `None` when
    /// nothing was open.
    pub fn close_detail(&mut self, reason: DetailCloseReason) -> Option<FocusTarget> {
        let detail = self.core.view.detail.take()?;
        let view = &mut self.core.view;
        view.keyboard_focus = detail.restore_focus.clone();
        view.background_scroll_locked = detail.restore_scroll_lock;

        debug!(event_id = %detail.event_id, ?reason, "detail view closed");
        self.emit_plugin_event(PluginEvent::DetailClosed {
            event_id: detail.event_id,
            reason,
        });
        Some(detail.restore_focus)
    }

    /// Click on the dimmed area around the detail view.
    pub fn backdrop_click(&mut self) -> bool {
        self.close_detail(DetailCloseReason::Backdrop).is_some()
    }
}
