use tracing::debug;

use crate::core::FocusChange;
use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{PluginEvent, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let model = &self.core.model;
        PluginContext {
            focus_year: model.focus.focus_year(),
            min_year: model.focus.min_year(),
            max_year: model.focus.max_year(),
            era_step: model.index.era_step(),
            active_tick_index: model.focus.active_tick_index(),
            tick_count: model.ticks.len(),
            scrub_mode: model.scrub.mode(),
            detail_open: self.core.view.detail.is_some(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(&event, context);
        }
    }

    /// Reports a committed focus change; `None` is a no-op and emits nothing.
    pub(super) fn emit_focus_changed(&mut self, change: Option<FocusChange>) -> bool {
        let Some(change) = change else {
            return false;
        };
        debug!(
            previous_year = change.previous_year,
            focus_year = change.focus_year,
            "focus committed"
        );
        self.emit_plugin_event(PluginEvent::FocusChanged {
            previous_year: change.previous_year,
            focus_year: change.focus_year,
        });
        true
    }
}
