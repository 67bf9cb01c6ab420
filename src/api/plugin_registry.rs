use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelinePlugin;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(TimelineError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if self.has_plugin(&plugin_id) {
            return Err(TimelineError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
        debug!(
            plugin_id = %plugin_id,
            focus_year = self.focus_year(),
            "timeline plugin registered"
        );
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        if let Some(position) = self
            .core
            .runtime
            .plugins
            .iter()
            .position(|entry| entry.id() == plugin_id)
        {
            self.core.runtime.plugins.remove(position);
            debug!(plugin_id, "timeline plugin unregistered");
            return true;
        }
        false
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core
            .runtime
            .plugins
            .iter()
            .any(|plugin| plugin.id() == plugin_id)
    }
}
