use serde::{Deserialize, Serialize};

use crate::interaction::{ScrollBehavior, ScrubMode};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub focus_year: i32,
    pub min_year: i32,
    pub max_year: i32,
    pub era_step: i32,
    pub active_tick_index: usize,
    pub tick_count: usize,
    pub scrub_mode: ScrubMode,
    pub detail_open: bool,
}

/// How the detail view was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetailCloseReason {
    CloseButton,
    Escape,
    Backdrop,
    /// The event source was replaced and no longer contains the event.
    EventRemoved,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    FocusChanged {
        previous_year: i32,
        focus_year: i32,
    },
    DragStarted {
        pointer_id: u32,
    },
    DragEnded {
        snapped: bool,
    },
    ScrollRequested {
        left_px: f64,
        behavior: ScrollBehavior,
    },
    EventHighlighted {
        tick_year: i32,
        event_id: String,
    },
    DetailOpened {
        event_id: String,
    },
    DetailClosed {
        event_id: String,
        reason: DetailCloseReason,
    },
    TicksRegenerated {
        tick_count: usize,
    },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating engine
/// state directly.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: PluginContext);
}
