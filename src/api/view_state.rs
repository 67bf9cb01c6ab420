use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::FilterPanelState;

/// Element holding keyboard focus, as far as the engine tracks it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    #[default]
    None,
    ScrubSurface,
    DetailView,
    /// Host-defined element, identified by the host's own key.
    Element(String),
}

/// Open detail view plus what to restore once it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct OpenDetail {
    pub(super) event_id: String,
    pub(super) restore_focus: FocusTarget,
    pub(super) restore_scroll_lock: bool,
}

/// Presentation-side state that is not derivable from focus alone.
#[derive(Debug, Default)]
pub(super) struct ViewState {
    /// Highlighted event per tick year; single clicks only ever land here.
    pub(super) highlights: IndexMap<i32, String>,
    pub(super) detail: Option<OpenDetail>,
    pub(super) filters: FilterPanelState,
    pub(super) keyboard_focus: FocusTarget,
    pub(super) background_scroll_locked: bool,
}
