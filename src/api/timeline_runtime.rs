use crate::extensions::TimelinePlugin;
use crate::interaction::ScrollRequest;

/// Runtime state that exists only while the engine is driven by a host.
#[derive(Default)]
pub(super) struct TimelineRuntimeState {
    pub(super) plugins: Vec<Box<dyn TimelinePlugin>>,
    /// Newest scroll instruction not yet taken by the host.
    pub(super) pending_scroll: Option<ScrollRequest>,
}
