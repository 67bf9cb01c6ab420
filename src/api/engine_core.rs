use super::{
    timeline_model::TimelineModel, timeline_runtime::TimelineRuntimeState, view_state::ViewState,
};

/// Internal engine core state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore {
    pub(super) model: TimelineModel,
    pub(super) view: ViewState,
    pub(super) runtime: TimelineRuntimeState,
}
