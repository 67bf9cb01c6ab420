mod frame;
mod null_renderer;

pub use frame::{
    ColumnDistance, DetailPanelView, EraPosition, EraStackView, EventCardView, FilterChipView,
    FilterPanelView, FocusPlaceholderView, MapPanelView, PresentationFrame, RailColumnView,
};
pub use null_renderer::NullRenderer;

use crate::error::TimelineResult;

/// Contract implemented by any host drawing backend.
///
/// Backends receive a fully derived `PresentationFrame` so drawing code stays
/// isolated from focus, scrub and detail-view logic.
pub trait Renderer {
    fn render(&mut self, frame: &PresentationFrame) -> TimelineResult<()>;
}
