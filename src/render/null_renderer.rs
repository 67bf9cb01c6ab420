use crate::error::TimelineResult;
use crate::render::{PresentationFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch inconsistent panels
/// before a real host is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_focus_year: Option<i32>,
    pub last_stack_count: usize,
    pub last_card_count: usize,
    pub last_column_count: usize,
    pub last_detail_open: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PresentationFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_focus_year = Some(frame.focus_year);
        self.last_stack_count = frame.era_stacks.len();
        self.last_card_count = frame.card_count();
        self.last_column_count = frame.rail_columns.len();
        self.last_detail_open = frame.detail.is_some();
        Ok(())
    }
}
