use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// One historical event spanning an inclusive year range.
///
/// Events are immutable once constructed; the engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
    pub year_start: i32,
    pub year_end: i32,
}

impl TimelineEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year_start: i32,
        year_end: i32,
    ) -> TimelineResult<Self> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            location: String::new(),
            description: String::new(),
            tags: Vec::new(),
            year_start,
            year_end,
        };
        event.validate()?;
        Ok(event)
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if self.id.is_empty() {
            return Err(TimelineError::InvalidEvent {
                id: self.id.clone(),
                reason: "id must not be empty".to_owned(),
            });
        }
        if self.year_start > self.year_end {
            return Err(TimelineError::InvalidEvent {
                id: self.id.clone(),
                reason: format!(
                    "year_start ({}) must be <= year_end ({})",
                    self.year_start, self.year_end
                ),
            });
        }
        Ok(())
    }

    /// Midpoint year used to place the event on the single-year axis.
    ///
    /// Halves round toward positive infinity: `[-3, 0]` lands on `-1`,
    /// `[98, 101]` lands on `100`.
    #[must_use]
    pub fn representative_year(&self) -> i32 {
        let sum = i64::from(self.year_start) + i64::from(self.year_end);
        // Bounded by the i32 inputs, so the narrowing cannot truncate.
        (sum + 1).div_euclid(2) as i32
    }
}

/// Free-function form of [`TimelineEvent::representative_year`].
#[must_use]
pub fn representative_year(event: &TimelineEvent) -> i32 {
    event.representative_year()
}
