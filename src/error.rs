use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid event `{id}`: {reason}")]
    InvalidEvent { id: String, reason: String },

    #[error("invalid scenario catalog: {0}")]
    InvalidScenario(String),

    #[error("unknown event id `{0}`")]
    UnknownEvent(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
