//! timeline-dial: headless engine for historical timeline explorers.
//!
//! The crate owns the year dial's interaction state (drag, snap, click and
//! keyboard focus changes), the event and scenario lookups derived from the
//! focused year, and the panel contents a host UI draws. Hosts feed input and
//! layout measurements in, apply the emitted scroll requests and render the
//! resulting `PresentationFrame`.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
