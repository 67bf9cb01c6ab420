//! Observer hooks for host-side extensions.
//!
//! Plugins only observe; every state change still goes through the engine.

pub mod plugins;

pub use plugins::{DetailCloseReason, PluginContext, PluginEvent, TimelinePlugin};
