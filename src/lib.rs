//! epg-rs: electronic program guide core.
//!
//! This crate turns raw per-channel broadcast listings into contiguous,
//! gap-filled timelines and manages a clamped, scrollable time window over
//! them. Rendering, focus widgets and data fetching stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{GuideEngine, GuideEngineConfig};
pub use error::{GuideError, GuideResult};
