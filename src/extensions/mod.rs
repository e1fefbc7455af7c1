//! Host-facing extension points.
//!
//! Listeners observe engine changes without reaching into the model.

pub mod listeners;

pub use listeners::{GuideEvent, GuideListener, ListenerDisposition};
