//! Host-facing guide facade.
//!
//! `GuideEngine` owns the normalized dataset and the viewport. Its behavior is
//! split across controller files that each add an `impl` block.

mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod focus_controller;
mod focus_resolver;
mod guide_model;
mod guide_runtime;
mod listener_dispatch;
mod listener_registry;
mod mutation_controller;
mod navigation_controller;
mod navigation_target_resolver;
mod query_controller;
mod snapshot_controller;
mod time_range_controller;
mod validation;

pub use engine::GuideEngine;
pub use engine_config::{GuideEngineConfig, TimeOfDayHours};
pub use engine_snapshot::{ChannelSnapshot, EntrySnapshot, GuideSnapshot};
pub use focus_resolver::FocusRequest;
pub use navigation_controller::{AutoScrollOutcome, AutoScrollRequest, ChannelScrollOutcome};
pub use navigation_target_resolver::{TimeOfDay, TimelineRuler};

pub use crate::extensions::{GuideEvent, GuideListener, ListenerDisposition};
