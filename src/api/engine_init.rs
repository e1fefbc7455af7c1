use tracing::debug;

use crate::error::GuideResult;

use super::{
    GuideEngine, GuideEngineConfig, engine_core::EngineCore, guide_model::GuideModel,
    guide_runtime::GuideRuntimeState, validation::validate_engine_config,
};

impl<T> GuideEngine<T> {
    /// Creates an engine without data. Call `set_initial_range` and
    /// `load_data` before rendering.
    pub fn new(config: GuideEngineConfig) -> GuideResult<Self> {
        validate_engine_config(config)?;
        debug!(
            policy = ?config.timeline_policy,
            min_duration_ms = config.normalization.entry_min_duration_millis,
            max_gap_ms = config.normalization.max_unaccounted_gap_millis,
            "guide engine created"
        );
        Ok(Self {
            core: EngineCore {
                config,
                model: GuideModel::empty(),
                runtime: GuideRuntimeState::new(),
            },
        })
    }
}
