use super::{GuideEngineConfig, guide_model::GuideModel, guide_runtime::GuideRuntimeState};

/// Internal engine core state used by the public facade (`GuideEngine`).
pub(super) struct EngineCore<T> {
    pub(super) config: GuideEngineConfig,
    pub(super) model: GuideModel<T>,
    pub(super) runtime: GuideRuntimeState,
}
