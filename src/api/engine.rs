use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `GuideEngine` coordinates schedule normalization, the visible time range,
/// read queries, single-entry mutation and change notification. `T` is the
/// host payload attached to real programs.
///
/// The engine is meant to be driven from one thread; listeners are not
/// `Send`, so handing it across threads requires the host to marshal calls.
pub struct GuideEngine<T> {
    pub(super) core: EngineCore<T>,
}
