use serde::{Deserialize, Serialize};

/// Broadcast channel row of the guide.
///
/// Channels are owned by the host and referenced by `id` everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ordinal: u32,
}

impl Channel {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            ordinal: 0,
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = ordinal;
        self
    }
}

/// Half-open millisecond interval `[start_millis, end_millis)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_millis: i64,
    pub end_millis: i64,
}

impl TimeRange {
    #[must_use]
    pub fn new(start_millis: i64, end_millis: i64) -> Self {
        Self {
            start_millis,
            end_millis,
        }
    }

    #[must_use]
    pub fn span_millis(self) -> i64 {
        self.end_millis.saturating_sub(self.start_millis)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.end_millis <= self.start_millis
    }

    #[must_use]
    pub fn contains(self, time_millis: i64) -> bool {
        self.start_millis <= time_millis && time_millis < self.end_millis
    }

    /// Returns the overlap of both ranges, or `None` when they do not overlap.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let start = self.start_millis.max(other.start_millis);
        let end = self.end_millis.min(other.end_millis);
        (start < end).then_some(Self::new(start, end))
    }

    #[must_use]
    pub fn midpoint(self) -> i64 {
        self.start_millis + self.span_millis() / 2
    }
}

/// Outer window and visible sub-range of the guide timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineBounds {
    pub window_start: i64,
    pub window_end: i64,
    pub view_start: i64,
    pub view_end: i64,
}

impl TimelineBounds {
    #[must_use]
    pub fn window(self) -> TimeRange {
        TimeRange::new(self.window_start, self.window_end)
    }

    #[must_use]
    pub fn view(self) -> TimeRange {
        TimeRange::new(self.view_start, self.view_end)
    }

    #[must_use]
    pub fn view_width(self) -> i64 {
        self.view().span_millis()
    }
}
