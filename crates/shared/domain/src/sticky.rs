use serde::{Deserialize, Serialize};

/// Host-measured scroll boundary state for the sidebar container.
///
/// Built fresh by the host on every layout change; the sidebar never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StickyDescriptor {
    pub should_stick_to_top: bool,
    pub should_stick_to_bottom: bool,
    /// Horizontal offset while pinned inside the sticky region.
    pub right_offset: f64,
    /// Horizontal offset while anchored to the viewport.
    pub right_offset_fixed: f64,
}

impl StickyDescriptor {
    #[must_use]
    pub const fn top() -> Self {
        Self {
            should_stick_to_top: true,
            should_stick_to_bottom: false,
            right_offset: 0.0,
            right_offset_fixed: 0.0,
        }
    }

    #[must_use]
    pub const fn bottom() -> Self {
        Self {
            should_stick_to_top: false,
            should_stick_to_bottom: true,
            right_offset: 0.0,
            right_offset_fixed: 0.0,
        }
    }

    /// True when at least one edge asks to follow the sticky region.
    #[must_use]
    pub const fn is_sticky(&self) -> bool {
        self.should_stick_to_top || self.should_stick_to_bottom
    }
}
