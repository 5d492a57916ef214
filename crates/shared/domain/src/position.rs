use serde::{Deserialize, Serialize};
use std::fmt;

/// How one vertical edge of an absolutely positioned bar is constrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Edge {
    /// Pinned at offset `0`.
    Pinned,
    /// Left to the layout engine (`auto`).
    Auto,
}

impl Edge {
    #[must_use]
    pub const fn pinned_if(pinned: bool) -> Self {
        if pinned { Self::Pinned } else { Self::Auto }
    }

    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Pinned => "0",
            Self::Auto => "auto",
        }
    }
}

/// Anchoring of the sidebar container. Derived per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "camelCase")]
pub enum PositionStyle {
    /// Anchored to the viewport regardless of scroll.
    Fixed,
    /// Positioned inside the sticky region with optionally pinned edges.
    Absolute { top: Edge, bottom: Edge },
}

impl PositionStyle {
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }

    /// Inline CSS declarations for the container's `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PositionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => f.write_str("position: fixed;"),
            Self::Absolute { top, bottom } => write!(
                f,
                "position: absolute; bottom: {}; top: {};",
                bottom.css_value(),
                top.css_value()
            ),
        }
    }
}
