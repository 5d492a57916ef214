use pagebar_domain::position::{Edge, PositionStyle};
use pagebar_domain::sticky::StickyDescriptor;
use tracing::debug;

/// Classifies how the sidebar container anchors itself.
///
/// No descriptor, or one with neither edge requested, anchors to the viewport.
/// Otherwise the bar is absolutely positioned with each requested edge pinned;
/// requesting both pins both. The horizontal offsets are not consulted.
#[must_use]
pub fn resolve_position(descriptor: Option<StickyDescriptor>) -> PositionStyle {
    let style = match descriptor {
        Some(sticky) if sticky.is_sticky() => PositionStyle::Absolute {
            top: Edge::pinned_if(sticky.should_stick_to_top),
            bottom: Edge::pinned_if(sticky.should_stick_to_bottom),
        },
        _ => PositionStyle::Fixed,
    };

    debug!(anchoring = %style, "Resolved sidebar position");
    style
}
