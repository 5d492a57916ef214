use pagebar_domain::position::{Edge, PositionStyle};
use pagebar_domain::sticky::StickyDescriptor;

#[test]
fn fixed_renders_single_declaration() {
    assert_eq!(PositionStyle::Fixed.to_css(), "position: fixed;");
    assert!(PositionStyle::Fixed.is_fixed());
}

#[test]
fn absolute_renders_bottom_then_top() {
    let style = PositionStyle::Absolute { top: Edge::Pinned, bottom: Edge::Auto };
    assert_eq!(style.to_css(), "position: absolute; bottom: auto; top: 0;");
    assert!(!style.is_fixed());
}

#[test]
fn edge_helper_maps_flags() {
    assert_eq!(Edge::pinned_if(true), Edge::Pinned);
    assert_eq!(Edge::pinned_if(false), Edge::Auto);
}

#[test]
fn sticky_descriptor_reads_camel_case() {
    let sticky: StickyDescriptor = serde_json::from_str(
        r#"{ "shouldStickToTop": true, "shouldStickToBottom": false, "rightOffset": 4, "rightOffsetFixed": 8 }"#,
    )
    .expect("descriptor deserialize");

    assert!(sticky.is_sticky());
    assert!(sticky.should_stick_to_top);
    assert!((sticky.right_offset_fixed - 8.0).abs() < f64::EPSILON);
    assert!(!StickyDescriptor::default().is_sticky());
}
