#![cfg(feature = "client")]

use dioxus::prelude::*;
use pagebar_domain::config::{CustomAction, EditorOptions, SidebarConfig};
use pagebar_domain::sticky::StickyDescriptor;
use pagebar_kernel::i18n::Catalog;
use pagebar_sidebar::{Sidebar, SidebarCommand};

fn edit_preview_and_custom() -> SidebarConfig {
    let editor = EditorOptions { edit_enabled: true, preview_enabled: true, ..EditorOptions::default() }
        .with_custom_options([CustomAction::new("a", "A")]);
    SidebarConfig::new(editor, None)
}

fn render(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("`{needle}` missing from {html}"))
}

fn pinned_with_catalog() -> Element {
    use_context_provider(|| {
        Catalog::from_pairs([("Edit blocks", "Edit"), ("Preview page", "Preview")])
    });

    rsx! {
        Sidebar {
            config: edit_preview_and_custom(),
            sticky: Some(StickyDescriptor::top()),
            on_drawer_toggle: move |()| {},
            on_command: move |_: SidebarCommand| {},
        }
    }
}

fn unmeasured_without_catalog() -> Element {
    rsx! {
        Sidebar {
            config: edit_preview_and_custom(),
            sticky: None,
            on_command: move |_: SidebarCommand| {},
        }
    }
}

#[test]
fn header_is_a_toolbar_styled_by_the_resolved_position() {
    let html = render(pinned_with_catalog);

    assert!(html.starts_with("<header"), "{html}");
    assert!(html.contains(r#"role="toolbar""#), "{html}");
    assert!(html.contains(r#"style="position: absolute; bottom: auto; top: 0;""#), "{html}");
}

#[test]
fn drawer_control_precedes_the_action_area() {
    let html = render(pinned_with_catalog);

    let drawer = position_of(&html, r#"aria-label="open drawer""#);
    let actions = position_of(&html, r#"class="pagebar-actions""#);
    assert!(drawer < actions);
}

#[test]
fn one_slot_per_composed_action_in_order() {
    let html = render(pinned_with_catalog);

    assert_eq!(html.matches(r#"class="pagebar-slot""#).count(), 3);

    let edit = position_of(&html, r#"title="Edit""#);
    let preview = position_of(&html, r#"title="Preview""#);
    let custom = position_of(&html, r#"title="A""#);
    assert!(edit < preview && preview < custom, "{html}");
    assert!(position_of(&html, "✎") < position_of(&html, "◉"));
}

#[test]
fn missing_catalog_and_handler_still_render_every_control() {
    let html = render(unmeasured_without_catalog);

    assert!(html.contains(r#"style="position: fixed;""#), "{html}");
    assert!(html.contains(r#"aria-label="open drawer""#), "{html}");
    assert_eq!(html.matches(r#"class="pagebar-slot""#).count(), 3);
    assert!(!html.contains(r#"title="Edit""#));
    assert!(html.contains(r#"title="A""#));
}
