use dioxus::prelude::*;
use pagebar::domain::config::SidebarConfig;
use pagebar::domain::sticky::StickyDescriptor;
use pagebar::sidebar::{Sidebar, SidebarCommand};
use tracing::info;

/// Custom action id the demo host uses to toggle sticky-to-top anchoring.
pub const PIN_ACTION: &str = "pin";

/// Demo host page: the sidebar, a drawer, and a status line echoing the last command.
#[component]
pub fn Root() -> Element {
    let config = try_use_context::<SidebarConfig>().unwrap_or_default();
    let initial_sticky = config.sticky;

    let mut drawer_open = use_signal(|| false);
    let mut sticky = use_signal(move || initial_sticky);
    let mut last_command = use_signal(|| None::<SidebarCommand>);

    let status = last_command().map_or_else(|| "No command yet".to_owned(), |command| format!("{command:?}"));

    rsx! {
        Sidebar {
            config,
            sticky: sticky(),
            on_drawer_toggle: move |()| drawer_open.toggle(),
            on_command: move |command: SidebarCommand| {
                if command == SidebarCommand::Custom(PIN_ACTION.to_owned()) {
                    let next = match sticky() {
                        Some(current) if current.is_sticky() => None,
                        _ => Some(StickyDescriptor::top()),
                    };
                    info!(pinned = next.is_some(), "Toggled sidebar anchoring");
                    sticky.set(next);
                }
                last_command.set(Some(command));
            },
        }
        if drawer_open() {
            nav { class: "pagebar-drawer-panel", "Pages" }
        }
        main { class: "page", p { "{status}" } }
    }
}
