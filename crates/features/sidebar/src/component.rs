use crate::model::SidebarModel;
use crate::slot::{SidebarCommand, SlotButton};
use dioxus::prelude::*;
use pagebar_domain::config::SidebarConfig;
use pagebar_domain::constants::LABEL_OPEN_DRAWER;
use pagebar_domain::sticky::StickyDescriptor;
use pagebar_kernel::i18n::Catalog;
use tracing::debug;

/// Top app bar for the page editor.
///
/// Labels come from a [`Catalog`] provided as context; without one every label
/// renders empty. `sticky` is the host's latest measurement and overrides the
/// configured state; pass `None` until the page has been measured. Button presses are forwarded through `on_command`.
#[component]
pub fn Sidebar(
    config: SidebarConfig,
    #[props(!optional)]
    sticky: Option<StickyDescriptor>,
    on_drawer_toggle: Option<EventHandler<()>>,
    on_command: EventHandler<SidebarCommand>,
) -> Element {
    let catalog = try_use_context::<Catalog>().unwrap_or_default();
    let model = SidebarModel::from_config(&config, sticky, &catalog);
    let style = model.style();
    let slots: Vec<(usize, Vec<SlotButton>)> =
        model.slots().iter().map(|slot| (slot.key(), slot.buttons())).collect();

    rsx! {
        header { class: "pagebar", role: "toolbar", style: "{style}",
            button {
                class: "pagebar-drawer",
                aria_label: LABEL_OPEN_DRAWER,
                onclick: move |_| {
                    if let Some(handler) = on_drawer_toggle {
                        handler.call(());
                    }
                },
                "☰"
            }
            div { class: "pagebar-spacer" }
            div { class: "pagebar-actions",
                for (slot_key, controls) in slots {
                    div { key: "{slot_key}", class: "pagebar-slot",
                        for (index, control) in controls.into_iter().enumerate() {
                            SlotControl { key: "{index}", control, on_command }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SlotControl(control: SlotButton, on_command: EventHandler<SidebarCommand>) -> Element {
    let SlotButton { label, icon, command } = control;

    rsx! {
        button {
            class: "pagebar-button",
            title: "{label}",
            onclick: move |_| {
                debug!(?command, "Sidebar command");
                on_command.call(command.clone());
            },
            if let Some(icon) = icon {
                span { class: "pagebar-icon", "{icon}" }
            }
            span { class: "pagebar-label", "{label}" }
        }
    }
}
