//! Standalone dropdown: a labelled toggle and the list of links it reveals
//!
//! Owns a single disclosure panel keyed by its label. Picking an item or
//! pressing anywhere outside the dropdown closes it.

use dioxus::prelude::*;
use vela_common::schemas::dropdown::{dropdown_item, dropdown_menu, dropdown_toggle};
use vela_common::{resolve, DisclosureController, DropdownLink, StyleConfig};

use crate::components::button::ChromelessButton;
use crate::components::icons::{ChevronDownIcon, ChevronUpIcon};
use crate::components::utils::attr;
use crate::disclosure::use_disclosure;

#[component]
pub fn Dropdown(
    label: String,
    items: Vec<DropdownLink>,
    #[props(default, into)] class: Option<String>,
    /// Called with the item's link when an item is picked
    #[props(default)]
    on_select: Option<EventHandler<String>>,
) -> Element {
    let panel_label = label.clone();
    let mut panels = use_disclosure(move || DisclosureController::with_panels([panel_label]));
    let is_open = panels.is_open(label.as_str());

    let toggle = resolve(
        &StyleConfig::new().flag("open", is_open),
        dropdown_toggle(),
    );
    let menu_class = resolve(
        &StyleConfig::new().set_opt("class", class.clone()),
        dropdown_menu(),
    )
    .class_string();
    let item_class = resolve(&StyleConfig::new(), dropdown_item()).class_string();

    rsx! {
        div {
            id: panels.root_id(),
            class: "dropdown-container relative",
            ChromelessButton {
                class: Some(toggle.class_string()),
                aria_expanded: attr(&toggle, "aria-expanded"),
                aria_haspopup: Some("true"),
                onclick: {
                    let label = label.clone();
                    move |_| panels.toggle(label.as_str())
                },
                "{label}"
                if is_open {
                    ChevronUpIcon { class: "ml-2 w-4 h-4" }
                } else {
                    ChevronDownIcon { class: "ml-2 w-4 h-4" }
                }
            }
            if is_open {
                div { class: "{menu_class}",
                    for (index, item) in items.iter().enumerate() {
                        a {
                            key: "{index}",
                            class: "{item_class}",
                            href: "{item.link}",
                            onclick: {
                                let label = label.clone();
                                let link = item.link.clone();
                                move |_| {
                                    panels.request_close(label.as_str());
                                    if let Some(handler) = &on_select {
                                        handler.call(link.clone());
                                    }
                                }
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
