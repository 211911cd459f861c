//! Header with title, navigation, dropdown groups and a mobile menu
//!
//! Every dropdown group and the mobile menu is its own disclosure panel.
//! Panels open independently; a press outside the header closes them all.

use dioxus::prelude::*;
use vela_common::schemas::header::{
    dropdown_arrow, group_toggle, hamburger, header, header_title, mobile_nav, mobile_toggle,
};
use vela_common::{
    resolve, DisclosureController, DisclosureState, DropdownGroup, Navigation, PanelId,
    StyleConfig,
};

use crate::components::button::ChromelessButton;
use crate::components::icons::HomeIcon;
use crate::components::utils::{attr, style_attr};
use crate::disclosure::{use_disclosure, Disclosure};

fn open_class(schema: &vela_common::OptionSchema, open: bool) -> String {
    resolve(&StyleConfig::new().flag("open", open), schema).class_string()
}

/// Header (props-based, owns its disclosure state).
///
/// Without a `logo` or `logo_src` a home icon is shown.
#[component]
pub fn Header(
    title: String,
    #[props(default, into)] subtitle: Option<String>,
    #[props(default)] navigation: Navigation,
    #[props(default)] logo: Option<Element>,
    #[props(default, into)] logo_src: Option<String>,
    #[props(default, into)] background_color: Option<String>,
    #[props(default, into)] text_color: Option<String>,
    #[props(default)] align: Option<&'static str>,
    #[props(default)] font_size: Option<&'static str>,
    #[props(default)] height: Option<&'static str>,
    #[props(default)] padding: Option<&'static str>,
    #[props(default)] sticky: bool,
    #[props(default, into)] class: Option<String>,
    /// Called with the new state after every open/close
    #[props(default)]
    on_disclosure_change: Option<EventHandler<DisclosureState>>,
    children: Element,
) -> Element {
    let nav_for_panels = navigation.clone();
    let mut panels = use_disclosure(move || {
        let controller = DisclosureController::for_navigation(&nav_for_panels);
        match on_disclosure_change {
            Some(handler) => controller.on_change(move |state| handler.call(state.clone())),
            None => controller,
        }
    });

    let config = StyleConfig::new()
        .set_opt("height", height)
        .set_opt("padding", padding)
        .set_opt("align", align)
        .set_opt("fontSize", font_size)
        .flag("sticky", sticky)
        .set_opt("backgroundColor", background_color)
        .set_opt("textColor", text_color.clone())
        .set_opt("class", class);
    let set = resolve(&config, header());
    let header_style = style_attr(&set);

    let title_class =
        resolve(&StyleConfig::new().set_opt("align", align), header_title()).class_string();

    let menu_open = panels.is_open(PanelId::MobileMenu);
    let menu_toggle = resolve(&StyleConfig::new().flag("open", menu_open), mobile_toggle());
    let hamburger_class = open_class(hamburger(), menu_open);
    let mobile_nav_class = open_class(mobile_nav(), menu_open);
    let logo_color = text_color.unwrap_or_else(|| "#ffffff".to_string());

    rsx! {
        header {
            id: panels.root_id(),
            class: set.class_string(),
            style: header_style,
            div { class: "header-container",
                div { class: "header-content",
                    div { class: "header-logo",
                        if let Some(logo) = logo {
                            {logo}
                        } else if let Some(src) = logo_src {
                            img { src: "{src}", alt: "Logo" }
                        } else {
                            span { style: "color: {logo_color};",
                                HomeIcon { class: "w-10 h-10" }
                            }
                        }
                    }

                    div { class: "{title_class}",
                        h1 { class: "header-title", "{title}" }
                        if let Some(subtitle) = subtitle {
                            p { class: "header-subtitle", "{subtitle}" }
                        }
                    }

                    ChromelessButton {
                        class: Some(menu_toggle.class_string()),
                        aria_label: Some("Toggle menu".to_string()),
                        aria_expanded: attr(&menu_toggle, "aria-expanded"),
                        onclick: move |_| panels.toggle(PanelId::MobileMenu),
                        span { class: "{hamburger_class}",
                            span {}
                            span {}
                            span {}
                        }
                    }

                    nav { class: "header-nav-desktop",
                        for (index, item) in navigation.menu_items().iter().enumerate() {
                            a {
                                key: "{index}",
                                class: "header-nav-item",
                                href: item.link.clone(),
                                "{item.label}"
                            }
                        }
                        for group in navigation.dropdown_items().iter() {
                            HeaderDropdown {
                                key: "{group.label}",
                                group: group.clone(),
                                panels,
                                mobile: false,
                            }
                        }
                        {children.clone()}
                    }
                }

                nav { class: "{mobile_nav_class}",
                    for (index, item) in navigation.menu_items().iter().enumerate() {
                        a {
                            key: "{index}",
                            class: "header-nav-item-mobile",
                            href: item.link.clone(),
                            "{item.label}"
                        }
                    }
                    for group in navigation.dropdown_items().iter() {
                        HeaderDropdown {
                            key: "{group.label}",
                            group: group.clone(),
                            panels,
                            mobile: true,
                        }
                    }
                    {children}
                }
            }
        }
    }
}

/// One dropdown group, rendered in the desktop or the mobile nav
#[component]
fn HeaderDropdown(group: DropdownGroup, panels: Disclosure, mobile: bool) -> Element {
    let mut panels = panels;
    let is_open = panels.is_open(group.label.as_str());
    let arrow_class = open_class(dropdown_arrow(), is_open);
    let toggle = resolve(
        &StyleConfig::new().flag("mobile", mobile).flag("open", is_open),
        group_toggle(),
    );
    let suffix = if mobile { "-mobile" } else { "" };
    let label = group.label.clone();

    rsx! {
        div { class: "header-dropdown{suffix}",
            ChromelessButton {
                class: Some(toggle.class_string()),
                aria_expanded: attr(&toggle, "aria-expanded"),
                aria_haspopup: Some("true"),
                onclick: {
                    let label = label.clone();
                    move |_| panels.toggle(label.as_str())
                },
                "{group.label}"
                span { class: "{arrow_class}" }
            }
            if is_open {
                div { class: "header-dropdown-content{suffix}",
                    for (index, item) in group.items.iter().enumerate() {
                        a {
                            key: "{index}",
                            class: "header-dropdown-item{suffix}",
                            href: "{item.link}",
                            onclick: {
                                let label = label.clone();
                                move |_| panels.request_close(label.as_str())
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
