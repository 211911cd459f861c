//! Small inline label with optional icon

use dioxus::prelude::*;
use vela_common::schemas::badge::{badge, badge_icon};
use vela_common::{resolve, StyleConfig};

use crate::components::utils::attr;

/// Badge (pure, props-based).
///
/// An explicit `rounded` wins over `is_pill`, except `rounded: "none"`
/// which leaves the pill shape in place.
#[component]
pub fn Badge(
    #[props(default)] color: Option<&'static str>,
    #[props(default)] variant: Option<&'static str>,
    #[props(default)] text_color: Option<&'static str>,
    #[props(default)] size: Option<&'static str>,
    #[props(default)] rounded: Option<&'static str>,
    #[props(default)] is_pill: bool,
    #[props(default, into)] tooltip: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] icon_size: Option<&'static str>,
    #[props(default)] position_icon: Option<&'static str>,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let config = StyleConfig::new()
        .set_opt("color", color)
        .set_opt("variant", variant)
        .set_opt("textColor", text_color)
        .set_opt("size", size)
        .set_opt("rounded", rounded)
        .flag("isPill", is_pill)
        .set_opt("tooltip", tooltip)
        .set_opt("class", class);
    let set = resolve(&config, badge());

    let icon_config = StyleConfig::new()
        .set_opt("iconSize", icon_size)
        .set_opt("positionIcon", position_icon);
    let icon_class = resolve(&icon_config, badge_icon()).class_string();
    let icon_right = badge_icon().effective_str(&icon_config, "positionIcon") == Some("right");

    rsx! {
        span {
            class: set.class_string(),
            title: attr(&set, "title"),
            if !icon_right {
                if let Some(icon) = icon.clone() {
                    span { class: "{icon_class}", {icon} }
                }
            }
            {children}
            if icon_right {
                if let Some(icon) = icon {
                    span { class: "{icon_class}", {icon} }
                }
            }
        }
    }
}
