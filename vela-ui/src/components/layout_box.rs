//! Box: bordered container taking raw utility classes

use dioxus::prelude::*;
use vela_common::schemas::layout_box::layout_box;
use vela_common::{resolve, StyleConfig};

use crate::components::utils::attr;

/// General-purpose container. Free-string options (`padding`, `width`,
/// `fill_color`, ...) take utility classes such as `p-2` or `w-1/2`.
#[component]
pub fn LayoutBox(
    #[props(default)] center: bool,
    #[props(default)] flex_direction: Option<&'static str>,
    #[props(default, into)] display: Option<String>,
    #[props(default, into)] overflow: Option<String>,
    #[props(default, into)] z_index: Option<String>,
    #[props(default, into)] border_width: Option<String>,
    #[props(default, into)] border_color: Option<String>,
    #[props(default, into)] fill_color: Option<String>,
    #[props(default, into)] text_color: Option<String>,
    #[props(default, into)] margin: Option<String>,
    #[props(default, into)] padding: Option<String>,
    #[props(default)] rounded: Option<&'static str>,
    #[props(default)] shadow: Option<&'static str>,
    #[props(default, into)] height: Option<String>,
    #[props(default, into)] width: Option<String>,
    #[props(default, into)] role: Option<String>,
    #[props(default, into)] aria_label: Option<String>,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let config = StyleConfig::new()
        .flag("center", center)
        .set_opt("flexDirection", flex_direction)
        .set_opt("display", display)
        .set_opt("overflow", overflow)
        .set_opt("zIndex", z_index)
        .set_opt("borderWidth", border_width)
        .set_opt("borderColor", border_color)
        .set_opt("fillColor", fill_color)
        .set_opt("textColor", text_color)
        .set_opt("margin", margin)
        .set_opt("padding", padding)
        .set_opt("rounded", rounded)
        .set_opt("shadow", shadow)
        .set_opt("height", height)
        .set_opt("width", width)
        .set_opt("role", role)
        .set_opt("ariaLabel", aria_label)
        .set_opt("class", class);
    let set = resolve(&config, layout_box());

    rsx! {
        div {
            class: set.class_string(),
            role: attr(&set, "role"),
            aria_label: attr(&set, "aria-label"),
            {children}
        }
    }
}
