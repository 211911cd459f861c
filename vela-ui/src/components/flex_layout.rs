//! Flex container

use dioxus::prelude::*;
use vela_common::schemas::flex_layout::flex_layout;
use vela_common::{resolve, StyleConfig};

#[component]
pub fn FlexLayout(
    #[props(default)] direction: Option<&'static str>,
    #[props(default)] justify: Option<&'static str>,
    #[props(default)] align: Option<&'static str>,
    /// Spacing utility classes, `space-y-4` by default
    #[props(default, into)]
    spacing: Option<String>,
    #[props(default)] wrap: bool,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let config = StyleConfig::new()
        .set_opt("direction", direction)
        .set_opt("justify", justify)
        .set_opt("align", align)
        .set_opt("spacing", spacing)
        .flag("wrap", wrap)
        .set_opt("class", class);
    let class = resolve(&config, flex_layout()).class_string();

    rsx! {
        div { class: "{class}", {children} }
    }
}
