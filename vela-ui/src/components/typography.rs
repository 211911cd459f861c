//! Text element whose tag follows its variant

use dioxus::prelude::*;
use vela_common::schemas::typography::typography;
use vela_common::{resolve, StyleConfig};

use crate::components::utils::style_attr;

/// Typography (pure, props-based).
///
/// `variant` picks both the element (h1-h6, p, span, small) and its class;
/// an unrecognized variant renders as `p`.
#[component]
pub fn Typography(
    #[props(default)] variant: Option<&'static str>,
    #[props(default)] text_align: Option<&'static str>,
    #[props(default)] font_weight: Option<&'static str>,
    #[props(default, into)] font_size: Option<String>,
    #[props(default, into)] line_height: Option<String>,
    #[props(default, into)] letter_spacing: Option<String>,
    #[props(default, into)] color: Option<String>,
    #[props(default, into)] margin: Option<String>,
    #[props(default, into)] padding: Option<String>,
    #[props(default, into)] class: Option<String>,
    children: Element,
) -> Element {
    let config = StyleConfig::new()
        .set_opt("variant", variant)
        .set_opt("textAlign", text_align)
        .set_opt("fontWeight", font_weight)
        .set_opt("fontSize", font_size)
        .set_opt("lineHeight", line_height)
        .set_opt("letterSpacing", letter_spacing)
        .set_opt("color", color)
        .set_opt("margin", margin)
        .set_opt("padding", padding)
        .set_opt("class", class);
    let schema = typography();
    let set = resolve(&config, schema);
    let class = set.class_string();
    let style = style_attr(&set);

    match schema.effective_str(&config, "variant") {
        Some("h1") => rsx! { h1 { class, style, {children} } },
        Some("h2") => rsx! { h2 { class, style, {children} } },
        Some("h3") => rsx! { h3 { class, style, {children} } },
        Some("h4") => rsx! { h4 { class, style, {children} } },
        Some("h5") => rsx! { h5 { class, style, {children} } },
        Some("h6") => rsx! { h6 { class, style, {children} } },
        Some("span") => rsx! { span { class, style, {children} } },
        Some("small") => rsx! { small { class, style, {children} } },
        _ => rsx! { p { class, style, {children} } },
    }
}
