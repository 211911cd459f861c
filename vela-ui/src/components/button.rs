//! Button with variant, size and shape tokens, inside an alignment wrapper

use dioxus::prelude::*;
use vela_common::schemas::button::{button, button_container};
use vela_common::{resolve, StyleConfig};

/// Chromeless button - accessibility and disabled handling without styling.
/// Used by [`Button`] and for elements that need their own look.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<String>,
    #[props(default)] aria_haspopup: Option<&'static str>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.as_deref(),
            aria_haspopup,
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if is_disabled {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Button wrapped in a `button-container` that handles alignment.
///
/// `variant` is one of primary, secondary, danger, outline, ghost; `size`
/// one of sm, md, lg, xl; `shape` one of square, rounded, pill.
#[component]
pub fn Button(
    #[props(default)] variant: Option<&'static str>,
    #[props(default)] size: Option<&'static str>,
    #[props(default)] shape: Option<&'static str>,
    #[props(default)] align: Option<&'static str>,
    #[props(default)] full_width: bool,
    #[props(default)] is_loading: bool,
    #[props(default = true)] animated: bool,
    #[props(default)] disabled: bool,
    #[props(default, into)] class: Option<String>,
    #[props(default, into)] id: Option<String>,
    #[props(default)] left_icon: Option<Element>,
    #[props(default)] right_icon: Option<Element>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let config = StyleConfig::new()
        .set_opt("variant", variant)
        .set_opt("size", size)
        .set_opt("shape", shape)
        .flag("fullWidth", full_width)
        .flag("isLoading", is_loading)
        .flag("animated", animated)
        .flag("disabled", disabled)
        .set_opt("class", class);
    let button_class = resolve(&config, button()).class_string();

    let container = StyleConfig::new()
        .set_opt("align", align)
        .flag("fullWidth", full_width);
    let container_class = resolve(&container, button_container()).class_string();

    rsx! {
        div { class: "{container_class}",
            ChromelessButton {
                id,
                disabled,
                loading: is_loading,
                class: Some(button_class),
                onclick,
                if is_loading {
                    span { class: "button-spinner", aria_hidden: "true" }
                }
                if let Some(icon) = left_icon {
                    span { class: "button-icon button-icon-left", {icon} }
                }
                span { class: "button-content", {children} }
                if let Some(icon) = right_icon {
                    span { class: "button-icon button-icon-right", {icon} }
                }
            }
        }
    }
}
