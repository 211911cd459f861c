//! Header with navigation, dropdowns and mobile menu

use dioxus::prelude::*;
use vela_common::DisclosureState;
use vela_ui::{Header, Typography};

use crate::demo_data;

#[component]
pub fn HeaderPage() -> Element {
    let navigation = use_hook(demo_data::navigation);
    let mut open_panels = use_signal(Vec::<String>::new);

    let on_change = move |state: DisclosureState| {
        open_panels.set(state.open_panels().map(|id| id.to_string()).collect());
    };

    let status = if open_panels.read().is_empty() {
        "Nothing open".to_string()
    } else {
        format!("Open: {}", open_panels.read().join(", "))
    };

    rsx! {
        Header {
            title: "Vela".to_string(),
            subtitle: "Component library".to_string(),
            navigation,
            background_color: "#1f2937".to_string(),
            text_color: "#ffffff".to_string(),
            align: "left",
            sticky: true,
            on_disclosure_change: on_change,
        }
        Typography { variant: "p", margin: "1rem 0", "{status}" }
    }
}
