//! Standalone dropdowns

use dioxus::prelude::*;
use vela_ui::{Dropdown, FlexLayout, Typography};

use crate::demo_data;

#[component]
pub fn DropdownPage() -> Element {
    let mut picked = use_signal(|| None::<String>);

    rsx! {
        FlexLayout { direction: "row", spacing: "gap-8",
            Dropdown {
                label: "Language".to_string(),
                items: demo_data::language_links(),
                on_select: move |link| picked.set(Some(link)),
            }
            Dropdown {
                label: "Region".to_string(),
                items: demo_data::language_links(),
            }
        }
        if let Some(link) = picked() {
            Typography { variant: "small", "Picked {link}" }
        }
    }
}
