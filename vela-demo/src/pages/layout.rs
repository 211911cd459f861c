//! Demo layout with page navigation

use crate::Route;
use dioxus::prelude::*;
use vela_ui::FlexLayout;

#[component]
pub fn DemoLayout() -> Element {
    rsx! {
        nav { class: "flex gap-4 px-6 py-3 border-b border-gray-200 bg-white",
            Link { to: Route::Gallery {}, class: "text-gray-700 hover:text-black", "Components" }
            Link { to: Route::HeaderPage {}, class: "text-gray-700 hover:text-black", "Header" }
            Link { to: Route::DropdownPage {}, class: "text-gray-700 hover:text-black", "Dropdown" }
        }
        FlexLayout { class: "p-6",
            Outlet::<Route> {}
        }
    }
}
