//! vela demo - web showcase for the vela components
//!
//! Renders every component with a spread of options, plus a header and a
//! standalone dropdown to exercise outside-click dismissal.

mod demo_data;
mod pages;

use dioxus::prelude::*;
use pages::{DemoLayout, DropdownPage, Gallery, HeaderPage};

pub const VELA_CSS: Asset = asset!("/assets/vela.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DemoLayout)]
    #[route("/")]
    Gallery {},
    #[route("/header")]
    HeaderPage {},
    #[route("/dropdown")]
    DropdownPage {},
}

/// Main demo app component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Script { src: TAILWIND_CDN }
        document::Link { rel: "stylesheet", href: VELA_CSS }
        div { class: "min-h-screen bg-gray-50", Router::<Route> {} }
    }
}

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::DEBUG) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}
