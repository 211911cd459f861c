//! Every styled component with a spread of options

use dioxus::prelude::*;
use vela_ui::{Badge, Button, FlexLayout, HomeIcon, LayoutBox, Typography};

#[component]
pub fn Gallery() -> Element {
    let mut clicks = use_signal(|| 0u32);

    rsx! {
        Typography { variant: "h1", font_weight: "bold", font_size: "2rem", "Components" }

        LayoutBox { aria_label: "Badges", rounded: "md", shadow: "sm", fill_color: "bg-white",
            Typography { variant: "h2", font_weight: "semibold", "Badges" }
            FlexLayout { direction: "row", spacing: "gap-2", wrap: true, align: "center",
                Badge { "Default" }
                Badge { color: "green", "Solid green" }
                Badge { color: "green", variant: "outline", text_color: "black", "Outline green" }
                Badge { color: "purple", is_pill: true, size: "sm", "Pill" }
                Badge { color: "blue", variant: "outline", size: "lg", is_pill: true, rounded: "none",
                    "Outline pill"
                }
                Badge { color: "red", rounded: "lg", is_pill: true, "Rounded wins" }
                Badge { color: "orange", tooltip: "Shown on hover".to_string(), "With tooltip" }
                Badge {
                    color: "gray",
                    icon: rsx! { HomeIcon { class: "w-3 h-3" } },
                    icon_size: "sm",
                    "Icon left"
                }
                Badge {
                    color: "pink",
                    icon: rsx! { HomeIcon { class: "w-3 h-3" } },
                    position_icon: "right",
                    "Icon right"
                }
                Badge { color: "teal", "Unknown color falls back" }
            }
        }

        LayoutBox { aria_label: "Buttons", rounded: "md", shadow: "sm", fill_color: "bg-white",
            Typography { variant: "h2", font_weight: "semibold", "Buttons" }
            FlexLayout { direction: "row", spacing: "gap-2", wrap: true,
                for variant in ["primary", "secondary", "danger", "outline", "ghost"] {
                    Button {
                        key: "{variant}",
                        variant,
                        onclick: move |_| clicks += 1,
                        "{variant}"
                    }
                }
            }
            FlexLayout { direction: "row", spacing: "gap-2", wrap: true, align: "center",
                Button { size: "sm", shape: "square", "Small square" }
                Button { size: "lg", shape: "pill", "Large pill" }
                Button { size: "xl", animated: false, "Not animated" }
                Button { is_loading: true, "Loading" }
                Button { disabled: true, "Disabled" }
            }
            Button { full_width: true, align: "left", variant: "secondary", "Full width" }
            Typography { variant: "small", color: "#6b7280", "Clicked {clicks} times" }
        }

        LayoutBox { aria_label: "Typography", rounded: "md", shadow: "sm", fill_color: "bg-white",
            for variant in ["h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "small"] {
                Typography { key: "{variant}", variant, "Typography {variant}" }
            }
            Typography { text_align: "center", letter_spacing: "0.1em", color: "#4f46e5",
                "Centered and spaced"
            }
        }

        LayoutBox { aria_label: "Boxes", rounded: "md", shadow: "sm", fill_color: "bg-white",
            FlexLayout { direction: "row", spacing: "gap-4",
                LayoutBox { center: true, height: "h-24", width: "w-1/3", border_color: "gray-300",
                    "Centered"
                }
                LayoutBox { border_width: "border-4", border_color: "indigo-500", rounded: "lg",
                    width: "w-1/3", "Thick border"
                }
                LayoutBox { shadow: "lg", padding: "p-8", width: "w-1/3", role: "note", "Shadowed" }
            }
        }
    }
}
