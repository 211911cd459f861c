//! Standalone dropdown: a toggle button and the menu it reveals

use std::sync::LazyLock;

use crate::schema::{OptionSchema, Template};

static DROPDOWN_TOGGLE: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("dropdown-toggle")
        .base(&[
            "dropdown-toggle",
            "text-lg",
            "font-medium",
            "text-gray-800",
            "hover:text-gray-600",
            "flex",
            "items-center",
        ])
        .flag_option("open", false)
        .template(Template::Attr("aria-expanded"))
        .build()
});

static DROPDOWN_MENU: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("dropdown-menu")
        .base(&[
            "dropdown-menu",
            "absolute",
            "bg-white",
            "border",
            "shadow-lg",
            "mt-2",
            "rounded-md",
        ])
        .build()
});

static DROPDOWN_ITEM: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("dropdown-item")
        .base(&[
            "dropdown-item",
            "block",
            "py-2",
            "px-4",
            "text-gray-800",
            "hover:bg-gray-100",
        ])
        .build()
});

pub fn dropdown_toggle() -> &'static OptionSchema {
    &DROPDOWN_TOGGLE
}

pub fn dropdown_menu() -> &'static OptionSchema {
    &DROPDOWN_MENU
}

pub fn dropdown_item() -> &'static OptionSchema {
    &DROPDOWN_ITEM
}
