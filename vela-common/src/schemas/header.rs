//! Header: title bar with navigation, dropdowns and a mobile menu.
//!
//! The menu parts take an `open` flag fed from the header's
//! [`DisclosureState`](crate::DisclosureState).

use std::sync::LazyLock;

use crate::schema::{OptionSchema, Template};

const ALIGN: &[&str] = &["left", "center", "right"];

static HEADER: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("header")
        .base(&["header"])
        .enum_option("height", "md", &["sm", "md", "lg", "xl"])
        .template(Template::class("header-height-{}"))
        .enum_option("padding", "md", &["sm", "md", "lg"])
        .template(Template::class("header-padding-{}"))
        .enum_option("align", "center", ALIGN)
        .template(Template::class("header-align-{}"))
        .enum_option("fontSize", "xl", &["sm", "md", "lg", "xl", "2xl", "3xl"])
        .template(Template::class("font-size-{}"))
        .flag_option("sticky", false)
        .template(Template::classes(&["header-sticky"]))
        .string_option("backgroundColor", None)
        .template(Template::Style("background-color"))
        .string_option("textColor", None)
        .template(Template::Style("color"))
        .build()
});

static HEADER_TITLE: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("header-title")
        .base(&["header-title-container"])
        .enum_option("align", "center", ALIGN)
        .template(Template::class("header-align-{}"))
        .build()
});

static HAMBURGER: LazyLock<OptionSchema> =
    LazyLock::new(|| open_schema("hamburger", "hamburger-icon", &["open"]));

static MOBILE_NAV: LazyLock<OptionSchema> =
    LazyLock::new(|| open_schema("mobile-nav", "header-nav-mobile", &["show"]));

static DROPDOWN_ARROW: LazyLock<OptionSchema> =
    LazyLock::new(|| open_schema("dropdown-arrow", "dropdown-arrow", &["open"]));

static MOBILE_TOGGLE: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("mobile-toggle")
        .base(&["header-mobile-toggle"])
        .flag_option("open", false)
        .template(Template::Attr("aria-expanded"))
        .build()
});

static GROUP_TOGGLE: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("group-toggle")
        .flag_option("mobile", false)
        .template(Template::FlagClass {
            on: &["header-dropdown-toggle-mobile"],
            off: &["header-dropdown-toggle"],
        })
        .flag_option("open", false)
        .template(Template::Attr("aria-expanded"))
        .build()
});

/// A single element whose only option is the `open` state
fn open_schema(
    name: &'static str,
    base: &'static str,
    open: &'static [&'static str],
) -> OptionSchema {
    OptionSchema::builder(name)
        .base(&[base])
        .flag_option("open", false)
        .template(Template::classes(open))
        .build()
}

pub fn header() -> &'static OptionSchema {
    &HEADER
}

pub fn header_title() -> &'static OptionSchema {
    &HEADER_TITLE
}

/// Mobile menu toggle icon
pub fn hamburger() -> &'static OptionSchema {
    &HAMBURGER
}

/// Button that opens the mobile menu
pub fn mobile_toggle() -> &'static OptionSchema {
    &MOBILE_TOGGLE
}

/// Button that opens one dropdown group, in the desktop or mobile nav
pub fn group_toggle() -> &'static OptionSchema {
    &GROUP_TOGGLE
}

/// Collapsible mobile navigation
pub fn mobile_nav() -> &'static OptionSchema {
    &MOBILE_NAV
}

/// Arrow next to a dropdown group label
pub fn dropdown_arrow() -> &'static OptionSchema {
    &DROPDOWN_ARROW
}
