//! Schema tables for each component kind
//!
//! Every table is built once and shared. Components with more than one
//! styled element (a button and its wrapper, a header and its menu parts)
//! have one table per element.

pub mod badge;
pub mod button;
pub mod dropdown;
pub mod flex_layout;
pub mod header;
pub mod layout_box;
pub mod typography;

use crate::schema::OptionSchema;

/// Every built-in schema
pub fn all() -> Vec<&'static OptionSchema> {
    vec![
        badge::badge(),
        badge::badge_icon(),
        button::button(),
        button::button_container(),
        dropdown::dropdown_toggle(),
        dropdown::dropdown_menu(),
        dropdown::dropdown_item(),
        flex_layout::flex_layout(),
        header::header(),
        header::header_title(),
        header::mobile_toggle(),
        header::group_toggle(),
        header::hamburger(),
        header::mobile_nav(),
        header::dropdown_arrow(),
        layout_box::layout_box(),
        typography::typography(),
    ]
}
