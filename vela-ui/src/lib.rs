//! vela-ui - Dioxus components for the vela library
//!
//! Components take their style options as props, resolve them through
//! `vela-common`'s schemas and render the resulting classes. Menus and
//! dropdowns keep their open state in a `vela_common::DisclosureController`
//! owned by the component.

pub mod components;
pub mod disclosure;
pub mod wasm_utils;

pub use components::*;
pub use disclosure::{use_disclosure, Disclosure};
