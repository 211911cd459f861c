//! vela-common - presentation logic shared by the vela components
//!
//! Pure, renderer-independent pieces:
//! - [`StyleConfig`] + [`OptionSchema`] → [`DirectiveSet`] via [`resolve`]
//! - one schema table per component kind in [`schemas`]
//! - [`DisclosureController`] for menus and dropdowns
//! - validated [`Navigation`] data for headers

pub mod config;
pub mod directive;
pub mod disclosure;
pub mod nav;
pub mod resolve;
pub mod schema;
pub mod schemas;

pub use config::{OptionValue, StyleConfig, CLASS_KEY};
pub use directive::DirectiveSet;
pub use disclosure::{
    Bounds, DisclosureController, DisclosureState, PanelId, PanelState, Point, PressTarget,
};
pub use nav::{DropdownGroup, DropdownLink, NavEntry, NavError, NavItem, Navigation};
pub use resolve::{resolve, resolve_reporting, Diagnostic, Resolution};
pub use schema::{
    EffectiveValue, Guard, OptionDef, OptionKind, OptionSchema, OptionSchemaBuilder, SchemaError,
    Template,
};
