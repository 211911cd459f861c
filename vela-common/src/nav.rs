//! Navigation data consumed by the header

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level navigation link
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: Some(link.into()),
        }
    }
}

/// Link inside a dropdown group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownLink {
    pub label: String,
    pub link: String,
}

impl DropdownLink {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Labelled group of links shown as one dropdown.
///
/// The label doubles as the group's disclosure panel identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownGroup {
    pub label: String,
    #[serde(default)]
    pub items: Vec<DropdownLink>,
}

impl DropdownGroup {
    pub fn new(label: impl Into<String>, items: Vec<DropdownLink>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }
}

/// Which kind of entry a validation error points at
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEntry {
    MenuItem,
    DropdownGroup,
    DropdownItem { group: String },
}

impl fmt::Display for NavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEntry::MenuItem => write!(f, "menu item"),
            NavEntry::DropdownGroup => write!(f, "dropdown group"),
            NavEntry::DropdownItem { group } => write!(f, "item of dropdown '{group}'"),
        }
    }
}

#[derive(Error, Debug)]
pub enum NavError {
    #[error("{entry} at position {index} has an empty label")]
    EmptyLabel { entry: NavEntry, index: usize },
    #[error("item at position {index} of dropdown '{group}' has an empty link")]
    EmptyLink { group: String, index: usize },
    #[error("dropdown label '{0}' is used more than once")]
    DuplicateGroup(String),
    #[error("invalid navigation data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNavigation {
    #[serde(default)]
    menu_items: Vec<NavItem>,
    #[serde(default)]
    dropdown_items: Vec<DropdownGroup>,
}

/// Validated menu items and dropdown groups, in display order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    menu_items: Vec<NavItem>,
    dropdown_items: Vec<DropdownGroup>,
}

impl Navigation {
    /// Accept navigation data, rejecting entries that could not render.
    pub fn new(
        menu_items: Vec<NavItem>,
        dropdown_items: Vec<DropdownGroup>,
    ) -> Result<Self, NavError> {
        for (index, item) in menu_items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(NavError::EmptyLabel {
                    entry: NavEntry::MenuItem,
                    index,
                });
            }
        }

        for (index, group) in dropdown_items.iter().enumerate() {
            if group.label.trim().is_empty() {
                return Err(NavError::EmptyLabel {
                    entry: NavEntry::DropdownGroup,
                    index,
                });
            }
            if dropdown_items[..index].iter().any(|g| g.label == group.label) {
                return Err(NavError::DuplicateGroup(group.label.clone()));
            }
            for (index, item) in group.items.iter().enumerate() {
                if item.label.trim().is_empty() {
                    return Err(NavError::EmptyLabel {
                        entry: NavEntry::DropdownItem {
                            group: group.label.clone(),
                        },
                        index,
                    });
                }
                if item.link.trim().is_empty() {
                    return Err(NavError::EmptyLink {
                        group: group.label.clone(),
                        index,
                    });
                }
            }
        }

        Ok(Self {
            menu_items,
            dropdown_items,
        })
    }

    /// Parse `{"menuItems": [...], "dropdownItems": [...]}` and validate it.
    pub fn from_json(json: &str) -> Result<Self, NavError> {
        let raw: RawNavigation = serde_json::from_str(json)?;
        Self::new(raw.menu_items, raw.dropdown_items)
    }

    pub fn menu_items(&self) -> &[NavItem] {
        &self.menu_items
    }

    pub fn dropdown_items(&self) -> &[DropdownGroup] {
        &self.dropdown_items
    }

    pub fn group(&self, label: &str) -> Option<&DropdownGroup> {
        self.dropdown_items.iter().find(|g| g.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.menu_items.is_empty() && self.dropdown_items.is_empty()
    }
}
