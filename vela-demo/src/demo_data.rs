//! Fixture data for the demo pages

use tracing::warn;
use vela_common::{DropdownLink, Navigation};

/// Header navigation in the same shape a host page would send it
pub const NAVIGATION_JSON: &str = r#"{
    "menuItems": [
        {"label": "Home", "link": "/"},
        {"label": "Pricing", "link": "/pricing"},
        {"label": "Blog"}
    ],
    "dropdownItems": [
        {"label": "Products", "items": [
            {"label": "Analytics", "link": "/products/analytics"},
            {"label": "Billing", "link": "/products/billing"}
        ]},
        {"label": "Resources", "items": [
            {"label": "Docs", "link": "/docs"},
            {"label": "Guides", "link": "/guides"}
        ]},
        {"label": "Company", "items": [
            {"label": "About", "link": "/about"},
            {"label": "Careers", "link": "/careers"}
        ]}
    ]
}"#;

/// Parsed navigation; empty (with a warning) if the fixture is invalid
pub fn navigation() -> Navigation {
    Navigation::from_json(NAVIGATION_JSON).unwrap_or_else(|e| {
        warn!("Demo navigation rejected: {e}");
        Navigation::default()
    })
}

pub fn language_links() -> Vec<DropdownLink> {
    vec![
        DropdownLink::new("English", "#en"),
        DropdownLink::new("Deutsch", "#de"),
        DropdownLink::new("Français", "#fr"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_navigation_is_valid() {
        let nav = Navigation::from_json(NAVIGATION_JSON).unwrap();
        assert_eq!(nav.menu_items().len(), 3);
        assert_eq!(nav.dropdown_items().len(), 3);
    }
}
