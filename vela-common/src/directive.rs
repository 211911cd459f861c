//! Resolved presentation output

use std::collections::BTreeMap;

/// Class tokens, inline styles and extra attributes to apply to one element.
///
/// Class order is stable and free of duplicates. Styles and attributes are
/// kept sorted so rendering them is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    classes: Vec<String>,
    styles: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a computed class token. Empty and already-present tokens are ignored.
    pub fn push_class(&mut self, token: &str) {
        if token.is_empty() || self.has_class(token) {
            return;
        }
        self.classes.push(token.to_string());
    }

    /// Append a caller-supplied token, moving an earlier copy to the end.
    pub fn push_custom_class(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        self.classes.retain(|c| c != token);
        self.classes.push(token.to_string());
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.styles.insert(property.to_string(), value.to_string());
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(String::as_str)
    }

    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.styles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value for an HTML `class` attribute
    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }

    /// Value for an HTML `style` attribute, e.g. `color: red; margin: 0`
    pub fn style_string(&self) -> String {
        self.styles
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_class_dedupes() {
        let mut set = DirectiveSet::new();
        set.push_class("border");
        set.push_class("border-2");
        set.push_class("border");
        assert_eq!(set.classes(), ["border", "border-2"]);
    }

    #[test]
    fn test_push_class_ignores_empty() {
        let mut set = DirectiveSet::new();
        set.push_class("");
        assert!(set.classes().is_empty());
    }

    #[test]
    fn test_custom_class_moves_to_end() {
        let mut set = DirectiveSet::new();
        set.push_class("rounded-md");
        set.push_class("text-sm");
        set.push_custom_class("rounded-md");
        assert_eq!(set.classes(), ["text-sm", "rounded-md"]);
    }

    #[test]
    fn test_style_string_sorted() {
        let mut set = DirectiveSet::new();
        set.set_style("margin", "0");
        set.set_style("color", "red");
        assert_eq!(set.style_string(), "color: red; margin: 0");
    }

    #[test]
    fn test_class_string() {
        let mut set = DirectiveSet::new();
        set.push_class("a");
        set.push_class("b");
        assert_eq!(set.class_string(), "a b");
        assert_eq!(DirectiveSet::new().class_string(), "");
    }
}
