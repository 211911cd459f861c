//! Caller-supplied style intent for one component instance

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved key carrying the caller's raw class string.
pub const CLASS_KEY: &str = "class";

/// Value of a single configuration option
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Flag(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Partial mapping from option name to value.
///
/// Supplied fresh on every render. Keys the component's schema does not
/// recognize are carried through to the output untouched.
///
/// ```
/// use vela_common::StyleConfig;
///
/// let config = StyleConfig::new()
///     .set("color", "green")
///     .set("variant", "outline")
///     .flag("isPill", true)
///     .class("shadow-sm");
/// assert_eq!(config.custom_class(), Some("shadow-sm"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    values: BTreeMap<String, OptionValue>,
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text (token or free string) option
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(key.to_string(), OptionValue::Text(value.into()));
        self
    }

    /// Set a text option only when a value is given
    pub fn set_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Set a boolean option
    pub fn flag(mut self, key: &str, value: bool) -> Self {
        self.values.insert(key.to_string(), OptionValue::Flag(value));
        self
    }

    /// Set the caller's custom class string, appended after all computed tokens
    pub fn class(self, class: impl Into<String>) -> Self {
        self.set(CLASS_KEY, class)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The custom class string, if one was supplied as text
    pub fn custom_class(&self) -> Option<&str> {
        match self.values.get(CLASS_KEY) {
            Some(OptionValue::Text(class)) => Some(class.as_str()),
            _ => None,
        }
    }

    /// Iterate options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
