//! Option schemas: the table that drives resolution for one component kind
//!
//! A schema lists every option a component recognizes, in the order their
//! directives are emitted. Each option carries:
//! - its kind (token set, free string or flag) and default
//! - a guard deciding whether it contributes at all
//! - templates expanding the effective value into directives
//!
//! ```
//! use vela_common::{Guard, OptionSchema, Template};
//!
//! let schema = OptionSchema::builder("chip")
//!     .base(&["chip"])
//!     .enum_option("size", "md", &["sm", "md", "lg"])
//!     .template(Template::class("chip-{}"))
//!     .flag_option("dense", false)
//!     .template(Template::classes(&["chip-dense"]))
//!     .when(Guard::Equals("size", "sm"))
//!     .build();
//! assert!(schema.validate().is_ok());
//! ```

use thiserror::Error;

use crate::config::{OptionValue, StyleConfig, CLASS_KEY};
use crate::directive::DirectiveSet;
use crate::resolve::Diagnostic;

/// Shape and default of an option
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// One of a fixed set of tokens
    Enum {
        tokens: &'static [&'static str],
        default: &'static str,
    },
    /// Free-form string, never validated. `None` means unset by default.
    Text { default: Option<&'static str> },
    /// Boolean flag
    Flag { default: bool },
}

/// The value the resolver uses for an option after defaults and fallback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectiveValue<'a> {
    Token(&'a str),
    Text(Option<&'a str>),
    Flag(bool),
}

impl<'a> EffectiveValue<'a> {
    /// String form of a token or non-empty text
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            EffectiveValue::Token(token) => Some(token),
            EffectiveValue::Text(Some(text)) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Tokens are always present; text when non-empty; flags when set
    pub fn is_present(&self) -> bool {
        match *self {
            EffectiveValue::Token(_) => true,
            EffectiveValue::Text(text) => text.is_some_and(|t| !t.is_empty()),
            EffectiveValue::Flag(set) => set,
        }
    }
}

/// Condition over the effective values of a schema's options
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Option is a set flag, a token, or non-empty text
    Present(&'static str),
    /// Caller supplied a valid value for the option
    Explicit(&'static str),
    /// Option's effective value equals the token
    Equals(&'static str, &'static str),
    /// Option was not supplied, or equals the token
    UnsetOr(&'static str, &'static str),
    Not(Box<Guard>),
    All(Vec<Guard>),
    Any(Vec<Guard>),
}

impl Guard {
    #[allow(clippy::should_implement_trait)]
    pub fn not(guard: Guard) -> Self {
        Guard::Not(Box::new(guard))
    }

    pub(crate) fn holds(&self, lookup: &Lookup<'_>) -> bool {
        match self {
            Guard::Always => true,
            Guard::Present(key) => lookup.get(key).is_some_and(|v| v.is_present()),
            Guard::Explicit(key) => lookup.is_explicit(key),
            Guard::Equals(key, token) => {
                lookup.get(key).and_then(|v| v.as_str()) == Some(*token)
            }
            Guard::UnsetOr(key, token) => {
                !lookup.is_explicit(key) || lookup.get(key).and_then(|v| v.as_str()) == Some(*token)
            }
            Guard::Not(inner) => !inner.holds(lookup),
            Guard::All(guards) => guards.iter().all(|g| g.holds(lookup)),
            Guard::Any(guards) => guards.iter().any(|g| g.holds(lookup)),
        }
    }

    fn references(&self, out: &mut Vec<&'static str>) {
        match self {
            Guard::Always => {}
            Guard::Present(key)
            | Guard::Explicit(key)
            | Guard::Equals(key, _)
            | Guard::UnsetOr(key, _) => out.push(*key),
            Guard::Not(inner) => inner.references(out),
            Guard::All(guards) | Guard::Any(guards) => {
                for guard in guards {
                    guard.references(out);
                }
            }
        }
    }
}

/// How an option's effective value becomes directives
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Template {
    /// `{}` in the pattern is replaced by the value; values in `except` emit nothing
    Class {
        pattern: &'static str,
        except: &'static [&'static str],
    },
    /// Explicit token → class list table
    Map(&'static [(&'static str, &'static [&'static str])]),
    /// Pick templates by another option's effective value
    Switch {
        on: &'static str,
        cases: Vec<(&'static str, Vec<Template>)>,
    },
    /// Inline style property taking the value verbatim
    Style(&'static str),
    /// Element attribute; flags render as `"true"`/`"false"`
    Attr(&'static str),
    /// Value is itself a whitespace-separated class list
    RawClass,
    /// Fixed classes emitted when the value is present
    Classes(&'static [&'static str]),
    /// Flag with classes for both states
    FlagClass {
        on: &'static [&'static str],
        off: &'static [&'static str],
    },
}

impl Template {
    pub fn class(pattern: &'static str) -> Self {
        Template::Class {
            pattern,
            except: &[],
        }
    }

    pub fn class_except(pattern: &'static str, except: &'static [&'static str]) -> Self {
        Template::Class { pattern, except }
    }

    pub fn classes(tokens: &'static [&'static str]) -> Self {
        Template::Classes(tokens)
    }

    pub fn switch(on: &'static str, cases: Vec<(&'static str, Vec<Template>)>) -> Self {
        Template::Switch { on, cases }
    }

    /// Whether the value is pasted into a single class name
    fn forms_class_token(&self) -> bool {
        match self {
            Template::Class { .. } => true,
            Template::Switch { cases, .. } => cases
                .iter()
                .any(|(_, templates)| templates.iter().any(Template::forms_class_token)),
            _ => false,
        }
    }

    pub(crate) fn expand(
        &self,
        value: &EffectiveValue<'_>,
        lookup: &Lookup<'_>,
        out: &mut DirectiveSet,
    ) {
        match self {
            Template::Class { pattern, except } => {
                if let Some(v) = value.as_str() {
                    if !except.contains(&v) {
                        out.push_class(&pattern.replace("{}", v));
                    }
                }
            }
            Template::Map(entries) => {
                if let Some(v) = value.as_str() {
                    if let Some((_, tokens)) = entries.iter().find(|(k, _)| *k == v) {
                        for token in tokens.iter() {
                            out.push_class(token);
                        }
                    }
                }
            }
            Template::Switch { on, cases } => {
                let selector = lookup.get(on).and_then(|v| v.as_str());
                if let Some((_, templates)) = cases.iter().find(|(case, _)| Some(*case) == selector)
                {
                    for template in templates {
                        template.expand(value, lookup, out);
                    }
                }
            }
            Template::Style(property) => {
                if let Some(v) = value.as_str() {
                    out.set_style(property, v);
                }
            }
            Template::Attr(name) => match value {
                EffectiveValue::Flag(set) => {
                    out.set_attribute(name, if *set { "true" } else { "false" })
                }
                _ => {
                    if let Some(v) = value.as_str() {
                        out.set_attribute(name, v);
                    }
                }
            },
            Template::RawClass => {
                if let Some(v) = value.as_str() {
                    for token in v.split_whitespace() {
                        out.push_class(token);
                    }
                }
            }
            Template::Classes(tokens) => {
                if value.is_present() {
                    for token in tokens.iter() {
                        out.push_class(token);
                    }
                }
            }
            Template::FlagClass { on, off } => {
                let tokens = if value.is_present() { on } else { off };
                for token in tokens.iter() {
                    out.push_class(token);
                }
            }
        }
    }
}

/// One recognized option
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDef {
    pub key: &'static str,
    pub kind: OptionKind,
    pub guard: Guard,
    pub templates: Vec<Template>,
}

impl OptionDef {
    /// Effective value for this option, recording misuse in `diagnostics`.
    ///
    /// Returns the value and whether the caller explicitly supplied it.
    fn evaluate<'a>(
        &'a self,
        component: &'static str,
        config: &'a StyleConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> (EffectiveValue<'a>, bool) {
        let supplied = config.get(self.key);
        match (&self.kind, supplied) {
            (OptionKind::Enum { default, .. }, None) => (EffectiveValue::Token(*default), false),
            (OptionKind::Enum { tokens, default }, Some(OptionValue::Text(value))) => {
                if tokens.contains(&value.as_str()) {
                    (EffectiveValue::Token(value), true)
                } else {
                    diagnostics.push(Diagnostic::UnrecognizedToken {
                        component,
                        option: self.key,
                        value: value.clone(),
                        fallback: *default,
                    });
                    (EffectiveValue::Token(*default), false)
                }
            }
            (OptionKind::Enum { default, .. }, Some(OptionValue::Flag(_))) => {
                diagnostics.push(Diagnostic::WrongShape {
                    component,
                    option: self.key,
                    expected: "token",
                });
                (EffectiveValue::Token(*default), false)
            }
            (OptionKind::Text { default }, None) => (EffectiveValue::Text(*default), false),
            (OptionKind::Text { default }, Some(OptionValue::Text(value)))
                if self.templates.iter().any(Template::forms_class_token)
                    && value.contains(char::is_whitespace) =>
            {
                diagnostics.push(Diagnostic::NotAClassToken {
                    component,
                    option: self.key,
                    value: value.clone(),
                });
                (EffectiveValue::Text(*default), false)
            }
            (OptionKind::Text { .. }, Some(OptionValue::Text(value))) => {
                (EffectiveValue::Text(Some(value.as_str())), true)
            }
            (OptionKind::Text { default }, Some(OptionValue::Flag(_))) => {
                diagnostics.push(Diagnostic::WrongShape {
                    component,
                    option: self.key,
                    expected: "text",
                });
                (EffectiveValue::Text(*default), false)
            }
            (OptionKind::Flag { default }, None) => (EffectiveValue::Flag(*default), false),
            (OptionKind::Flag { .. }, Some(OptionValue::Flag(set))) => {
                (EffectiveValue::Flag(*set), true)
            }
            (OptionKind::Flag { default }, Some(OptionValue::Text(_))) => {
                diagnostics.push(Diagnostic::WrongShape {
                    component,
                    option: self.key,
                    expected: "flag",
                });
                (EffectiveValue::Flag(*default), false)
            }
        }
    }
}

/// Effective values of every option in a schema for one config
pub(crate) struct Lookup<'a> {
    entries: Vec<(&'static str, EffectiveValue<'a>, bool)>,
}

impl<'a> Lookup<'a> {
    pub(crate) fn get(&self, key: &str) -> Option<&EffectiveValue<'a>> {
        self.entries
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, v, _)| v)
    }

    pub(crate) fn is_explicit(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, _, explicit)| *k == key && *explicit)
    }
}

/// Error in a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{schema}: option '{option}' is declared more than once or shadows a reserved key")]
    DuplicateOption {
        schema: &'static str,
        option: &'static str,
    },
    #[error("{schema}: default '{default}' of option '{option}' is not one of its tokens")]
    DefaultOutsideTokens {
        schema: &'static str,
        option: &'static str,
        default: &'static str,
    },
    #[error("{schema}: option '{option}' references undeclared option '{reference}'")]
    UnknownReference {
        schema: &'static str,
        option: &'static str,
        reference: &'static str,
    },
    #[error("{schema}: option '{option}' maps token '{token}' that '{on}' never takes")]
    UnknownToken {
        schema: &'static str,
        option: &'static str,
        on: &'static str,
        token: &'static str,
    },
}

/// Fixed table of options recognized by one component kind
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSchema {
    name: &'static str,
    base: Vec<&'static str>,
    options: Vec<OptionDef>,
}

impl OptionSchema {
    pub fn builder(name: &'static str) -> OptionSchemaBuilder {
        OptionSchemaBuilder::new(name)
    }

    /// Component kind name, used in diagnostics
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Structural tokens emitted before any option
    pub fn base(&self) -> &[&'static str] {
        &self.base
    }

    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    pub fn option(&self, key: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.key == key)
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.option(key).is_some()
    }

    /// The value resolution would use for `key`, after defaults and fallback.
    ///
    /// Used by the render layer for decisions that are not class tokens,
    /// such as which element a typography variant renders as.
    pub fn effective<'a>(&'a self, config: &'a StyleConfig, key: &str) -> Option<EffectiveValue<'a>> {
        let mut ignored = Vec::new();
        self.option(key)
            .map(|option| option.evaluate(self.name, config, &mut ignored).0)
    }

    /// Effective token or text for `key`, if any
    pub fn effective_str<'a>(&'a self, config: &'a StyleConfig, key: &str) -> Option<&'a str> {
        self.effective(config, key).and_then(|v| v.as_str())
    }

    pub(crate) fn lookup<'a>(
        &'a self,
        config: &'a StyleConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Lookup<'a> {
        let entries = self
            .options
            .iter()
            .map(|option| {
                let (value, explicit) = option.evaluate(self.name, config, diagnostics);
                (option.key, value, explicit)
            })
            .collect();
        Lookup { entries }
    }

    /// Check the schema is internally consistent.
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (index, option) in self.options.iter().enumerate() {
            if option.key == CLASS_KEY || self.options[..index].iter().any(|o| o.key == option.key)
            {
                return Err(SchemaError::DuplicateOption {
                    schema: self.name,
                    option: option.key,
                });
            }

            if let OptionKind::Enum { tokens, default } = option.kind {
                if !tokens.contains(&default) {
                    return Err(SchemaError::DefaultOutsideTokens {
                        schema: self.name,
                        option: option.key,
                        default,
                    });
                }
            }

            let mut references = Vec::new();
            option.guard.references(&mut references);
            for reference in references {
                self.check_reference(option, reference)?;
            }

            for template in &option.templates {
                self.check_template(option, option.key, template)?;
            }
        }
        Ok(())
    }

    fn check_reference(
        &self,
        option: &OptionDef,
        reference: &'static str,
    ) -> Result<&OptionDef, SchemaError> {
        self.option(reference)
            .ok_or(SchemaError::UnknownReference {
                schema: self.name,
                option: option.key,
                reference,
            })
    }

    fn check_tokens(
        &self,
        option: &OptionDef,
        on: &OptionDef,
        keys: impl Iterator<Item = &'static str>,
    ) -> Result<(), SchemaError> {
        let OptionKind::Enum { tokens, .. } = on.kind else {
            return Ok(());
        };
        for key in keys {
            if !tokens.contains(&key) {
                return Err(SchemaError::UnknownToken {
                    schema: self.name,
                    option: option.key,
                    on: on.key,
                    token: key,
                });
            }
        }
        Ok(())
    }

    /// `value_key` is the option whose value the template expands.
    fn check_template(
        &self,
        option: &OptionDef,
        value_key: &'static str,
        template: &Template,
    ) -> Result<(), SchemaError> {
        match template {
            Template::Map(entries) => {
                let source = self.check_reference(option, value_key)?;
                self.check_tokens(option, source, entries.iter().map(|(k, _)| *k))
            }
            Template::Switch { on, cases } => {
                let selector = self.check_reference(option, on)?;
                self.check_tokens(option, selector, cases.iter().map(|(case, _)| *case))?;
                for (_, templates) in cases {
                    for nested in templates {
                        self.check_template(option, value_key, nested)?;
                    }
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

/// Builder for an [`OptionSchema`].
///
/// Options are emitted in declaration order; `template` and `when` apply
/// to the most recently declared option.
#[derive(Debug)]
pub struct OptionSchemaBuilder {
    name: &'static str,
    base: Vec<&'static str>,
    options: Vec<OptionDef>,
}

impl OptionSchemaBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            base: Vec::new(),
            options: Vec::new(),
        }
    }

    /// Add structural tokens emitted first
    pub fn base(mut self, tokens: &[&'static str]) -> Self {
        self.base.extend_from_slice(tokens);
        self
    }

    /// Add an option restricted to a fixed token set
    pub fn enum_option(
        self,
        key: &'static str,
        default: &'static str,
        tokens: &'static [&'static str],
    ) -> Self {
        self.option(key, OptionKind::Enum { tokens, default })
    }

    /// Add a free-form string option
    pub fn string_option(self, key: &'static str, default: Option<&'static str>) -> Self {
        self.option(key, OptionKind::Text { default })
    }

    /// Add a boolean option
    pub fn flag_option(self, key: &'static str, default: bool) -> Self {
        self.option(key, OptionKind::Flag { default })
    }

    fn option(mut self, key: &'static str, kind: OptionKind) -> Self {
        self.options.push(OptionDef {
            key,
            kind,
            guard: Guard::Always,
            templates: Vec::new(),
        });
        self
    }

    /// Add a template to the last option
    pub fn template(mut self, template: Template) -> Self {
        if let Some(last) = self.options.last_mut() {
            last.templates.push(template);
        }
        self
    }

    /// Guard the last option
    pub fn when(mut self, guard: Guard) -> Self {
        if let Some(last) = self.options.last_mut() {
            last.guard = guard;
        }
        self
    }

    pub fn build(self) -> OptionSchema {
        OptionSchema {
            name: self.name,
            base: self.base,
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionSchema {
        OptionSchema::builder("sample")
            .enum_option("size", "md", &["sm", "md"])
            .template(Template::class("sample-{}"))
            .string_option("tint", None)
            .template(Template::Style("color"))
            .flag_option("loud", true)
            .build()
    }

    #[test]
    fn test_builder_declares_in_order() {
        let schema = sample();
        let keys: Vec<_> = schema.options().iter().map(|o| o.key).collect();
        assert_eq!(keys, vec!["size", "tint", "loud"]);
        assert_eq!(schema.option("size").unwrap().templates.len(), 1);
    }

    #[test]
    fn test_template_without_option_is_ignored() {
        let schema = OptionSchema::builder("empty")
            .template(Template::RawClass)
            .when(Guard::Always)
            .build();
        assert!(schema.options().is_empty());
    }

    #[test]
    fn test_effective_uses_default() {
        let schema = sample();
        let config = StyleConfig::new();
        assert_eq!(
            schema.effective(&config, "size"),
            Some(EffectiveValue::Token("md"))
        );
        assert_eq!(
            schema.effective(&config, "tint"),
            Some(EffectiveValue::Text(None))
        );
        assert_eq!(
            schema.effective(&config, "loud"),
            Some(EffectiveValue::Flag(true))
        );
        assert_eq!(schema.effective(&config, "missing"), None);
    }

    #[test]
    fn test_effective_falls_back_on_unknown_token() {
        let schema = sample();
        let config = StyleConfig::new().set("size", "huge");
        assert_eq!(schema.effective_str(&config, "size"), Some("md"));
    }

    #[test]
    fn test_spaced_text_only_rejected_for_class_templates() {
        let schema = OptionSchema::builder("spaced")
            .string_option("tone", Some("plain"))
            .template(Template::class("tone-{}"))
            .string_option("gap", None)
            .template(Template::Style("gap"))
            .build();
        let config = StyleConfig::new().set("tone", "very loud").set("gap", "1rem 2rem");
        let mut diagnostics = Vec::new();
        let lookup = schema.lookup(&config, &mut diagnostics);
        assert_eq!(lookup.get("tone"), Some(&EffectiveValue::Text(Some("plain"))));
        assert_eq!(lookup.get("gap"), Some(&EffectiveValue::Text(Some("1rem 2rem"))));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::NotAClassToken {
                component: "spaced",
                option: "tone",
                value: "very loud".to_string(),
            }]
        );
    }

    #[test]
    fn test_effective_value_presence() {
        assert!(EffectiveValue::Token("x").is_present());
        assert!(!EffectiveValue::Text(Some("")).is_present());
        assert!(!EffectiveValue::Text(None).is_present());
        assert!(EffectiveValue::Text(Some("a")).is_present());
        assert!(!EffectiveValue::Flag(false).is_present());
        assert_eq!(EffectiveValue::Flag(true).as_str(), None);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_validate_duplicate_option() {
        let schema = OptionSchema::builder("dup")
            .flag_option("a", false)
            .flag_option("a", true)
            .build();
        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicateOption {
                schema: "dup",
                option: "a"
            })
        );
    }

    #[test]
    fn test_validate_reserved_class_key() {
        let schema = OptionSchema::builder("reserved")
            .string_option(CLASS_KEY, None)
            .build();
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn test_validate_default_outside_tokens() {
        let schema = OptionSchema::builder("bad")
            .enum_option("size", "xl", &["sm", "md"])
            .build();
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DefaultOutsideTokens { default: "xl", .. })
        ));
    }

    #[test]
    fn test_validate_dangling_guard() {
        let schema = OptionSchema::builder("bad")
            .flag_option("pill", false)
            .when(Guard::UnsetOr("rounded", "none"))
            .build();
        assert_eq!(
            schema.validate(),
            Err(SchemaError::UnknownReference {
                schema: "bad",
                option: "pill",
                reference: "rounded"
            })
        );
    }

    #[test]
    fn test_validate_switch_case_outside_tokens() {
        let schema = OptionSchema::builder("bad")
            .enum_option("color", "blue", &["blue"])
            .template(Template::switch(
                "variant",
                vec![("ghost", vec![Template::class("bg-{}")])],
            ))
            .enum_option("variant", "solid", &["solid", "outline"])
            .build();
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownToken { token: "ghost", on: "variant", .. })
        ));
    }

    #[test]
    fn test_validate_map_key_outside_tokens() {
        let schema = OptionSchema::builder("bad")
            .enum_option("size", "md", &["sm", "md"])
            .template(Template::Map(&[("xl", &["big"])]))
            .build();
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::UnknownToken { token: "xl", .. })
        ));
    }

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::UnknownReference {
            schema: "badge",
            option: "isPill",
            reference: "rounded",
        };
        let msg = err.to_string();
        assert!(msg.contains("badge"));
        assert!(msg.contains("isPill"));
        assert!(msg.contains("rounded"));
    }
}
