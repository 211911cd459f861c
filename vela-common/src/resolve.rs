//! Style resolution: `(StyleConfig, OptionSchema) -> DirectiveSet`
//!
//! Resolution never fails. Misuse (a token outside an option's set, a flag
//! where text was expected) falls back to the option's default and is
//! reported as a [`Diagnostic`], both in the returned [`Resolution`] and as
//! a `tracing` warning so it surfaces without breaking the render.

use thiserror::Error;
use tracing::warn;

use crate::config::{OptionValue, StyleConfig, CLASS_KEY};
use crate::directive::DirectiveSet;
use crate::schema::OptionSchema;

/// Recoverable misuse found while resolving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("{component}: unrecognized {option} '{value}', using '{fallback}'")]
    UnrecognizedToken {
        component: &'static str,
        option: &'static str,
        value: String,
        fallback: &'static str,
    },
    #[error("{component}: {option} '{value}' is not a single class token, using default")]
    NotAClassToken {
        component: &'static str,
        option: &'static str,
        value: String,
    },
    #[error("{component}: option {option} expects a {expected} value, using default")]
    WrongShape {
        component: &'static str,
        option: &'static str,
        expected: &'static str,
    },
}

/// Directives plus everything that went wrong producing them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub directives: DirectiveSet,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve a config against a schema.
///
/// Output order: schema base tokens, option templates in schema order,
/// then the caller's custom class string.
pub fn resolve(config: &StyleConfig, schema: &OptionSchema) -> DirectiveSet {
    resolve_reporting(config, schema).directives
}

/// Like [`resolve`], also returning the diagnostics raised.
pub fn resolve_reporting(config: &StyleConfig, schema: &OptionSchema) -> Resolution {
    let mut directives = DirectiveSet::new();
    let mut diagnostics = Vec::new();

    for token in schema.base() {
        directives.push_class(token);
    }

    let lookup = schema.lookup(config, &mut diagnostics);

    for option in schema.options() {
        if !option.guard.holds(&lookup) {
            continue;
        }
        let Some(value) = lookup.get(option.key) else {
            continue;
        };
        for template in &option.templates {
            template.expand(value, &lookup, &mut directives);
        }
    }

    // Unrecognized keys ride along as attributes
    for (key, value) in config.iter() {
        if key == CLASS_KEY || schema.recognizes(key) {
            continue;
        }
        match value {
            OptionValue::Text(text) => directives.set_attribute(key, text),
            OptionValue::Flag(true) => directives.set_attribute(key, "true"),
            OptionValue::Flag(false) => {}
        }
    }

    match config.get(CLASS_KEY) {
        Some(OptionValue::Text(class)) => {
            for token in class.split_whitespace() {
                directives.push_custom_class(token);
            }
        }
        Some(OptionValue::Flag(_)) => diagnostics.push(Diagnostic::WrongShape {
            component: schema.name(),
            option: CLASS_KEY,
            expected: "text",
        }),
        None => {}
    }

    for diagnostic in &diagnostics {
        warn!(target: "vela::resolve", "{diagnostic}");
    }

    Resolution {
        directives,
        diagnostics,
    }
}
