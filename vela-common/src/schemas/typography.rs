//! Typography: text element whose tag follows its variant

use std::sync::LazyLock;

use crate::schema::{OptionSchema, Template};

pub const VARIANTS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "small"];

static TYPOGRAPHY: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("typography")
        .base(&["typography"])
        .enum_option("variant", "p", VARIANTS)
        .template(Template::class("{}"))
        .enum_option("textAlign", "left", &["left", "center", "right", "justify"])
        .template(Template::class("text-{}"))
        .enum_option("fontWeight", "normal", &["light", "normal", "semibold", "bold"])
        .template(Template::class("{}"))
        .string_option("fontSize", Some("1rem"))
        .template(Template::Style("font-size"))
        .string_option("lineHeight", Some("1.5"))
        .template(Template::Style("line-height"))
        .string_option("letterSpacing", Some("normal"))
        .template(Template::Style("letter-spacing"))
        .string_option("color", Some("black"))
        .template(Template::Style("color"))
        .string_option("margin", None)
        .template(Template::Style("margin"))
        .string_option("padding", None)
        .template(Template::Style("padding"))
        .build()
});

pub fn typography() -> &'static OptionSchema {
    &TYPOGRAPHY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleConfig};

    #[test]
    fn test_defaults() {
        let set = resolve(&StyleConfig::new(), typography());
        assert_eq!(set.class_string(), "typography p text-left normal");
        assert_eq!(
            set.style_string(),
            "color: black; font-size: 1rem; letter-spacing: normal; line-height: 1.5"
        );
    }

    #[test]
    fn test_styles_are_raw() {
        let config = StyleConfig::new()
            .set("variant", "h2")
            .set("fontSize", "clamp(1rem, 2vw, 3rem)")
            .set("margin", "0 auto");
        let set = resolve(&config, typography());
        assert!(set.has_class("h2"));
        assert_eq!(set.style("font-size"), Some("clamp(1rem, 2vw, 3rem)"));
        assert_eq!(set.style("margin"), Some("0 auto"));
    }

    #[test]
    fn test_unknown_variant_renders_paragraph() {
        let config = StyleConfig::new().set("variant", "blockquote");
        assert_eq!(typography().effective_str(&config, "variant"), Some("p"));
        assert!(resolve(&config, typography()).has_class("p"));
    }
}
