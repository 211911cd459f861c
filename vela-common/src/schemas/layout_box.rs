//! Box: general-purpose bordered container.
//!
//! Most options take raw utility classes (`p-4`, `w-1/2`) rather than
//! tokens, so they are free strings split into classes.

use std::sync::LazyLock;

use crate::schema::{Guard, OptionSchema, Template};

static LAYOUT_BOX: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("box")
        .flag_option("center", false)
        .template(Template::FlagClass {
            on: &["flex", "justify-center", "items-center"],
            off: &["flex"],
        })
        .enum_option("flexDirection", "row", &["row", "column"])
        .template(Template::class("flex-{}"))
        .string_option("display", Some("block"))
        .template(Template::class("display-{}"))
        .string_option("overflow", Some("visible"))
        .template(Template::class("overflow-{}"))
        .string_option("zIndex", Some("auto"))
        .template(Template::class("z-{}"))
        .string_option("borderWidth", Some("border"))
        .template(Template::classes(&["border"]))
        .template(Template::RawClass)
        .when(Guard::Present("borderColor"))
        .string_option("borderColor", Some("black"))
        .template(Template::class("border-{}"))
        .string_option("fillColor", None)
        .template(Template::RawClass)
        .string_option("textColor", Some("black"))
        .template(Template::class("text-{}"))
        .string_option("margin", None)
        .template(Template::RawClass)
        .string_option("padding", Some("p-4"))
        .template(Template::RawClass)
        .enum_option("rounded", "none", super::badge::ROUNDED)
        .template(Template::class_except("rounded-{}", &["none"]))
        .enum_option("shadow", "none", &["none", "sm", "md", "lg"])
        .template(Template::class_except("shadow-{}", &["none"]))
        .string_option("height", None)
        .template(Template::RawClass)
        .string_option("width", Some("w-full"))
        .template(Template::RawClass)
        .string_option("role", Some("region"))
        .template(Template::Attr("role"))
        .string_option("ariaLabel", None)
        .template(Template::Attr("aria-label"))
        .build()
});

pub fn layout_box() -> &'static OptionSchema {
    &LAYOUT_BOX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleConfig};

    #[test]
    fn test_defaults() {
        let set = resolve(&StyleConfig::new(), layout_box());
        assert_eq!(
            set.class_string(),
            "flex flex-row display-block overflow-visible z-auto border border-black text-black p-4 w-full"
        );
        assert_eq!(set.attribute("role"), Some("region"));
        assert_eq!(set.attribute("aria-label"), None);
    }

    #[test]
    fn test_centered_column() {
        let config = StyleConfig::new()
            .flag("center", true)
            .set("flexDirection", "column");
        let set = resolve(&config, layout_box());
        let classes = set.classes();
        assert_eq!(
            &classes[..4],
            ["flex", "justify-center", "items-center", "flex-column"]
        );
    }

    #[test]
    fn test_empty_border_color_drops_border() {
        let config = StyleConfig::new()
            .set("borderColor", "")
            .set("borderWidth", "border-4");
        let set = resolve(&config, layout_box());
        assert!(set.classes().iter().all(|c| !c.starts_with("border")));
    }

    #[test]
    fn test_spaced_value_never_becomes_one_class() {
        let config = StyleConfig::new()
            .set("display", "inline block")
            .set("textColor", "red 500");
        let resolution = crate::resolve_reporting(&config, layout_box());
        let set = &resolution.directives;
        assert!(set.classes().iter().all(|c| !c.contains(char::is_whitespace)));
        assert!(set.has_class("display-block"));
        assert!(set.has_class("text-black"));
        assert_eq!(resolution.diagnostics.len(), 2);
        assert!(matches!(
            &resolution.diagnostics[0],
            crate::Diagnostic::NotAClassToken { option: "display", value, .. } if value == "inline block"
        ));
    }

    #[test]
    fn test_raw_classes_pass_through() {
        let config = StyleConfig::new()
            .set("borderColor", "red-500")
            .set("borderWidth", "border-2")
            .set("padding", "px-6 py-2")
            .set("fillColor", "bg-green-500")
            .set("rounded", "lg")
            .set("shadow", "md")
            .set("ariaLabel", "Summary");
        let set = resolve(&config, layout_box());
        for token in [
            "border",
            "border-2",
            "border-red-500",
            "px-6",
            "py-2",
            "bg-green-500",
            "rounded-lg",
            "shadow-md",
        ] {
            assert!(set.has_class(token), "missing {token}");
        }
        assert!(!set.has_class("p-4"));
        assert_eq!(set.attribute("aria-label"), Some("Summary"));
    }
}
