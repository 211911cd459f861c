//! Badge: small colored label with optional icon

use std::sync::LazyLock;

use crate::schema::{Guard, OptionSchema, Template};

pub const COLORS: &[&str] = &[
    "blue", "green", "red", "yellow", "gray", "purple", "pink", "orange",
];
pub const ROUNDED: &[&str] = &["none", "sm", "md", "lg", "full"];

static BADGE: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("badge")
        .base(&["inline-flex", "items-center"])
        .enum_option("color", "blue", COLORS)
        .template(Template::switch(
            "variant",
            vec![
                ("solid", vec![Template::class("bg-{}-500")]),
                (
                    "outline",
                    vec![
                        Template::classes(&["border"]),
                        Template::class("border-{}-500"),
                        Template::class("text-{}-500"),
                    ],
                ),
            ],
        ))
        .enum_option("variant", "solid", &["solid", "outline"])
        .template(Template::Map(&[("outline", &["border-2"])]))
        .enum_option("textColor", "white", &["white", "black"])
        .template(Template::class("text-{}"))
        .enum_option("size", "md", &["sm", "md", "lg"])
        .template(Template::Map(&[
            ("sm", &["text-xs", "px-2", "py-1"]),
            ("md", &["text-sm", "px-3", "py-1.5"]),
            ("lg", &["text-lg", "px-4", "py-2"]),
        ]))
        // An explicit radius beats the pill flag
        .enum_option("rounded", "md", ROUNDED)
        .template(Template::class_except("rounded-{}", &["none"]))
        .when(Guard::Any(vec![
            Guard::Explicit("rounded"),
            Guard::not(Guard::Present("isPill")),
        ]))
        .flag_option("isPill", false)
        .template(Template::classes(&["rounded-full"]))
        .when(Guard::UnsetOr("rounded", "none"))
        .string_option("tooltip", None)
        .template(Template::classes(&["cursor-pointer"]))
        .template(Template::Attr("title"))
        .build()
});

static BADGE_ICON: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("badge-icon")
        .enum_option("iconSize", "sm", &["sm", "md", "lg"])
        .template(Template::Map(&[
            ("sm", &["text-xs"]),
            ("md", &["text-sm"]),
            ("lg", &["text-lg"]),
        ]))
        .enum_option("positionIcon", "left", &["left", "right"])
        .template(Template::Map(&[("left", &["mr-1"]), ("right", &["ml-1"])]))
        .build()
});

pub fn badge() -> &'static OptionSchema {
    &BADGE
}

/// Wrapper around the badge's icon; `positionIcon` also decides which side it renders on
pub fn badge_icon() -> &'static OptionSchema {
    &BADGE_ICON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleConfig};

    #[test]
    fn test_defaults() {
        let set = resolve(&StyleConfig::new(), badge());
        assert_eq!(
            set.class_string(),
            "inline-flex items-center bg-blue-500 text-white text-sm px-3 py-1.5 rounded-md"
        );
    }

    #[test]
    fn test_solid_uses_background() {
        let config = StyleConfig::new().set("color", "green").set("variant", "solid");
        let set = resolve(&config, badge());
        assert!(set.has_class("bg-green-500"));
        assert!(set.classes().iter().all(|c| !c.starts_with("border")));
    }

    #[test]
    fn test_outline_uses_border_and_text() {
        let config = StyleConfig::new().set("color", "green").set("variant", "outline");
        let set = resolve(&config, badge());
        assert!(set.has_class("border-green-500"));
        assert!(set.has_class("text-green-500"));
        assert!(set.has_class("border-2"));
        assert!(!set.has_class("bg-green-500"));
    }

    #[test]
    fn test_explicit_rounded_beats_pill() {
        let config = StyleConfig::new().set("rounded", "lg").flag("isPill", true);
        let set = resolve(&config, badge());
        assert!(set.has_class("rounded-lg"));
        assert!(!set.has_class("rounded-full"));
    }

    #[test]
    fn test_pill_with_unset_rounded() {
        let config = StyleConfig::new().flag("isPill", true);
        let set = resolve(&config, badge());
        assert!(set.has_class("rounded-full"));
        assert!(!set.has_class("rounded-md"));
    }

    #[test]
    fn test_pill_with_rounded_none() {
        let config = StyleConfig::new().set("rounded", "none").flag("isPill", true);
        let set = resolve(&config, badge());
        assert!(set.has_class("rounded-full"));
    }

    #[test]
    fn test_rounded_none_without_pill_is_square() {
        let config = StyleConfig::new().set("rounded", "none");
        let set = resolve(&config, badge());
        assert!(set.classes().iter().all(|c| !c.starts_with("rounded")));
    }

    #[test]
    fn test_tooltip_adds_cursor_and_title() {
        let config = StyleConfig::new().set("tooltip", "Build passing");
        let set = resolve(&config, badge());
        assert!(set.has_class("cursor-pointer"));
        assert_eq!(set.attribute("title"), Some("Build passing"));
    }

    #[test]
    fn test_icon_placement() {
        let config = StyleConfig::new().set("positionIcon", "right").set("iconSize", "lg");
        let set = resolve(&config, badge_icon());
        assert_eq!(set.class_string(), "text-lg ml-1");
        assert_eq!(badge_icon().effective_str(&config, "positionIcon"), Some("right"));
    }
}
