//! Button and the alignment wrapper around it

use std::sync::LazyLock;

use crate::schema::{OptionSchema, Template};

static BUTTON: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("button")
        .base(&["button"])
        .enum_option(
            "variant",
            "primary",
            &["primary", "secondary", "danger", "outline", "ghost"],
        )
        .template(Template::class("button-{}"))
        .enum_option("size", "md", &["sm", "md", "lg", "xl"])
        .template(Template::class("button-{}"))
        .enum_option("shape", "rounded", &["square", "rounded", "pill"])
        .template(Template::class("button-{}"))
        .flag_option("fullWidth", false)
        .template(Template::classes(&["button-full-width"]))
        .flag_option("isLoading", false)
        .template(Template::classes(&["button-loading"]))
        .flag_option("animated", true)
        .template(Template::classes(&["button-animated"]))
        .flag_option("disabled", false)
        .template(Template::classes(&["button-disabled"]))
        .build()
});

static BUTTON_CONTAINER: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("button-container")
        .base(&["button-container"])
        .enum_option("align", "center", &["left", "center", "right"])
        .template(Template::class("button-{}"))
        .flag_option("fullWidth", false)
        .template(Template::classes(&["w-full"]))
        .build()
});

pub fn button() -> &'static OptionSchema {
    &BUTTON
}

pub fn button_container() -> &'static OptionSchema {
    &BUTTON_CONTAINER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleConfig};

    #[test]
    fn test_defaults() {
        let set = resolve(&StyleConfig::new(), button());
        assert_eq!(
            set.class_string(),
            "button button-primary button-md button-rounded button-animated"
        );
    }

    #[test]
    fn test_conditional_flags() {
        let config = StyleConfig::new()
            .flag("fullWidth", true)
            .flag("isLoading", true)
            .flag("animated", false)
            .flag("disabled", true);
        let set = resolve(&config, button());
        assert!(set.has_class("button-full-width"));
        assert!(set.has_class("button-loading"));
        assert!(set.has_class("button-disabled"));
        assert!(!set.has_class("button-animated"));
    }

    #[test]
    fn test_variant_and_shape() {
        let config = StyleConfig::new()
            .set("variant", "ghost")
            .set("shape", "pill")
            .set("size", "xl");
        let set = resolve(&config, button());
        assert_eq!(
            set.class_string(),
            "button button-ghost button-xl button-pill button-animated"
        );
    }

    #[test]
    fn test_custom_class_after_flags() {
        let config = StyleConfig::new().flag("disabled", true).class("mt-4");
        let set = resolve(&config, button());
        assert_eq!(set.classes().last().map(String::as_str), Some("mt-4"));
    }

    #[test]
    fn test_container_alignment() {
        let set = resolve(&StyleConfig::new(), button_container());
        assert_eq!(set.class_string(), "button-container button-center");

        let config = StyleConfig::new().set("align", "right").flag("fullWidth", true);
        let set = resolve(&config, button_container());
        assert_eq!(set.class_string(), "button-container button-right w-full");
    }
}
