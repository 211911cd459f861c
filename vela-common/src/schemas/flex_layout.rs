//! Flex layout container

use std::sync::LazyLock;

use crate::schema::{OptionSchema, Template};

static FLEX_LAYOUT: LazyLock<OptionSchema> = LazyLock::new(|| {
    OptionSchema::builder("flex-layout")
        .base(&["flex"])
        .enum_option("direction", "column", &["row", "column"])
        .template(Template::Map(&[("row", &["flex-row"]), ("column", &["flex-col"])]))
        .enum_option(
            "justify",
            "start",
            &["start", "center", "end", "between", "around"],
        )
        .template(Template::class("justify-{}"))
        .enum_option("align", "start", &["start", "center", "end"])
        .template(Template::class("items-{}"))
        .string_option("spacing", Some("space-y-4"))
        .template(Template::RawClass)
        .flag_option("wrap", false)
        .template(Template::classes(&["flex-wrap"]))
        .build()
});

pub fn flex_layout() -> &'static OptionSchema {
    &FLEX_LAYOUT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, StyleConfig};

    #[test]
    fn test_defaults() {
        let set = resolve(&StyleConfig::new(), flex_layout());
        assert_eq!(
            set.class_string(),
            "flex flex-col justify-start items-start space-y-4"
        );
    }

    #[test]
    fn test_row_wrap_without_spacing() {
        let config = StyleConfig::new()
            .set("direction", "row")
            .set("justify", "between")
            .set("spacing", "")
            .flag("wrap", true);
        let set = resolve(&config, flex_layout());
        assert_eq!(
            set.class_string(),
            "flex flex-row justify-between items-start flex-wrap"
        );
    }
}
