//! Helpers for turning resolved directives into element attributes

use vela_common::DirectiveSet;

/// Value for a `style` attribute, `None` when nothing is inline-styled
pub fn style_attr(set: &DirectiveSet) -> Option<String> {
    let style = set.style_string();
    (!style.is_empty()).then_some(style)
}

/// An attribute the resolver emitted, owned for use in `rsx!`
pub fn attr(set: &DirectiveSet, name: &str) -> Option<String> {
    set.attribute(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_attr() {
        let mut set = DirectiveSet::new();
        assert_eq!(style_attr(&set), None);
        set.set_style("color", "red");
        assert_eq!(style_attr(&set).as_deref(), Some("color: red"));
    }

    #[test]
    fn test_attr() {
        let mut set = DirectiveSet::new();
        set.set_attribute("role", "region");
        assert_eq!(attr(&set, "role").as_deref(), Some("region"));
        assert_eq!(attr(&set, "title"), None);
    }
}
