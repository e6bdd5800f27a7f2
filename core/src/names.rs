//! # Name Helpers
//!
//! Small string utilities for qualified names and property names.

/// Returns the segment after the last `.`, or the whole input when it has no dot.
///
/// # Examples
/// ```
/// use classdoc_core::names::simple_name;
///
/// assert_eq!(simple_name("javax.validation.constraints.NotNull"), "NotNull");
/// assert_eq!(simple_name("NotNull"), "NotNull");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind('.') {
        Some(idx) => &qualified[idx + 1..],
        None => qualified,
    }
}

/// Lower-cases the first character only.
pub fn first_to_lower_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives a property name from a `get`-prefixed accessor name.
///
/// Returns `None` unless the name starts with `get` and has at least one
/// more character.
pub fn accessor_property_name(method_name: &str) -> Option<String> {
    method_name
        .strip_prefix("get")
        .filter(|rest| !rest.is_empty())
        .map(first_to_lower_case)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("java.lang.Object"), "Object");
        assert_eq!(simple_name("Locale"), "Locale");
        assert_eq!(simple_name(""), "");
        assert_eq!(simple_name("trailing."), "");
    }

    #[test]
    fn test_first_to_lower_case() {
        assert_eq!(first_to_lower_case("UserName"), "userName");
        assert_eq!(first_to_lower_case("URL"), "uRL");
        assert_eq!(first_to_lower_case(""), "");
    }

    #[test]
    fn test_accessor_property_name() {
        assert_eq!(accessor_property_name("getName").as_deref(), Some("name"));
        assert_eq!(accessor_property_name("getX").as_deref(), Some("x"));
        assert_eq!(accessor_property_name("get"), None);
        assert_eq!(accessor_property_name("isActive"), None);
        assert_eq!(accessor_property_name("toString"), None);
    }
}
