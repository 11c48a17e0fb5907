//! Declaration line classifier.

use regex::Regex;
use std::sync::LazyLock;

static RE_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9._]+)\(\)").unwrap());

static RE_ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9_.\[\]]+)=(.*)$").unwrap());

static RE_CONSTANT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());

/// What a non-comment line declares.
#[derive(Debug, PartialEq, Eq)]
pub enum Entity<'a> {
    Method { name: &'a str },
    Variable { name: &'a str, value: &'a str },
    Constant { name: &'a str, value: &'a str },
}

/// Classify a left-trimmed line. `None` means the line declares nothing
/// we document.
pub fn classify(line: &str) -> Option<Entity<'_>> {
    if let Some(caps) = RE_METHOD.captures(line) {
        let name = caps.get(1)?.as_str();
        return Some(Entity::Method { name });
    }

    let caps = RE_ASSIGNMENT.captures(line)?;
    let name = caps.get(1)?.as_str();
    let value = caps.get(2).map_or("", |m| m.as_str());

    if RE_CONSTANT_NAME.is_match(name) {
        Some(Entity::Constant { name, value })
    } else {
        Some(Entity::Variable { name, value })
    }
}

/// A quoted value that does not close on its own line.
pub fn is_multiline_value(value: &str) -> bool {
    value.starts_with('"') && !value.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_definition() {
        assert_eq!(classify("method1() {"), Some(Entity::Method { name: "method1" }));
        assert_eq!(classify("lib.init(){"), Some(Entity::Method { name: "lib.init" }));
    }

    #[test]
    fn method_wins_over_assignment() {
        assert_eq!(classify("f()=1"), Some(Entity::Method { name: "f" }));
    }

    #[test]
    fn constant_by_casing() {
        assert_eq!(
            classify("MAX_SIZE_2=10"),
            Some(Entity::Constant { name: "MAX_SIZE_2", value: "10" })
        );
    }

    #[test]
    fn variable_by_casing() {
        assert_eq!(
            classify("Max=10"),
            Some(Entity::Variable { name: "Max", value: "10" })
        );
        assert_eq!(
            classify("arr[1]=\"x\""),
            Some(Entity::Variable { name: "arr[1]", value: "\"x\"" })
        );
    }

    #[test]
    fn empty_value() {
        assert_eq!(classify("var_7="), Some(Entity::Variable { name: "var_7", value: "" }));
    }

    #[test]
    fn unrecognized() {
        assert_eq!(classify("set -e"), None);
        assert_eq!(classify("function foo {"), None);
        assert_eq!(classify("local x=1"), None);
    }

    #[test]
    fn multiline_detection() {
        assert!(is_multiline_value("\"This is "));
        assert!(!is_multiline_value("\"closed\""));
        assert!(!is_multiline_value("\""));
        assert!(!is_multiline_value("plain"));
    }
}
