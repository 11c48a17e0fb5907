//! Type resolution for constants, variables and echoed values.

use crate::model::{Variable, VariableType};
use regex::Regex;
use std::sync::LazyLock;

static RE_TYPE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) \((Boolean|String|Number)\)").unwrap());

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// First comment lines that hide an entity from the output.
const PRIVACY_MARKERS: &[&str] = &["private", "PRIVATE", "-"];

/// True when the block opens with a privacy marker.
pub fn is_private(comment: &[String]) -> bool {
    comment
        .first()
        .is_some_and(|first| PRIVACY_MARKERS.contains(&first.trim_end_matches(' ')))
}

/// Build a variable from its comment block. Returns `None` for empty or
/// private blocks. `line` is left for the caller to fill in.
pub fn parse_variable_comment(name: &str, value: &str, comment: &[String]) -> Option<Variable> {
    if comment.is_empty() || is_private(comment) {
        return None;
    }

    let (desc, explicit) = extract_type(comment);
    let var_type = explicit.unwrap_or_else(|| guess_type(value));

    Some(Variable {
        name: name.to_string(),
        desc,
        var_type,
        value: value.to_string(),
        line: 0,
    })
}

/// Strip the first `(Type)` annotation from the block and return the cleaned
/// lines together with the annotated type, if any.
fn extract_type(comment: &[String]) -> (Vec<String>, Option<VariableType>) {
    let mut found = None;
    let mut lines = Vec::with_capacity(comment.len());

    for line in comment {
        if found.is_none() {
            if let Some(caps) = RE_TYPE_COMMENT.captures(line) {
                found = Some(match &caps[2] {
                    "Boolean" => VariableType::Boolean,
                    "Number" => VariableType::Number,
                    _ => VariableType::String,
                });
                lines.push(caps[1].to_string());
                continue;
            }
        }
        lines.push(line.clone());
    }

    (clean(&lines), found)
}

/// Infer a type from the literal value.
pub fn guess_type(value: &str) -> VariableType {
    if value.is_empty() {
        VariableType::Unknown
    } else if value == "true" {
        VariableType::Boolean
    } else if RE_NUMBER.is_match(value) {
        VariableType::Number
    } else {
        VariableType::String
    }
}

/// Drop trailing empty lines and trailing spaces. Interior empty lines are
/// paragraph breaks and stay.
pub fn clean(lines: &[String]) -> Vec<String> {
    let Some(last) = lines.iter().rposition(|l| !l.is_empty()) else {
        return Vec::new();
    };

    lines[..=last]
        .iter()
        .map(|l| l.trim_end_matches(' ').to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn clean_trims_trailing_lines_and_spaces() {
        let input = lines(&["First   ", "", "Second ", "", ""]);
        assert_eq!(clean(&input), lines(&["First", "", "Second"]));
    }

    #[test]
    fn clean_all_empty() {
        assert!(clean(&lines(&["", ""])).is_empty());
        assert!(clean(&[]).is_empty());
    }

    #[test]
    fn guess_types() {
        assert_eq!(guess_type(""), VariableType::Unknown);
        assert_eq!(guess_type("true"), VariableType::Boolean);
        assert_eq!(guess_type("false"), VariableType::String);
        assert_eq!(guess_type("42"), VariableType::Number);
        assert_eq!(guess_type("-1"), VariableType::String);
        assert_eq!(guess_type("\"\""), VariableType::String);
    }

    #[test]
    fn annotation_overrides_value() {
        let v = parse_variable_comment("CONST_5", "\"\"", &lines(&["Constant #5 with type (Number)"]))
            .unwrap();
        assert_eq!(v.var_type, VariableType::Number);
        assert_eq!(v.desc, lines(&["Constant #5 with type"]));
        assert_eq!(v.value, "\"\"");
    }

    #[test]
    fn only_first_annotation_is_stripped() {
        let v = parse_variable_comment(
            "x",
            "",
            &lines(&["Size (Number)", "Label (String)"]),
        )
        .unwrap();
        assert_eq!(v.var_type, VariableType::Number);
        assert_eq!(v.desc, lines(&["Size", "Label (String)"]));
    }

    #[test]
    fn annotation_on_later_line() {
        let v = parse_variable_comment("x", "1", &lines(&["Timeout", "in seconds (String)"])).unwrap();
        assert_eq!(v.var_type, VariableType::String);
        assert_eq!(v.desc, lines(&["Timeout", "in seconds"]));
    }

    #[test]
    fn private_blocks_are_dropped() {
        assert!(parse_variable_comment("x", "1", &lines(&["-", "Private"])).is_none());
        assert!(parse_variable_comment("x", "1", &lines(&["private  "])).is_none());
        assert!(parse_variable_comment("x", "1", &lines(&["PRIVATE"])).is_none());
        assert!(parse_variable_comment("x", "1", &lines(&["Private"])).is_some());
        assert!(parse_variable_comment("x", "1", &[]).is_none());
    }
}
