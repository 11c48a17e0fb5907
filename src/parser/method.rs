//! Method comment interpreter: description, arguments and the
//! `Code:` / `Echo:` / `Example:` directives.

use super::variable::{clean, is_private, parse_variable_comment};
use crate::model::{Argument, Method, VariableType};
use regex::Regex;
use std::sync::LazyLock;

static RE_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+|\*):\s*(.*)$").unwrap());

static RE_NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(none|not?|false)").unwrap());

const CODE_PREFIX: &str = "Code:";
const ECHO_PREFIX: &str = "Echo:";
const EXAMPLE_PREFIX: &str = "Example:";

/// Build a method from its comment block. Returns `None` for empty or
/// private blocks. The description may come back empty; the caller decides
/// whether such a method is kept.
pub fn parse_method_comment(name: &str, comment: &[String]) -> Option<Method> {
    if comment.is_empty() || is_private(comment) {
        return None;
    }

    let mut method = Method {
        name: name.to_string(),
        ..Method::default()
    };
    // Everything above the first directive is the description.
    let mut desc: Option<Vec<String>> = None;

    for (index, line) in comment.iter().enumerate() {
        if let Some(caps) = RE_ARGUMENT.captures(line) {
            desc.get_or_insert_with(|| clean(&comment[..index]));
            method.arguments.push(parse_argument(&caps[1], &caps[2]));
            continue;
        }

        if let Some(rest) = line.strip_prefix(CODE_PREFIX) {
            desc.get_or_insert_with(|| clean(&comment[..index]));
            if !is_negative(rest) {
                method.result_code = true;
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix(ECHO_PREFIX) {
            desc.get_or_insert_with(|| clean(&comment[..index]));
            if !is_negative(rest) {
                let rest = rest.trim_start().to_string();
                method.result_echo = parse_variable_comment("", "", &[rest]);
            }
            continue;
        }

        if line.starts_with(EXAMPLE_PREFIX) {
            desc.get_or_insert_with(|| clean(&comment[..index]));
            method.example = Some(clean(&comment[index + 1..]));
            break;
        }
    }

    method.desc = desc.unwrap_or_else(|| clean(comment));

    Some(method)
}

/// Directive remainder that opts out of the convention (`none`, `no`, ...).
fn is_negative(rest: &str) -> bool {
    RE_NEGATIVE.is_match(rest.trim_start())
}

/// Parse the part of an argument line after `N:` / `*:`.
fn parse_argument(index: &str, rest: &str) -> Argument {
    let mut argument = Argument {
        index: index.to_string(),
        is_wildcard: index == "*",
        ..Argument::default()
    };

    let mut words = Vec::new();
    for word in rest.split_whitespace() {
        match word {
            "(Boolean)" => argument.arg_type = VariableType::Boolean,
            "(Number)" => argument.arg_type = VariableType::Number,
            "(String)" => argument.arg_type = VariableType::String,
            "[Optional]" => argument.is_optional = true,
            _ => words.push(word),
        }
    }

    if argument.is_wildcard {
        argument.arg_type = VariableType::Unknown;
    }
    argument.desc = words.join(" ");

    argument
}
