//! Plain terminal renderer.
//!
//! Full mode prints every section (About, Constants, Global Variables,
//! Methods). Search mode prints only entities whose name contains the
//! pattern, with method examples included.

use crate::model::*;
use crate::render::Renderer;
use anyhow::Result;

const SEPARATOR_WIDTH: usize = 80;

pub struct TextRenderer {
    pub pattern: Option<String>,
}

impl Renderer for TextRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        match self.pattern {
            Some(ref pattern) => render_matches(&mut lines, doc, pattern),
            None => render_document(&mut lines, doc),
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }
}

fn render_document(lines: &mut Vec<String>, doc: &Document) {
    if let Some(ref about) = doc.about {
        lines.push(separator("ABOUT"));
        lines.extend(about.iter().map(|l| format!("  {}", l).trim_end().to_string()));
    }

    if doc.has_constants() {
        lines.push(separator("CONSTANTS"));
        push_spaced(lines, &doc.constants, 1, render_variable);
    }

    if doc.has_variables() {
        lines.push(separator("GLOBAL VARIABLES"));
        push_spaced(lines, &doc.variables, 1, render_variable);
    }

    if doc.has_methods() {
        lines.push(separator("METHODS"));
        push_spaced(lines, &doc.methods, 2, |m| render_method(m, false));
    }

    lines.push(separator(""));
}

fn render_matches(lines: &mut Vec<String>, doc: &Document, pattern: &str) {
    let found = doc.find(pattern);

    for constant in found.constants {
        lines.extend(render_variable(constant));
        lines.push(String::new());
    }
    for variable in found.variables {
        lines.extend(render_variable(variable));
        lines.push(String::new());
    }
    for method in found.methods {
        lines.extend(render_method(method, true));
        lines.push(String::new());
    }
}

/// Render each item, separated by `gap` empty lines.
fn push_spaced<T>(lines: &mut Vec<String>, items: &[T], gap: usize, render: impl Fn(&T) -> Vec<String>) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            lines.extend(std::iter::repeat(String::new()).take(gap));
        }
        lines.extend(render(item));
    }
}

fn render_variable(var: &Variable) -> Vec<String> {
    vec![
        with_type(format!("{:4}: {} = {}", var.line, var.name, var.value), var.var_type),
        format!("      {}", var.united_desc()),
    ]
}

fn render_method(method: &Method, show_example: bool) -> Vec<String> {
    let mut lines = vec![format!("{:4}: {} - {}", method.line, method.name, method.united_desc())];

    if method.has_arguments() {
        lines.push(String::new());
        for arg in &method.arguments {
            let mut line = format!("  {:>2}. {}", arg.index, arg.desc);
            if !arg.is_wildcard {
                line = with_type(line, arg.arg_type);
            }
            if arg.is_optional {
                line.push_str(" [Optional]");
            }
            lines.push(line);
        }
    }

    if method.result_code {
        lines.push(String::new());
        lines.push("  Code: 0 - ok, 1 - not ok".to_string());
    }

    if let Some(ref echo) = method.result_echo {
        lines.push(String::new());
        lines.push(with_type(format!("  Echo: {}", echo.desc.join(" ")), echo.var_type));
    }

    if show_example {
        if let Some(ref example) = method.example {
            lines.push(String::new());
            lines.push("  Example:".to_string());
            lines.push(String::new());
            lines.extend(example.iter().map(|l| format!("    {}", l).trim_end().to_string()));
        }
    }

    lines
}

/// Append ` (Type)` unless the type is unknown.
fn with_type(mut line: String, var_type: VariableType) -> String {
    let name = var_type.name();
    if !name.is_empty() {
        line.push_str(&format!(" ({})", name));
    }
    line
}

fn separator(title: &str) -> String {
    if title.is_empty() {
        return "-".repeat(SEPARATOR_WIDTH);
    }
    let head = format!("-- {} ", title);
    let fill = SEPARATOR_WIDTH.saturating_sub(head.len());
    format!("{}{}", head, "-".repeat(fill))
}
