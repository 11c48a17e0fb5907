//! Data model for extracted script documentation.

use serde::Serialize;

/// Semantic type of a variable, constant, argument or echoed value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    #[default]
    Unknown,
    String,
    Number,
    Boolean,
}

impl VariableType {
    /// Type name as written in annotations. `Unknown` has no name.
    pub fn name(self) -> &'static str {
        match self {
            VariableType::String => "String",
            VariableType::Number => "Number",
            VariableType::Boolean => "Boolean",
            VariableType::Unknown => "",
        }
    }
}

/// Complete documentation extracted from a single script.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Defaults to the script file name.
    pub title: String,
    /// Free-text preamble from the first comment block.
    pub about: Option<Vec<String>>,
    pub constants: Vec<Variable>,
    pub variables: Vec<Variable>,
    pub methods: Vec<Method>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Document {
            title: title.into(),
            ..Document::default()
        }
    }

    /// True when at least one constant, variable or method was extracted.
    pub fn is_valid(&self) -> bool {
        self.has_constants() || self.has_variables() || self.has_methods()
    }

    pub fn has_about(&self) -> bool {
        self.about.is_some()
    }

    pub fn has_constants(&self) -> bool {
        !self.constants.is_empty()
    }

    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }

    pub fn has_methods(&self) -> bool {
        !self.methods.is_empty()
    }

    /// Entities whose name contains `pattern`, in document order per section.
    pub fn find(&self, pattern: &str) -> Matches<'_> {
        Matches {
            constants: self.constants.iter().filter(|c| c.name.contains(pattern)).collect(),
            variables: self.variables.iter().filter(|v| v.name.contains(pattern)).collect(),
            methods: self.methods.iter().filter(|m| m.name.contains(pattern)).collect(),
        }
    }
}

/// Result of [`Document::find`].
#[derive(Debug, Default, Serialize)]
pub struct Matches<'a> {
    pub constants: Vec<&'a Variable>,
    pub variables: Vec<&'a Variable>,
    pub methods: Vec<&'a Method>,
}

impl Matches<'_> {
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty() && self.variables.is_empty() && self.methods.is_empty()
    }
}

/// A documented constant or global variable. Also used for a method's
/// echoed value, where `name` and `value` stay empty.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    /// Description lines; empty strings mark paragraph breaks.
    pub desc: Vec<String>,
    #[serde(rename = "type")]
    pub var_type: VariableType,
    /// Raw literal text, continuation lines concatenated.
    pub value: String,
    /// 1-based line of the declaration.
    pub line: usize,
}

impl Variable {
    pub fn united_desc(&self) -> String {
        united_desc(&self.desc)
    }

    pub fn is_string(&self) -> bool {
        self.var_type == VariableType::String
    }

    pub fn is_number(&self) -> bool {
        self.var_type == VariableType::Number
    }

    pub fn is_boolean(&self) -> bool {
        self.var_type == VariableType::Boolean
    }

    pub fn is_unknown(&self) -> bool {
        self.var_type == VariableType::Unknown
    }
}

/// A documented shell function.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Method {
    pub name: String,
    pub desc: Vec<String>,
    pub arguments: Vec<Argument>,
    /// Function reports success/failure through its exit code.
    pub result_code: bool,
    pub result_echo: Option<Variable>,
    pub example: Option<Vec<String>>,
    pub line: usize,
}

impl Method {
    pub fn united_desc(&self) -> String {
        united_desc(&self.desc)
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    pub fn has_echo(&self) -> bool {
        self.result_echo.is_some()
    }

    pub fn has_example(&self) -> bool {
        self.example.is_some()
    }
}

/// A positional (`1:`) or wildcard (`*:`) method argument.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Argument {
    /// Position as written, or `*`.
    pub index: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub arg_type: VariableType,
    #[serde(rename = "optional")]
    pub is_optional: bool,
    #[serde(rename = "wildcard")]
    pub is_wildcard: bool,
}

impl Argument {
    pub fn is_string(&self) -> bool {
        self.arg_type == VariableType::String
    }

    pub fn is_number(&self) -> bool {
        self.arg_type == VariableType::Number
    }

    pub fn is_boolean(&self) -> bool {
        self.arg_type == VariableType::Boolean
    }

    pub fn is_unknown(&self) -> bool {
        self.arg_type == VariableType::Unknown
    }
}

/// Join description lines with single spaces, skipping paragraph breaks.
fn united_desc(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|l| !l.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(VariableType::String.name(), "String");
        assert_eq!(VariableType::Number.name(), "Number");
        assert_eq!(VariableType::Boolean.name(), "Boolean");
        assert_eq!(VariableType::Unknown.name(), "");
    }

    #[test]
    fn united_desc_skips_paragraph_breaks() {
        let v = Variable {
            desc: vec!["First.".into(), "".into(), "Second.".into()],
            ..Variable::default()
        };
        assert_eq!(v.united_desc(), "First. Second.");
    }

    #[test]
    fn empty_document_is_not_valid() {
        let doc = Document::new("script.sh");
        assert!(!doc.is_valid());
        assert!(!doc.has_about());
    }

    #[test]
    fn find_matches_by_substring() {
        let mut doc = Document::new("script.sh");
        doc.constants.push(Variable { name: "MAX_SIZE".into(), ..Variable::default() });
        doc.variables.push(Variable { name: "size".into(), ..Variable::default() });
        doc.methods.push(Method { name: "resize".into(), ..Method::default() });
        doc.methods.push(Method { name: "start".into(), ..Method::default() });

        let found = doc.find("size");
        assert!(found.constants.is_empty());
        assert_eq!(found.variables.len(), 1);
        assert_eq!(found.methods.len(), 1);
        assert_eq!(found.methods[0].name, "resize");
        assert!(doc.find("nothing").is_empty());
    }
}
