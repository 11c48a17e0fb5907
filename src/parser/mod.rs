//! Shell script comment parser — line-by-line state machine.
//!
//! Comment lines accumulate in a buffer until the first non-comment line,
//! which is classified as a method, variable or constant declaration. The
//! buffered block becomes that entity's documentation; the buffer is reset
//! whatever the outcome. Undocumented, private or unrecognized declarations
//! are dropped silently.

pub mod entity;
pub mod method;
pub mod variable;

use crate::error::{ParseError, Result};
use crate::model::{Document, Method, Variable};
use entity::{classify, is_multiline_value, Entity};
use log::debug;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

static RE_LINT_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"# +shellcheck +disable=").unwrap());

// -- Public API ---------------------------------------------------------------

/// Read and parse a shell script. The document title is the file name.
///
/// Fails only when the file is missing, not a regular file, empty or
/// unreadable; nothing is parsed in that case.
pub fn parse(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let content = read_script(path)?;
    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(parse_str(&title, &content))
}

/// Parse script text that is already in memory.
pub fn parse_str(title: &str, content: &str) -> Document {
    let mut state = ParserState::new(title);

    for line in content.lines() {
        state.process_line(line);
    }

    state.finish()
}

fn read_script(path: &Path) -> Result<String> {
    let meta = fs::metadata(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ParseError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ParseError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if !meta.is_file() {
        return Err(ParseError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if meta.len() == 0 {
        return Err(ParseError::Empty {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// -- Parser state -------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Section {
    Constants,
    Variables,
}

/// A documented quoted value still waiting for its closing line.
struct Continuation {
    section: Section,
    variable: Variable,
}

struct ParserState {
    doc: Document,
    /// Comment text since the last reset.
    buffer: Vec<String>,
    line_num: usize,
    /// A non-empty comment block has been consumed; About can no longer be
    /// claimed.
    block_seen: bool,
    /// Assignments after the first method are function locals.
    methods_seen: bool,
    continuation: Option<Continuation>,
}

impl ParserState {
    fn new(title: &str) -> Self {
        ParserState {
            doc: Document::new(title),
            buffer: Vec::new(),
            line_num: 0,
            block_seen: false,
            methods_seen: false,
            continuation: None,
        }
    }

    fn process_line(&mut self, raw: &str) {
        self.line_num += 1;

        if self.continuation.is_some() {
            self.continue_value(raw);
            return;
        }

        // Shebang
        if self.line_num == 1 || RE_LINT_DIRECTIVE.is_match(raw) {
            return;
        }

        let line = raw.trim_start_matches(' ');

        if line.is_empty() {
            self.flush_blank();
            return;
        }

        if line.chars().all(|c| c == '#') {
            if !self.buffer.is_empty() {
                self.buffer.push(String::new());
            }
            return;
        }

        if let Some(text) = line.strip_prefix('#') {
            let text = text.strip_prefix(' ').unwrap_or(text);
            self.buffer.push(text.to_string());
            return;
        }

        self.process_declaration(line);
    }

    /// Blank line: the first comment block becomes About if nothing has been
    /// documented yet. The buffer is cleared either way.
    fn flush_blank(&mut self) {
        let block = std::mem::take(&mut self.buffer);
        let about = variable::clean(&block);
        if about.is_empty() {
            return;
        }

        let first = !self.block_seen;
        self.block_seen = true;

        if first && !self.doc.is_valid() {
            debug!("line {}: captured about block ({} lines)", self.line_num, about.len());
            self.doc.about = Some(about);
        }
    }

    fn process_declaration(&mut self, line: &str) {
        let block = std::mem::take(&mut self.buffer);
        if !block.is_empty() {
            self.block_seen = true;
        }

        let Some(entity) = classify(line) else {
            if !block.is_empty() {
                debug!("line {}: comment block not attached to a declaration", self.line_num);
            }
            return;
        };

        match entity {
            Entity::Method { name } => {
                if let Some(method) = self.build_method(name, &block) {
                    self.doc.methods.push(method);
                }
            }
            Entity::Constant { name, value } => {
                self.assignment(Section::Constants, name, value, &block);
            }
            Entity::Variable { name, value } => {
                self.assignment(Section::Variables, name, value, &block);
            }
        }
    }

    fn build_method(&mut self, name: &str, block: &[String]) -> Option<Method> {
        if block.is_empty() {
            return None;
        }

        let Some(mut method) = method::parse_method_comment(name, block) else {
            debug!("line {}: skipping private method {}", self.line_num, name);
            return None;
        };
        self.methods_seen = true;

        if method.desc.is_empty() {
            debug!("line {}: method {} has no description", self.line_num, name);
            return None;
        }

        method.line = self.line_num;
        Some(method)
    }

    fn assignment(&mut self, section: Section, name: &str, value: &str, block: &[String]) {
        let Some(variable) = self.build_variable(name, value, block) else {
            return;
        };

        if is_multiline_value(value) {
            self.continuation = Some(Continuation { section, variable });
        } else {
            self.push_variable(section, variable);
        }
    }

    fn build_variable(&self, name: &str, value: &str, block: &[String]) -> Option<Variable> {
        if block.is_empty() {
            return None;
        }

        if self.methods_seen {
            debug!("line {}: ignoring {} declared after first method", self.line_num, name);
            return None;
        }

        let Some(mut variable) = variable::parse_variable_comment(name, value, block) else {
            debug!("line {}: skipping private variable {}", self.line_num, name);
            return None;
        };

        if variable.desc.is_empty() {
            debug!("line {}: variable {} has no description", self.line_num, name);
            return None;
        }

        variable.line = self.line_num;
        Some(variable)
    }

    /// Append a raw line to the pending multiline value; a line ending with a
    /// quote closes it.
    fn continue_value(&mut self, raw: &str) {
        let Some(pending) = self.continuation.as_mut() else {
            return;
        };

        pending.variable.value.push_str(raw);

        if raw.ends_with('"') {
            self.close_continuation();
        }
    }

    fn close_continuation(&mut self) {
        if let Some(Continuation { section, variable }) = self.continuation.take() {
            self.push_variable(section, variable);
        }
    }

    fn push_variable(&mut self, section: Section, variable: Variable) {
        match section {
            Section::Constants => self.doc.constants.push(variable),
            Section::Variables => self.doc.variables.push(variable),
        }
    }

    fn finish(mut self) -> Document {
        // Unterminated value at end of file
        self.close_continuation();
        self.doc
    }
}
