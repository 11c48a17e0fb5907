//! shdoc — extract documentation from annotated shell script comments.
//!
//! Scripts document their constants, global variables and functions with
//! plain `#` comment blocks placed directly above each declaration:
//!
//! ```text
//! # Path to the configuration file (String)
//! CONFIG_FILE="/etc/app.conf"
//!
//! # Check that a file exists
//! #
//! # 1: Path to file (String)
//! # 2: Fail silently (Boolean) [Optional]
//! #
//! # Code: Yes
//! # Echo: Size in bytes (Number)
//! #
//! # Example:
//! # size=$(checkFile /etc/app.conf)
//! checkFile() {
//! ```
//!
//! [`parse`] turns such a script into a [`Document`]; [`render`] turns a
//! document into text or JSON.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

pub use error::ParseError;
pub use model::{Argument, Document, Method, Variable, VariableType};
pub use parser::{parse, parse_str};
