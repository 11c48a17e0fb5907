//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod text;

use crate::model::Document;
use anyhow::{anyhow, Result};

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
}

/// Create a renderer for the given format name. With a `pattern`, only
/// entities whose name contains it are rendered.
pub fn create_renderer(format: &str, pattern: Option<&str>) -> Result<Box<dyn Renderer>> {
    let pattern = pattern.map(str::to_string);
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer { pattern })),
        "json" => Ok(Box::new(json::JsonRenderer { pattern })),
        _ => Err(anyhow!("unknown format: {}. Use text or json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        let doc = Document::new("script.sh");
        for format in ["text", "txt", "json"] {
            let renderer = create_renderer(format, None).unwrap();
            assert!(renderer.render(&doc).unwrap().ends_with('\n'), "{format}");
        }
        let json = create_renderer("json", Some("x")).unwrap().render(&doc).unwrap();
        assert!(json.contains("\"methods\": []"));
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", None).err().unwrap();
        assert!(err.to_string().contains("unknown format"));
    }
}
