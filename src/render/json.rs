//! JSON renderer — structured output for tooling integration.

use crate::model::Document;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer {
    pub pattern: Option<String>,
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let rendered = match self.pattern {
            Some(ref pattern) => serde_json::to_string_pretty(&doc.find(pattern)),
            None => serde_json::to_string_pretty(doc),
        };
        let mut out = rendered.context("failed to serialize document")?;
        out.push('\n');
        Ok(out)
    }
}
