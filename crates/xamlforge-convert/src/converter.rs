use xamlforge_markup::{deduplicate_names, render_document, Tag};

use crate::builder::TreeBuilder;
use crate::design::SourceNode;
use crate::error::ConvertResult;
use crate::options::ConvertOptions;

// ── Converter ─────────────────────────────────────────────────────────────

/// Runs the build → deduplicate → render pipeline with one option set.
///
/// Each call starts from scratch: a new tag tree, a new name registry and a
/// new writer. Nothing carries over between calls.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Builds the tag tree with unique names, without rendering it.
    pub fn build(&self, nodes: &[SourceNode]) -> ConvertResult<Tag> {
        let mut root = TreeBuilder::new(&self.options).build(nodes)?;
        let renamed = deduplicate_names(&mut root);
        if renamed > 0 {
            log::debug!("renamed {renamed} duplicate element name(s)");
        }
        Ok(root)
    }

    /// Converts `nodes` into a markup document.
    ///
    /// Returns an empty string when no node produced output.
    pub fn convert(&self, nodes: &[SourceNode]) -> ConvertResult<String> {
        let root = self.build(nodes)?;
        Ok(render_document(&root, self.options.indent)?)
    }

    /// Parses a JSON selection and converts it.
    pub fn convert_json(&self, json: &str) -> ConvertResult<String> {
        self.convert(&parse_selection(json)?)
    }
}

/// Converts `nodes` with `options`. See [`Converter::convert`].
pub fn convert(nodes: &[SourceNode], options: &ConvertOptions) -> ConvertResult<String> {
    Converter::new(options.clone()).convert(nodes)
}

/// Parses an exported selection: either a single node object or an array of
/// nodes.
pub fn parse_selection(json: &str) -> ConvertResult<Vec<SourceNode>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
