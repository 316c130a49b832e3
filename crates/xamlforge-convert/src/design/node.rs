use serde::{Deserialize, Deserializer};

use crate::design::Bounds;
use crate::paint::Fill;

// ── NodeKind ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Frame,
    Group,
    Rectangle,
    Ellipse,
    Text,
    Vector,
    /// Components, instances, booleans, slices, ... Holds the host's type
    /// string so diagnostics can name it.
    Other(String),
}

impl NodeKind {
    /// Maps the host's `type` string.
    pub fn from_type(ty: &str) -> Self {
        match ty {
            "FRAME" => NodeKind::Frame,
            "GROUP" => NodeKind::Group,
            "RECTANGLE" => NodeKind::Rectangle,
            "ELLIPSE" => NodeKind::Ellipse,
            "TEXT" => NodeKind::Text,
            "VECTOR" => NodeKind::Vector,
            other => NodeKind::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Frame => "FRAME",
            NodeKind::Group => "GROUP",
            NodeKind::Rectangle => "RECTANGLE",
            NodeKind::Ellipse => "ELLIPSE",
            NodeKind::Text => "TEXT",
            NodeKind::Vector => "VECTOR",
            NodeKind::Other(ty) => ty,
        }
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(|ty| NodeKind::from_type(&ty))
    }
}

// ── Font fields ───────────────────────────────────────────────────────────

/// A text property that is either uniform across the node or differs
/// between runs. The host reports the latter with a marker string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FontValue<T> {
    Uniform(T),
    Mixed(String),
}

impl<T> FontValue<T> {
    pub fn uniform(&self) -> Option<&T> {
        match self {
            FontValue::Uniform(v) => Some(v),
            FontValue::Mixed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FontName {
    pub family: String,
    #[serde(default)]
    pub style: String,
}

// ── SourceNode ────────────────────────────────────────────────────────────

/// One node of the design tree.
///
/// ```
/// use xamlforge_convert::design::{NodeKind, SourceNode};
/// use xamlforge_convert::paint::{Color, Paint};
///
/// let card = SourceNode::new(NodeKind::Frame, "Card")
///     .with_bounds(0.0, 0.0, 320.0, 200.0)
///     .with_fill(Paint::solid(Color::rgb(1.0, 1.0, 1.0)))
///     .with_child(SourceNode::text("Title", "Hello").with_bounds(16.0, 16.0, 200.0, 24.0));
/// assert_eq!(card.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceNode {
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(rename = "absoluteBoundingBox", default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default)]
    pub fills: Option<Vec<Fill>>,
    #[serde(default)]
    pub children: Option<Vec<SourceNode>>,

    // Text nodes only.
    #[serde(default)]
    pub characters: Option<String>,
    #[serde(default)]
    pub font_name: Option<FontValue<FontName>>,
    #[serde(default)]
    pub font_size: Option<FontValue<f64>>,
}

fn visible_by_default() -> bool {
    true
}

impl SourceNode {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            visible: true,
            name: name.into(),
            kind,
            bounds: None,
            opacity: None,
            fills: None,
            children: None,
            characters: None,
            font_name: None,
            font_size: None,
        }
    }

    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Text, name);
        node.characters = Some(characters.into());
        node
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bounds = Some(Bounds::new(x, y, width, height));
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fills.get_or_insert_with(Vec::new).push(fill.into());
        self
    }

    pub fn with_child(mut self, child: SourceNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_font(mut self, family: impl Into<String>, size: f64) -> Self {
        self.font_name = Some(FontValue::Uniform(FontName { family: family.into(), style: String::new() }));
        self.font_size = Some(FontValue::Uniform(size));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn fills(&self) -> &[Fill] {
        self.fills.as_deref().unwrap_or_default()
    }

    pub fn children(&self) -> &[SourceNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(json: &str) -> SourceNode {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn minimal_node_defaults() {
        let n = node(r#"{ "type": "RECTANGLE", "name": "Box" }"#);
        assert!(n.visible);
        assert_eq!(n.kind, NodeKind::Rectangle);
        assert_eq!(n.bounds, None);
        assert!(n.fills().is_empty());
        assert!(n.children().is_empty());
    }

    #[test]
    fn bounds_and_children() {
        let n = node(
            r#"{
                "type": "FRAME", "name": "Card", "visible": true, "opacity": 0.5,
                "absoluteBoundingBox": { "x": 10, "y": 20, "width": 100, "height": 50 },
                "children": [ { "type": "ELLIPSE", "name": "Dot", "visible": false } ]
            }"#,
        );
        assert_eq!(n.bounds, Some(Bounds::new(10.0, 20.0, 100.0, 50.0)));
        assert_eq!(n.opacity, Some(0.5));
        assert_eq!(n.children().len(), 1);
        assert!(!n.children()[0].visible);
    }

    #[test]
    fn unknown_type_keeps_its_name() {
        let instance = node(r#"{ "type": "INSTANCE", "name": "Btn" }"#);
        let slice = node(r#"{ "type": "SLICE", "name": "Btn" }"#);
        assert_eq!(instance.kind, NodeKind::Other("INSTANCE".into()));
        assert_eq!(slice.kind.as_str(), "SLICE");
        assert_ne!(instance, slice);
    }

    #[test]
    fn known_types_map_both_ways() {
        for ty in ["FRAME", "GROUP", "RECTANGLE", "ELLIPSE", "TEXT", "VECTOR"] {
            let kind = NodeKind::from_type(ty);
            assert!(!matches!(kind, NodeKind::Other(_)), "{ty}");
            assert_eq!(kind.as_str(), ty);
        }
    }

    #[test]
    fn uniform_font() {
        let n = node(
            r#"{ "type": "TEXT", "name": "T", "characters": "Hi",
                 "fontName": { "family": "Inter", "style": "Bold" }, "fontSize": 14 }"#,
        );
        assert_eq!(n.font_name.as_ref().and_then(FontValue::uniform).map(|f| f.family.as_str()), Some("Inter"));
        assert_eq!(n.font_size.as_ref().and_then(FontValue::uniform), Some(&14.0));
    }

    #[test]
    fn mixed_font() {
        let n = node(r#"{ "type": "TEXT", "name": "T", "fontName": "mixed", "fontSize": "mixed" }"#);
        assert_eq!(n.font_name, Some(FontValue::Mixed("mixed".into())));
        assert_eq!(n.font_size, Some(FontValue::Mixed("mixed".into())));
    }
}
