//! Design tree → tag tree.
//!
//! Every visible source node becomes a placement container:
//!
//! ```xml
//! <Canvas x:Name="Box" Width="100" Height="50" Canvas.Left="10" Canvas.Top="20" >
//!   <!-- Name="Box" X="10.000" Y="20.000" Width="100.000" Height="50.000" -->
//!   <TextBlock ... />            (text nodes only)
//!   <Canvas.Background> ... </Canvas.Background>
//!   ...converted children...
//! </Canvas>
//! ```
//!
//! Containers are built before their children and attached to the parent
//! only afterwards, once it is known whether they hold anything. Empty ones
//! are dropped.

use xamlforge_markup::{Tag, NAME_ATTRIBUTE};

use crate::brush;
use crate::design::{Bounds, FontValue, NodeKind, SourceNode};
use crate::error::ConvertResult;
use crate::number;
use crate::options::{ConvertOptions, PositionMode};

pub const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml/presentation";
pub const XAML_X_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2006/xaml";

// ── TreeBuilder ───────────────────────────────────────────────────────────

pub struct TreeBuilder<'o> {
    options: &'o ConvertOptions,
}

impl<'o> TreeBuilder<'o> {
    pub fn new(options: &'o ConvertOptions) -> Self {
        Self { options }
    }

    /// Builds the document root holding one container per top-level node
    /// that produced output.
    pub fn build(&self, nodes: &[SourceNode]) -> ConvertResult<Tag> {
        let mut root = Tag::new(self.options.container.as_str());
        if self.options.namespaces {
            root.set_attribute("xmlns", XAML_NAMESPACE);
            root.set_attribute("xmlns:x", XAML_X_NAMESPACE);
        }
        root.set_attribute(NAME_ATTRIBUTE, self.options.root_name.as_str());

        self.build_into(&mut root, nodes, (0.0, 0.0))?;
        Ok(root)
    }

    /// Converts `node` and its subtree.
    ///
    /// `origin` is the absolute origin the node's position is measured from
    /// in [`PositionMode::RelativeToParent`]. Returns `None` when nothing in
    /// the subtree produced output.
    pub fn build_node(&self, node: &SourceNode, origin: (f64, f64)) -> ConvertResult<Option<Tag>> {
        if !node.visible {
            log::debug!("node '{}': hidden, subtree skipped", node.name);
            return Ok(None);
        }

        let geometry = node.bounds.map(|b| match self.options.position_mode {
            PositionMode::RelativeToParent => b.relative_to(origin),
            PositionMode::Absolute => b,
        });
        if geometry.is_none() {
            log::debug!("node '{}': no bounding box, geometry left to the layout", node.name);
        }

        let mut container = self.placement(node, geometry);
        match &node.kind {
            NodeKind::Other(ty) => {
                log::warn!("node '{}': unsupported node type '{ty}', only its children are converted", node.name);
            }
            _ => self.add_content(&mut container, node, geometry)?,
        }

        let child_origin = node.bounds.map(Bounds::origin).unwrap_or(origin);
        self.build_into(&mut container, node.children(), child_origin)?;

        Ok(container.has_children().then_some(container))
    }

    fn build_into(&self, parent: &mut Tag, nodes: &[SourceNode], origin: (f64, f64)) -> ConvertResult<()> {
        for node in nodes {
            if let Some(container) = self.build_node(node, origin)? {
                parent.add_child(container)?;
            }
        }
        Ok(())
    }

    fn placement(&self, node: &SourceNode, geometry: Option<Bounds>) -> Tag {
        let mut tag = Tag::with_attributes(self.options.container.as_str(), [(NAME_ATTRIBUTE, node.name.as_str())]);
        if let Some(g) = geometry {
            tag.set_attribute("Width", number::compact(g.width));
            tag.set_attribute("Height", number::compact(g.height));
            tag.set_attribute("Canvas.Left", number::compact(g.x));
            tag.set_attribute("Canvas.Top", number::compact(g.y));
        }
        if let Some(o) = node.opacity {
            tag.set_attribute("Opacity", number::compact(o));
        }
        tag
    }

    fn add_content(&self, container: &mut Tag, node: &SourceNode, geometry: Option<Bounds>) -> ConvertResult<()> {
        container.add_child(comment(&node.name, geometry))?;

        if node.kind == NodeKind::Text {
            container.add_child(self.text_block(node))?;
        }

        if let Some(bg) = brush::background(container.kind(), node.fills(), &node.name, self.options)? {
            container.add_child(bg)?;
        }
        Ok(())
    }

    fn text_block(&self, node: &SourceNode) -> Tag {
        let family = match node.font_name.as_ref().and_then(FontValue::uniform) {
            Some(f) => f.family.as_str(),
            None => {
                log::debug!("node '{}': mixed or missing font family, using default", node.name);
                self.options.default_font_family.as_str()
            }
        };
        let size = match node.font_size.as_ref().and_then(FontValue::uniform) {
            Some(&s) => s,
            None => {
                log::debug!("node '{}': mixed or missing font size, using default", node.name);
                self.options.default_font_size
            }
        };

        Tag::with_attributes(
            "TextBlock",
            [
                ("Text", node.characters.as_deref().unwrap_or_default().to_owned()),
                ("TextWrapping", "Wrap".to_owned()),
                ("TextAlignment", "Left".to_owned()),
                ("FontFamily", family.to_owned()),
                ("FontSize", number::compact(size)),
            ],
        )
    }
}

/// Traceability comment: the source name and the container geometry.
fn comment(name: &str, geometry: Option<Bounds>) -> Tag {
    let mut tag = Tag::comment([("Name", name)]);
    if let Some(g) = geometry {
        tag.set_attribute("X", number::fixed(g.x));
        tag.set_attribute("Y", number::fixed(g.y));
        tag.set_attribute("Width", number::fixed(g.width));
        tag.set_attribute("Height", number::fixed(g.height));
    }
    tag
}
