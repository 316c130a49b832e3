use indexmap::IndexMap;

use crate::error::MarkupError;

/// Element type used for documentation comments: `<!-- ... -->`.
pub const COMMENT: &str = "!--";

// ── Tag ───────────────────────────────────────────────────────────────────

/// A single markup element in the generated document.
///
/// A `Tag` owns its children outright; the tree is built bottom-up by value
/// and never shares or re-parents nodes.
///
/// ```
/// use xamlforge_markup::Tag;
///
/// let mut canvas = Tag::with_attributes("Canvas", [("x:Name", "Box")]);
/// canvas.add_child(Tag::new("TextBlock")).unwrap();
/// assert!(canvas.has_children());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    kind: String,
    attributes: IndexMap<String, String>,
    children: Vec<Tag>,
}

impl Tag {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into(), attributes: IndexMap::new(), children: Vec::new() }
    }

    /// Creates a tag with an initial attribute list, kept in the given order.
    pub fn with_attributes<I, K, V>(kind: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut tag = Self::new(kind);
        for (name, value) in attributes {
            tag.set_attribute(name, value);
        }
        tag
    }

    /// Creates a documentation comment carrying `attributes`.
    pub fn comment<I, K, V>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::with_attributes(COMMENT, attributes)
    }

    /// Element name, e.g. `"Canvas"` or `"Canvas.Background"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_comment(&self) -> bool {
        self.kind.starts_with(COMMENT)
    }

    /// Sets `name` to `value`.
    ///
    /// An existing attribute keeps its original position; only its value
    /// changes.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends `child` as the last child.
    ///
    /// Comments cannot hold children; trying to give them one is a contract
    /// breach upstream and is reported as an error.
    pub fn add_child(&mut self, child: Tag) -> Result<&mut Self, MarkupError> {
        if self.is_comment() {
            return Err(MarkupError::CommentWithChildren { child: child.kind });
        }
        self.children.push(child);
        Ok(self)
    }

    /// Whether the tag renders as an open/close pair rather than self-closing.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// Mutable access to existing children. The slice cannot grow, so the
    /// comment invariant still holds.
    pub fn children_mut(&mut self) -> &mut [Tag] {
        &mut self.children
    }

    /// Pre-order walk over this tag and all descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Tag)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
