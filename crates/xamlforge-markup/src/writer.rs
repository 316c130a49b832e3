use std::borrow::Cow;

use crate::error::{MarkupError, MarkupResult};
use crate::tag::Tag;

/// Spaces per nesting level unless configured otherwise.
pub const DEFAULT_INDENT: usize = 2;

// ── Writer ────────────────────────────────────────────────────────────────

/// Accumulates rendered lines for one document.
///
/// Output rules:
/// - every line ends with `\n`, indented `depth * indent` spaces
/// - attributes render as ` name="value" ` (leading and trailing space) in
///   the tag's own order; an attribute-less tag renders as `<Type/>`
/// - comments render as `<!-- attrs -->`
/// - childless tags self-close, others get an open/close pair
///
/// A writer is consumed by [`finish`](Self::finish); build a new one for each
/// document.
#[derive(Debug)]
pub struct Writer {
    out: String,
    depth: usize,
    indent: usize,
}

impl Writer {
    pub fn new(indent: usize) -> Self {
        Self { out: String::new(), depth: 0, indent }
    }

    /// Renders `tag` and its subtree at the current depth.
    pub fn write_tag(&mut self, tag: &Tag) -> MarkupResult<()> {
        if tag.is_comment() {
            if let Some(child) = tag.children().first() {
                return Err(MarkupError::CommentWithChildren { child: child.kind().to_owned() });
            }
            let attrs = attribute_list(tag, true);
            self.line(format_args!("<{}{}-->", tag.kind(), attrs));
            return Ok(());
        }

        let attrs = attribute_list(tag, false);
        if !tag.has_children() {
            self.line(format_args!("<{}{}/>", tag.kind(), attrs));
            return Ok(());
        }

        self.line(format_args!("<{}{}>", tag.kind(), attrs));
        self.depth += 1;
        for child in tag.children() {
            self.write_tag(child)?;
        }
        self.depth -= 1;
        self.line(format_args!("</{}>", tag.kind()));
        Ok(())
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, content: std::fmt::Arguments<'_>) {
        let pad = self.depth * self.indent;
        self.out.push_str(&format!("{:pad$}{content}\n", ""));
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

// ── Entry points ──────────────────────────────────────────────────────────

/// Renders `tag` as a standalone document fragment.
pub fn render(tag: &Tag, indent: usize) -> MarkupResult<String> {
    let mut writer = Writer::new(indent);
    writer.write_tag(tag)?;
    Ok(writer.finish())
}

/// Renders a document rooted at `root`.
///
/// A root with no children means nothing was selected for output, and the
/// document is empty.
pub fn render_document(root: &Tag, indent: usize) -> MarkupResult<String> {
    if !root.has_children() {
        return Ok(String::new());
    }
    render(root, indent)
}

// ── Attributes ────────────────────────────────────────────────────────────

fn attribute_list(tag: &Tag, in_comment: bool) -> String {
    if tag.attributes().len() == 0 {
        return String::new();
    }
    let mut s = String::from(" ");
    for (name, value) in tag.attributes() {
        let value = escape_attribute(value);
        let value = if in_comment { break_double_dash(value) } else { value };
        s.push_str(name);
        s.push_str("=\"");
        s.push_str(&value);
        s.push_str("\" ");
    }
    s
}

/// Escapes characters that would end the quoted value or break the line.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\n', '\r', '\t']) {
        return Cow::Borrowed(value);
    }
    let mut s = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\n' => s.push_str("&#10;"),
            '\r' => s.push_str("&#13;"),
            '\t' => s.push_str("&#9;"),
            c => s.push(c),
        }
    }
    Cow::Owned(s)
}

// `--` may not appear inside an XML comment.
fn break_double_dash(value: Cow<'_, str>) -> Cow<'_, str> {
    if !value.contains("--") {
        return value;
    }
    let mut s = value.into_owned();
    while s.contains("--") {
        s = s.replace("--", "- -");
    }
    Cow::Owned(s)
}
