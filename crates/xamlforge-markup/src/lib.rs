//! Tag tree and text writer for generated **XAML** markup.
//!
//! This crate knows nothing about design trees. It holds the generic element
//! model the converter builds, the pass that makes element names unique, and
//! the writer that turns a finished tree into text.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`tag`] | `Tag`, the comment marker |
//! | [`dedup`] | `NameRegistry`, `deduplicate_names` |
//! | [`writer`] | `Writer`, `render`, `render_document` |
//! | [`error`] | `MarkupError` |
//!
//! # Quick start
//!
//! ```rust
//! use xamlforge_markup::{Tag, render};
//!
//! let mut root = Tag::with_attributes("Canvas", [("x:Name", "Root")]);
//! root.add_child(Tag::with_attributes("Canvas", [("x:Name", "Box")])).unwrap();
//!
//! let text = render(&root, 2).unwrap();
//! assert_eq!(text, "<Canvas x:Name=\"Root\" >\n  <Canvas x:Name=\"Box\" />\n</Canvas>\n");
//! ```

pub mod dedup;
pub mod error;
pub mod tag;
pub mod writer;

pub use dedup::{deduplicate_names, NameRegistry, NAME_ATTRIBUTE};
pub use error::{MarkupError, MarkupResult};
pub use tag::{Tag, COMMENT};
pub use writer::{render, render_document, Writer, DEFAULT_INDENT};
