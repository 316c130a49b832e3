//! Read-only model of the host's design tree.
//!
//! Field names follow the host's plugin/REST JSON so an exported selection
//! deserializes directly. Anything the converter does not understand maps to
//! an explicit fallback variant rather than a parse failure.

mod bounds;
mod node;

pub use bounds::Bounds;
pub use node::{FontName, FontValue, NodeKind, SourceNode};
